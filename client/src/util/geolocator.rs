//! Device location over `navigator.geolocation`.
//!
//! DESIGN
//! ======
//! `getCurrentPosition` reports through two callbacks. Both race to fill a
//! single oneshot sender; the first to fire wins and the other becomes a
//! no-op. The closures are owned by the future and dropped once it resolves.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

use landmarks::geolocation::{Geolocator, LocateOptions};
use landmarks::{LatLng, PickError};

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<LatLng, PickError>>>>>;

pub struct BrowserGeolocator;

impl Geolocator for BrowserGeolocator {
    async fn locate(&self, options: &LocateOptions) -> Result<LatLng, PickError> {
        let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) else {
            return Err(PickError::geolocation_unsupported());
        };

        let (tx, rx) = oneshot::channel();
        let reply: Reply = Rc::new(RefCell::new(Some(tx)));

        let reply_ok = Rc::clone(&reply);
        let on_success = Closure::wrap(Box::new(move |position: JsValue| {
            send(&reply_ok, read_position(&position));
        }) as Box<dyn FnMut(JsValue)>);
        let reply_err = Rc::clone(&reply);
        let on_error = Closure::wrap(Box::new(move |error: JsValue| {
            send(&reply_err, Err(read_error(&error)));
        }) as Box<dyn FnMut(JsValue)>);

        let requested = geolocation.get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &position_options(options),
        );
        if let Err(e) = requested {
            return Err(PickError::GeolocationUnavailable(js_text(&e, "location request rejected")));
        }

        let outcome = rx
            .await
            .unwrap_or_else(|_| Err(PickError::GeolocationUnavailable("location request dropped".to_owned())));
        drop((on_success, on_error));
        outcome
    }
}

fn send(reply: &Reply, outcome: Result<LatLng, PickError>) {
    if let Some(tx) = reply.borrow_mut().take() {
        let _ = tx.send(outcome);
    }
}

fn position_options(options: &LocateOptions) -> web_sys::PositionOptions {
    let object = Object::new();
    let _ = Reflect::set(&object, &"enableHighAccuracy".into(), &options.high_accuracy.into());
    if let Some(timeout) = options.timeout_ms {
        let _ = Reflect::set(&object, &"timeout".into(), &timeout.into());
    }
    let _ = Reflect::set(&object, &"maximumAge".into(), &options.maximum_age_ms.into());
    object.unchecked_into()
}

fn number(target: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(target, &key.into()).ok()?.as_f64()
}

fn read_position(position: &JsValue) -> Result<LatLng, PickError> {
    let coords = Reflect::get(position, &"coords".into()).unwrap_or(JsValue::UNDEFINED);
    match (number(&coords, "latitude"), number(&coords, "longitude")) {
        (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Ok(LatLng::new(lat, lng)),
        _ => Err(PickError::GeolocationUnavailable("position without coordinates".to_owned())),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn read_error(error: &JsValue) -> PickError {
    let code = number(error, "code").filter(|c| (0.0..=f64::from(u16::MAX)).contains(c)).map_or(0, |c| c as u16);
    let message = Reflect::get(error, &"message".into()).ok().and_then(|m| m.as_string()).unwrap_or_default();
    PickError::from_position_error(code, &message)
}

fn js_text(value: &JsValue, fallback: &str) -> String {
    value.as_string().unwrap_or_else(|| fallback.to_owned())
}
