//! Google Maps implementation of [`MapSurface`].
//!
//! ARCHITECTURE
//! ============
//! Expects the Maps JavaScript API (`google.maps`) to be loaded by the host
//! page before the wasm module starts. Listeners never capture engine state:
//! each one forwards a [`MapEvent`] carrying at most a landmark id to the
//! dispatcher, which resolves it against the live engine when it fires.
//!
//! The info window's own close button reports `PopupClosed` so the engine
//! drops its selection along with the popup.
//!
//! Popup content is raw HTML inside the map container, so its delete button
//! is handled by one capture-phase listener on the container that looks for
//! the `data-delete-landmark` attribute.

use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

use landmarks::render::DELETE_ATTR;
use landmarks::{AtlasConfig, LandmarkId, LatLng, MapEvent, MapSurface, MarkerBinding};

mod sys {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ["google", "maps"])]
        pub type Map;

        #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
        pub fn new(element: &web_sys::HtmlElement, options: &JsValue) -> Map;

        #[wasm_bindgen(method, js_name = panTo)]
        pub fn pan_to(this: &Map, center: &JsValue);

        #[wasm_bindgen(method, js_name = setZoom)]
        pub fn set_zoom(this: &Map, zoom: f64);

        #[wasm_bindgen(method, js_name = addListener)]
        pub fn add_listener(this: &Map, event: &str, handler: &js_sys::Function) -> JsValue;

        #[wasm_bindgen(js_namespace = ["google", "maps"])]
        pub type Marker;

        #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
        pub fn new(options: &JsValue) -> Marker;

        #[wasm_bindgen(method, js_name = setMap)]
        pub fn set_map(this: &Marker, map: &JsValue);

        #[wasm_bindgen(method, js_name = addListener)]
        pub fn add_listener(this: &Marker, event: &str, handler: &js_sys::Function) -> JsValue;

        #[wasm_bindgen(js_namespace = ["google", "maps"])]
        pub type InfoWindow;

        #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
        pub fn new() -> InfoWindow;

        #[wasm_bindgen(method, js_name = setContent)]
        pub fn set_content(this: &InfoWindow, content: &str);

        #[wasm_bindgen(method)]
        pub fn open(this: &InfoWindow, options: &JsValue);

        #[wasm_bindgen(method)]
        pub fn close(this: &InfoWindow);

        #[wasm_bindgen(method, js_name = addListener)]
        pub fn add_listener(this: &InfoWindow, event: &str, handler: &js_sys::Function) -> JsValue;

        #[wasm_bindgen(js_namespace = ["google", "maps"])]
        pub type LatLng;

        #[wasm_bindgen(method)]
        pub fn lat(this: &LatLng) -> f64;

        #[wasm_bindgen(method)]
        pub fn lng(this: &LatLng) -> f64;

        #[wasm_bindgen(js_namespace = ["google", "maps", "event"], js_name = clearInstanceListeners)]
        pub fn clear_instance_listeners(instance: &JsValue);
    }
}

/// Forwards map interactions to the engine.
pub type Dispatch = Rc<dyn Fn(MapEvent)>;

pub struct GoogleMarker {
    marker: sys::Marker,
    _on_click: Option<Closure<dyn FnMut(JsValue)>>,
}

pub struct GoogleMap {
    map: sys::Map,
    info_window: sys::InfoWindow,
    dispatch: Dispatch,
    _on_map_click: Closure<dyn FnMut(JsValue)>,
    _on_popup_close: Closure<dyn FnMut(JsValue)>,
    _on_popup_click: Closure<dyn FnMut(web_sys::Event)>,
}

impl GoogleMap {
    /// Create the map inside `element`, centered per `config`.
    pub fn new(element: &web_sys::HtmlElement, config: &AtlasConfig, dispatch: Dispatch) -> Self {
        let options = Object::new();
        set(&options, "center", &lat_lng_literal(config.default_center));
        set(&options, "zoom", &config.default_zoom.into());
        set(&options, "clickableIcons", &false.into());
        let map = sys::Map::new(element, &options);

        let dispatch_click = Rc::clone(&dispatch);
        let on_map_click = Closure::wrap(Box::new(move |event: JsValue| {
            if let Some(position) = event_position(&event) {
                dispatch_click(MapEvent::Clicked(position));
            }
        }) as Box<dyn FnMut(JsValue)>);
        map.add_listener("click", on_map_click.as_ref().unchecked_ref());

        let info_window = sys::InfoWindow::new();
        let dispatch_close = Rc::clone(&dispatch);
        let on_popup_close = Closure::wrap(Box::new(move |_event: JsValue| {
            dispatch_close(MapEvent::PopupClosed);
        }) as Box<dyn FnMut(JsValue)>);
        info_window.add_listener("closeclick", on_popup_close.as_ref().unchecked_ref());

        let dispatch_popup = Rc::clone(&dispatch);
        let on_popup_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(id) = delete_target(&event) {
                event.prevent_default();
                dispatch_popup(MapEvent::PopupDeleteRequested(id));
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = element.add_event_listener_with_callback_and_bool("click", on_popup_click.as_ref().unchecked_ref(), true);

        Self {
            map,
            info_window,
            dispatch,
            _on_map_click: on_map_click,
            _on_popup_close: on_popup_close,
            _on_popup_click: on_popup_click,
        }
    }
}

impl MapSurface for GoogleMap {
    type Marker = GoogleMarker;

    fn place_marker(&mut self, position: LatLng, label: &str, binding: MarkerBinding) -> GoogleMarker {
        let options = Object::new();
        set(&options, "position", &lat_lng_literal(position));
        set(&options, "map", self.map.as_ref());
        set(&options, "title", &label.into());
        if binding == MarkerBinding::Pending {
            set(&options, "opacity", &0.6.into());
        }
        let marker = sys::Marker::new(&options);

        let on_click = match binding {
            MarkerBinding::Landmark(id) => {
                let dispatch = Rc::clone(&self.dispatch);
                let closure = Closure::wrap(Box::new(move |_event: JsValue| {
                    dispatch(MapEvent::MarkerClicked(id));
                }) as Box<dyn FnMut(JsValue)>);
                marker.add_listener("click", closure.as_ref().unchecked_ref());
                Some(closure)
            }
            MarkerBinding::Pending => None,
        };
        GoogleMarker { marker, _on_click: on_click }
    }

    fn set_marker_visible(&mut self, marker: &GoogleMarker, visible: bool) {
        if visible {
            marker.marker.set_map(self.map.as_ref());
        } else {
            marker.marker.set_map(&JsValue::NULL);
        }
    }

    fn remove_marker(&mut self, marker: GoogleMarker) {
        marker.marker.set_map(&JsValue::NULL);
        sys::clear_instance_listeners(marker.marker.as_ref());
    }

    fn pan_to(&mut self, center: LatLng, zoom: Option<u8>) {
        self.map.pan_to(&lat_lng_literal(center));
        if let Some(zoom) = zoom {
            self.map.set_zoom(f64::from(zoom));
        }
    }

    fn open_popup(&mut self, marker: &GoogleMarker, html: &str) {
        self.info_window.set_content(html);
        let options = Object::new();
        set(&options, "anchor", marker.marker.as_ref());
        set(&options, "map", self.map.as_ref());
        self.info_window.open(&options);
    }

    fn close_popup(&mut self) {
        self.info_window.close();
    }
}

fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &key.into(), value);
}

fn lat_lng_literal(position: LatLng) -> JsValue {
    let literal = Object::new();
    set(&literal, "lat", &position.lat.into());
    set(&literal, "lng", &position.lng.into());
    literal.into()
}

fn event_position(event: &JsValue) -> Option<LatLng> {
    let raw = Reflect::get(event, &"latLng".into()).ok()?;
    if raw.is_undefined() || raw.is_null() {
        return None;
    }
    let lat_lng: sys::LatLng = raw.unchecked_into();
    Some(LatLng::new(lat_lng.lat(), lat_lng.lng()))
}

fn delete_target(event: &web_sys::Event) -> Option<LandmarkId> {
    let target = event.target()?.dyn_into::<web_sys::Element>().ok()?;
    let control = target.closest(&format!("[{DELETE_ATTR}]")).ok()??;
    control.get_attribute(DELETE_ATTR)?.parse().ok()
}
