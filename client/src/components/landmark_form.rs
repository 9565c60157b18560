//! New-landmark form and position picker controls.
//!
//! DESIGN
//! ======
//! The form controller's `begin` runs synchronously on submit. The photo is
//! read afterwards in a spawned task, and `finish` then runs against the
//! engine, so nothing holds the engine across the file read. A failure moves
//! focus to the field the controller names. Either way the notice is cleared
//! once its lifetime has passed.

#[cfg(test)]
#[path = "landmark_form_test.rs"]
mod landmark_form_test;

use leptos::prelude::*;

use landmarks::PickError;
use landmarks::form::{FormController, FormField, FormInput, Submission};
use landmarks::photo::Photo;
use landmarks::{ImageReadError, LandmarkId};

use crate::components::notice_bar::{NoticeBar, schedule_notice_clear};
use crate::state::atlas::AtlasHandle;
use crate::util::browser::{focus_by_id, now_ms};
#[cfg(feature = "csr")]
use crate::util::file_image::FileImage;

pub const TITLE_ID: &str = "landmark-title";
pub const DESCRIPTION_ID: &str = "landmark-description";
pub const LAT_ID: &str = "landmark-lat";
pub const LNG_ID: &str = "landmark-lng";
pub const IMAGE_ID: &str = "landmark-image";

/// Image chosen in the file input.
#[cfg(feature = "csr")]
pub type ChosenImage = FileImage;
#[cfg(not(feature = "csr"))]
pub type ChosenImage = Photo;

/// Element id to focus for a form field. The position picker is focused
/// through its latitude input.
pub fn field_dom_id(field: FormField) -> &'static str {
    match field {
        FormField::Title => TITLE_ID,
        FormField::Description => DESCRIPTION_ID,
        FormField::Position => LAT_ID,
        FormField::Image => IMAGE_ID,
    }
}

pub fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Adding..." } else { "Add landmark" }
}

/// Inputs owned by the form component.
#[derive(Clone, Copy)]
struct FormFields {
    title: RwSignal<String>,
    description: RwSignal<String>,
    lat: RwSignal<String>,
    lng: RwSignal<String>,
    chosen: StoredValue<Option<ChosenImage>, LocalStorage>,
    file_input: NodeRef<leptos::html::Input>,
}

impl FormFields {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            lat: RwSignal::new(String::new()),
            lng: RwSignal::new(String::new()),
            chosen: StoredValue::new_local(None),
            file_input: NodeRef::new(),
        }
    }

    fn input(&self) -> FormInput<ChosenImage> {
        FormInput {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            image: self.chosen.get_value(),
        }
    }

    fn reset(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.lat.set(String::new());
        self.lng.set(String::new());
        self.chosen.set_value(None);
        #[cfg(feature = "csr")]
        {
            if let Some(input) = self.file_input.get_untracked() {
                input.set_value("");
            }
        }
    }
}

fn focus_requested(form: RwSignal<FormController>) {
    if let Some(field) = form.with_untracked(FormController::focus) {
        focus_by_id(field_dom_id(field));
    }
}

fn report_pick_error(form: RwSignal<FormController>, ttl_ms: u64, error: &PickError) {
    form.update(|f| f.report_pick_error(error, now_ms()));
    if matches!(error, PickError::InvalidCoordinate { .. }) {
        focus_requested(form);
    }
    schedule_notice_clear(form, ttl_ms);
}

fn complete_submission(
    handle: AtlasHandle,
    form: RwSignal<FormController>,
    fields: FormFields,
    submission: Submission,
    photo: Result<Option<Photo>, ImageReadError>,
) {
    let now = now_ms();
    let created: Option<LandmarkId> = handle
        .with_mut(|atlas| form.try_update(|f| f.finish(atlas, submission, photo, now)))
        .flatten()
        .and_then(Result::ok);
    if let Some(id) = created {
        leptos::logging::log!("landmark {id} added");
        fields.reset();
    } else {
        focus_requested(form);
    }
    schedule_notice_clear(form, handle.config().notice_ttl_ms);
}

#[component]
pub fn LandmarkForm() -> impl IntoView {
    let handle = expect_context::<AtlasHandle>();
    let form = expect_context::<RwSignal<FormController>>();
    let fields = FormFields::new();
    let ttl_ms = handle.config().notice_ttl_ms;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !handle.is_ready() {
            leptos::logging::warn!("landmark form submitted before the map loaded");
            return;
        }
        let input = fields.input();
        let pending = handle.pending_position();
        let Some(begun) = form.try_update(|f| f.begin(&input, pending, now_ms())) else {
            return;
        };
        let Ok(submission) = begun else {
            focus_requested(form);
            schedule_notice_clear(form, ttl_ms);
            return;
        };

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                use landmarks::photo::ImageSource;
                let photo = match &input.image {
                    Some(file) => file.read().await.map(Some),
                    None => Ok(None),
                };
                complete_submission(handle, form, fields, submission, photo);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            complete_submission(handle, form, fields, submission, Ok(input.image));
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            let file = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            fields.chosen.set_value(file.map(FileImage));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let submitting = move || form.with(FormController::is_submitting);

    view! {
        <form class="landmark-form" on:submit=on_submit novalidate=true>
            <h2>"Add a landmark"</h2>
            <label for=TITLE_ID>"Title"</label>
            <input
                id=TITLE_ID
                type="text"
                prop:value=move || fields.title.get()
                on:input=move |ev| fields.title.set(event_target_value(&ev))
            />
            <label for=DESCRIPTION_ID>"Description"</label>
            <textarea
                id=DESCRIPTION_ID
                rows="3"
                prop:value=move || fields.description.get()
                on:input=move |ev| fields.description.set(event_target_value(&ev))
            ></textarea>
            <label for=IMAGE_ID>"Photo"</label>
            <input id=IMAGE_ID type="file" accept="image/*" node_ref=fields.file_input on:change=on_file/>
            <PositionPicker lat=fields.lat lng=fields.lng ttl_ms=ttl_ms/>
            <NoticeBar/>
            <button type="submit" class="landmark-form__submit" disabled=submitting>
                {move || submit_label(submitting())}
            </button>
        </form>
    }
}

/// Map-click readout, device location and manual coordinate entry.
#[component]
fn PositionPicker(lat: RwSignal<String>, lng: RwSignal<String>, ttl_ms: u64) -> impl IntoView {
    let handle = expect_context::<AtlasHandle>();
    let form = expect_context::<RwSignal<FormController>>();
    let page = handle.view();
    let locating = RwSignal::new(0_u32);

    let on_manual = move |_| {
        let (lat_text, lng_text) = (lat.get_untracked(), lng.get_untracked());
        if let Some(Err(e)) = handle.with_mut(|atlas| atlas.pick_from_manual_entry(&lat_text, &lng_text)) {
            report_pick_error(form, ttl_ms, &e);
        }
    };

    let on_locate = move |_| {
        #[cfg(feature = "csr")]
        {
            use landmarks::geolocation::Geolocator;
            let options = handle.config().geolocation;
            locating.update(|n| *n += 1);
            leptos::task::spawn_local(async move {
                let outcome = crate::util::geolocator::BrowserGeolocator.locate(&options).await;
                locating.update(|n| *n = n.saturating_sub(1));
                if let Some(Err(e)) = handle.with_mut(|atlas| atlas.apply_location(outcome)) {
                    report_pick_error(form, ttl_ms, &e);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let outcome = Err(PickError::geolocation_unsupported());
            if let Some(Err(e)) = handle.with_mut(|atlas| atlas.apply_location(outcome)) {
                report_pick_error(form, ttl_ms, &e);
            }
        }
    };

    let on_clear = move |_| {
        handle.with_mut(landmarks::Atlas::clear_pending);
    };

    view! {
        <fieldset class="position-picker">
            <legend>"Location"</legend>
            <p class="position-picker__readout">{move || page.with(|p| p.pending_label())}</p>
            <div class="position-picker__manual">
                <label for=LAT_ID>"Latitude"</label>
                <input
                    id=LAT_ID
                    type="text"
                    inputmode="decimal"
                    prop:value=move || lat.get()
                    on:input=move |ev| lat.set(event_target_value(&ev))
                />
                <label for=LNG_ID>"Longitude"</label>
                <input
                    id=LNG_ID
                    type="text"
                    inputmode="decimal"
                    prop:value=move || lng.get()
                    on:input=move |ev| lng.set(event_target_value(&ev))
                />
                <button type="button" on:click=on_manual>"Set location"</button>
            </div>
            <div class="position-picker__actions">
                <button type="button" on:click=on_locate>
                    {move || if locating.get() > 0 { "Locating..." } else { "Use my location" }}
                </button>
                <button type="button" on:click=on_clear disabled=move || page.with(|p| p.pending.is_none())>
                    "Clear"
                </button>
            </div>
        </fieldset>
    }
}
