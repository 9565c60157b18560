//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use landmarks::form::FormController;

use crate::components::{
    confirm_dialog::ConfirmDialog, landmark_form::LandmarkForm, landmark_list::LandmarkList, map_host::MapHost,
};
use crate::state::atlas::AtlasHandle;
use crate::util::page_config::load_config;

/// Root application component.
///
/// Loads the page config once and provides the engine handle and the form
/// controller to every child.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    let form = RwSignal::new(FormController::new(&config));
    let handle = AtlasHandle::new(config);

    provide_context(handle);
    provide_context(form);

    view! {
        <Title text="Landmarks"/>
        <main class="landmarks-page">
            <MapHost/>
            <aside class="landmarks-sidebar">
                <LandmarkForm/>
                <LandmarkList/>
            </aside>
            <ConfirmDialog/>
        </main>
    }
}
