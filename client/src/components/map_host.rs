//! Bridge between the map element and the landmark engine.
//!
//! ARCHITECTURE
//! ============
//! In the browser build the host waits for its `<div>` to mount, creates the
//! Google map inside it and installs the engine. Map listeners reach the
//! engine only through the dispatcher built here. Elsewhere the engine runs
//! on a headless map and the element stays empty.

use leptos::prelude::*;

use landmarks::Atlas;
#[cfg(feature = "csr")]
use landmarks::atlas::EventOutcome;
#[cfg(feature = "csr")]
use landmarks::render::entry_dom_id;

use crate::state::atlas::AtlasHandle;
#[cfg(feature = "csr")]
use crate::util::browser::scroll_into_view_by_id;
#[cfg(feature = "csr")]
use crate::util::google_maps::{Dispatch, GoogleMap};

#[component]
pub fn MapHost() -> impl IntoView {
    let handle = expect_context::<AtlasHandle>();
    let map_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            let Some(element) = map_ref.get() else {
                return;
            };
            if handle.is_ready() {
                return;
            }
            let dispatch: Dispatch = std::rc::Rc::new(move |event| {
                let outcome = handle.with_mut(|atlas| atlas.handle_event(event));
                if let Some(EventOutcome::Selected(id)) = outcome {
                    scroll_into_view_by_id(&entry_dom_id(id));
                }
            });
            let config = handle.config();
            let map = GoogleMap::new(&element, &config, dispatch);
            handle.install(Atlas::new(map, config));
        });
    }

    #[cfg(not(feature = "csr"))]
    {
        let config = handle.config();
        handle.install(Atlas::new(landmarks::MemoryMap::new(config.default_center, config.default_zoom), config));
    }

    view! { <div class="landmark-map" node_ref=map_ref></div> }
}
