//! Shared handle to the landmark engine.
//!
//! DESIGN
//! ======
//! The engine owns the map surface, which under `csr` holds JS objects and
//! closures, so it lives in a thread-local stored value rather than a signal.
//! Every write goes through [`AtlasHandle::with_mut`], which republishes a
//! [`PageView`] snapshot when the engine revision moves. The slot is empty
//! until the map host mounts the map element.

use leptos::prelude::*;

use landmarks::{Atlas, AtlasConfig, LatLng};

use crate::state::page::PageView;

/// Map surface the engine drives in this build.
#[cfg(feature = "csr")]
pub type Surface = crate::util::google_maps::GoogleMap;
#[cfg(not(feature = "csr"))]
pub type Surface = landmarks::MemoryMap;

pub type Engine = Atlas<Surface>;

#[derive(Clone, Copy)]
pub struct AtlasHandle {
    engine: StoredValue<Option<Engine>, LocalStorage>,
    config: StoredValue<AtlasConfig>,
    view: RwSignal<PageView>,
}

impl AtlasHandle {
    pub fn new(config: AtlasConfig) -> Self {
        Self {
            engine: StoredValue::new_local(None),
            config: StoredValue::new(config),
            view: RwSignal::new(PageView::default()),
        }
    }

    pub fn config(&self) -> AtlasConfig {
        self.config.get_value()
    }

    /// Reactive snapshot for rendering.
    pub fn view(&self) -> RwSignal<PageView> {
        self.view
    }

    pub fn is_ready(&self) -> bool {
        self.engine.with_value(Option::is_some)
    }

    /// Place the engine once the map surface exists. A second install is
    /// ignored.
    pub fn install(&self, engine: Engine) {
        let mut installed = false;
        self.engine.update_value(|slot| {
            if slot.is_none() {
                *slot = Some(engine);
                installed = true;
            }
        });
        if installed {
            leptos::logging::log!("landmark engine ready");
        }
        self.publish();
    }

    /// Run `f` against the engine and publish the resulting view. Returns
    /// `None` before the engine is installed.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
        let mut out = None;
        self.engine.update_value(|slot| {
            if let Some(engine) = slot.as_mut() {
                out = Some(f(engine));
            }
        });
        self.publish();
        out
    }

    /// Pending position read straight from the engine.
    pub fn pending_position(&self) -> Option<LatLng> {
        self.engine.with_value(|slot| slot.as_ref().and_then(Engine::pending_position))
    }

    fn publish(&self) {
        let Some(next) = self.engine.with_value(|slot| slot.as_ref().map(PageView::capture)) else {
            return;
        };
        if self.view.with_untracked(|current| *current != next) {
            self.view.set(next);
        }
    }
}
