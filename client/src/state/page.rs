//! Render snapshot of the landmark engine.
//!
//! DESIGN
//! ======
//! Components never borrow the engine while rendering. After every engine
//! call the handle captures a [`PageView`] and publishes it through a signal;
//! the list, picker readout and confirm dialog render from that copy.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use landmarks::render::ListEntry;
use landmarks::{Atlas, LandmarkId, LatLng, MapSurface};

/// Delete awaiting the user's answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: LandmarkId,
    pub title: String,
}

impl PendingDelete {
    /// Question shown in the confirm dialog.
    pub fn prompt(&self) -> String {
        format!("Delete \"{}\"? This cannot be undone.", self.title)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageView {
    pub revision: u64,
    pub entries: Vec<ListEntry>,
    /// Entries whose marker is shown.
    pub visible: usize,
    pub pending: Option<LatLng>,
    pub selected: Option<LandmarkId>,
    pub confirm: Option<PendingDelete>,
}

impl PageView {
    pub fn capture<S: MapSurface>(atlas: &Atlas<S>) -> Self {
        let confirm = atlas
            .delete_confirmation()
            .and_then(|id| atlas.record(id))
            .map(|record| PendingDelete { id: record.id(), title: record.title().to_owned() });
        Self {
            revision: atlas.revision(),
            entries: atlas.list(),
            visible: atlas.registry().visible_count(),
            pending: atlas.pending_position(),
            selected: atlas.selected(),
            confirm,
        }
    }

    /// Readout under the picker controls.
    pub fn pending_label(&self) -> String {
        match self.pending {
            Some(position) => format!("Selected: {position}"),
            None => "No location selected. Click the map, use your location, or enter coordinates.".to_owned(),
        }
    }

    /// Heading for the list panel.
    pub fn list_heading(&self) -> String {
        let total = self.entries.len();
        let visible = self.visible;
        if visible == total {
            format!("Landmarks ({total})")
        } else {
            format!("Landmarks ({visible} of {total} shown)")
        }
    }
}
