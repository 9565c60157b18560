use super::*;
use landmarks::{AtlasConfig, MapEvent, MemoryMap, NewLandmark};

fn atlas() -> Atlas<MemoryMap> {
    Atlas::new(MemoryMap::default(), AtlasConfig::default())
}

fn add(atlas: &mut Atlas<MemoryMap>, title: &str) -> LandmarkId {
    atlas
        .create(NewLandmark {
            title: title.to_owned(),
            description: "somewhere".to_owned(),
            image: None,
            position: Some(LatLng::new(43.65, -79.38)),
        })
        .unwrap()
}

// =============================================================
// capture
// =============================================================

#[test]
fn empty_atlas_captures_empty_view() {
    let view = PageView::capture(&atlas());
    assert_eq!(view, PageView::default());
}

#[test]
fn capture_tracks_pending_selection_and_revision() {
    let mut atlas = atlas();
    let id = add(&mut atlas, "Casa Loma");
    atlas.select(id);
    atlas.pick_from_map_click(LatLng::new(1.0, 2.0));

    let view = PageView::capture(&atlas);

    assert_eq!(view.revision, atlas.revision());
    assert_eq!(view.entries.len(), 1);
    assert!(view.entries[0].is_selected);
    assert_eq!(view.selected, Some(id));
    assert_eq!(view.pending, Some(LatLng::new(1.0, 2.0)));
    assert!(view.confirm.is_none());
}

#[test]
fn capture_names_the_landmark_awaiting_delete() {
    let mut atlas = atlas();
    let id = add(&mut atlas, "Union Station");
    atlas.request_delete(id);

    let confirm = PageView::capture(&atlas).confirm.unwrap();
    assert_eq!(confirm.id, id);
    assert_eq!(confirm.prompt(), "Delete \"Union Station\"? This cannot be undone.");

    atlas.cancel_delete();
    assert!(PageView::capture(&atlas).confirm.is_none());
}

#[test]
fn closing_the_popup_clears_the_highlighted_entry() {
    let mut atlas = atlas();
    let id = add(&mut atlas, "Casa Loma");
    atlas.handle_event(MapEvent::MarkerClicked(id));
    assert!(PageView::capture(&atlas).entries[0].is_selected);

    atlas.handle_event(MapEvent::PopupClosed);

    let view = PageView::capture(&atlas);
    assert_eq!(view.selected, None);
    assert!(!view.entries[0].is_selected);
    assert!(!view.entries[0].class_name().contains("selected"));
}

// =============================================================
// labels
// =============================================================

#[test]
fn pending_label_shows_coordinates() {
    let view = PageView { pending: Some(LatLng::new(43.6532, -79.3832)), ..PageView::default() };
    assert_eq!(view.pending_label(), "Selected: 43.653200, -79.383200");
    assert!(PageView::default().pending_label().starts_with("No location selected"));
}

#[test]
fn list_heading_counts_hidden_entries() {
    let mut atlas = atlas();
    let first = add(&mut atlas, "A");
    add(&mut atlas, "B");
    assert_eq!(PageView::capture(&atlas).list_heading(), "Landmarks (2)");

    atlas.toggle_visibility(first);
    let view = PageView::capture(&atlas);
    assert_eq!(view.visible, 1);
    assert_eq!(view.list_heading(), "Landmarks (1 of 2 shown)");
}
