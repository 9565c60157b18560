use super::*;
use landmarks::LatLng;

#[test]
fn missing_element_uses_defaults() {
    assert_eq!(config_from_script(None), AtlasConfig::default());
}

#[test]
fn partial_document_overrides_named_fields() {
    let config = config_from_script(Some(r#"{"default_zoom": 11, "default_center": {"lat": 45.5, "lng": -73.56}}"#));
    assert_eq!(config.default_zoom, 11);
    assert_eq!(config.default_center, LatLng::new(45.5, -73.56));
    assert_eq!(config.locate_zoom, AtlasConfig::default().locate_zoom);
}

#[test]
fn malformed_document_falls_back_to_defaults() {
    assert_eq!(config_from_script(Some("{not json")), AtlasConfig::default());
    assert_eq!(config_from_script(Some(r#"{"default_zoom": "close"}"#)), AtlasConfig::default());
}

#[test]
fn blank_document_uses_defaults() {
    assert_eq!(config_from_script(Some("  \n ")), AtlasConfig::default());
}
