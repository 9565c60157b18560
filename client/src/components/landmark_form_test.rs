use super::*;
use landmarks::ValidationError;

#[test]
fn every_validation_failure_focuses_a_rendered_field() {
    let errors = [
        ValidationError::MissingTitle,
        ValidationError::MissingDescription,
        ValidationError::MissingPosition,
        ValidationError::MissingImage,
    ];
    let ids: Vec<&str> = errors.into_iter().map(|e| field_dom_id(FormField::for_error(e))).collect();
    assert_eq!(ids, vec![TITLE_ID, DESCRIPTION_ID, LAT_ID, IMAGE_ID]);
}

#[test]
fn submit_label_reflects_phase() {
    assert_eq!(submit_label(false), "Add landmark");
    assert_eq!(submit_label(true), "Adding...");
}
