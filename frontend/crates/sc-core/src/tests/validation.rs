use crate::CoreError;
use crate::validation::require;

#[test]
fn test_require_accepts_filled_fields() {
    assert!(require(&[("name", "A"), ("description", "B")]).is_ok());
}

#[test]
fn test_require_reports_every_blank_field_in_order() {
    let err = require(&[("name", "  "), ("description", "B"), ("imageUrl", "")]).unwrap_err();

    match err {
        CoreError::Validation { fields, .. } => assert_eq!(fields, vec!["name", "imageUrl"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_require_treats_tabs_and_newlines_as_blank() {
    assert!(require(&[("email", "\t\n")]).is_err());
}
