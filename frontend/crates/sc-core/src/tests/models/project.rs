use crate::{CoreError, Project};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn test_project_new_trims_fields() {
    let project = Project::new("  Villa  ", " Seaside build ", " data:image/jpeg;base64,AA== ").unwrap();

    assert_that!(project.name, eq("Villa"));
    assert_that!(project.description, eq("Seaside build"));
    assert_that!(project.image_url, eq("data:image/jpeg;base64,AA=="));
    assert!(project.id.is_none());
}

#[test]
fn test_project_new_without_image_is_rejected() {
    let err = Project::new("Villa", "Seaside build", "   ").unwrap_err();

    match err {
        CoreError::Validation { fields, .. } => assert_eq!(fields, vec!["imageUrl"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_project_serializes_camel_case_without_id() {
    let mut project = Project::new("A", "B", "data:x").unwrap();
    project.id = Some(7);

    let value = serde_json::to_value(&project).unwrap();

    assert_eq!(
        value,
        json!({"name": "A", "description": "B", "imageUrl": "data:x"})
    );
}

#[test]
fn test_project_deserializes_backend_shape_and_ignores_unknown_fields() {
    let project: Project = serde_json::from_value(json!({
        "id": 3,
        "name": "A",
        "description": "B",
        "imageUrl": "https://cdn.example.com/a.jpg",
        "createdAt": "2024-05-01T10:00:00"
    }))
    .unwrap();

    assert_eq!(project.id, Some(3));
    assert_that!(project.image_url, eq("https://cdn.example.com/a.jpg"));
}

#[test]
fn test_project_null_and_missing_text_read_as_empty() {
    let project: Project = serde_json::from_value(json!({
        "id": 2,
        "name": "C",
        "description": null
    }))
    .unwrap();

    assert_that!(project.name, eq("C"));
    assert_that!(project.description, eq(""));
    assert_that!(project.image_url, eq(""));
}
