use crate::Client;

use serde_json::json;

#[test]
fn test_client_new_requires_designation() {
    assert!(Client::new("Ada", "Great work", " ", "data:x").is_err());
}

#[test]
fn test_client_serializes_all_fields() {
    let client = Client::new("Ada", "Great work", "CEO, Acme", "data:x").unwrap();

    assert_eq!(
        serde_json::to_value(&client).unwrap(),
        json!({
            "name": "Ada",
            "description": "Great work",
            "designation": "CEO, Acme",
            "imageUrl": "data:x"
        })
    );
}
