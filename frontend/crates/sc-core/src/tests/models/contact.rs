use crate::{CONSULTATION_REQUEST_CITY, Contact, NewsletterSubscription};

use serde_json::json;

#[test]
fn test_consultation_request_uses_fixed_city() {
    let contact = Contact::consultation_request("Ada Lovelace", "ada@example.com", "555-0100").unwrap();

    assert_eq!(contact.city, CONSULTATION_REQUEST_CITY);
    assert_eq!(
        serde_json::to_value(&contact).unwrap(),
        json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "mobileNumber": "555-0100",
            "city": "Consultation Request"
        })
    );
}

#[test]
fn test_contact_new_rejects_blank_city() {
    assert!(Contact::new("Ada", "ada@example.com", "555-0100", "").is_err());
}

#[test]
fn test_newsletter_subscription_body_is_email_only() {
    let subscription = NewsletterSubscription::new(" ada@example.com ").unwrap();

    assert_eq!(
        serde_json::to_value(&subscription).unwrap(),
        json!({"email": "ada@example.com"})
    );
}

#[test]
fn test_newsletter_subscription_rejects_blank_email() {
    assert!(NewsletterSubscription::new("   ").is_err());
}

#[test]
fn test_contact_null_city_reads_as_empty() {
    let contact: Contact = serde_json::from_value(json!({
        "id": 5,
        "fullName": "Jo",
        "email": "jo@example.com",
        "mobileNumber": null,
        "city": null
    }))
    .unwrap();

    assert_eq!(contact.full_name, "Jo");
    assert_eq!(contact.mobile_number, "");
    assert_eq!(contact.city, "");
}
