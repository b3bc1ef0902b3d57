use crate::DataUrl;

#[test]
fn test_display_produces_base64_data_url() {
    let url = DataUrl::new("image/png", b"hello".to_vec());

    assert_eq!(url.to_string(), "data:image/png;base64,aGVsbG8=");
}

#[test]
fn test_parse_reads_media_type_and_payload() {
    let url = DataUrl::parse("data:image/jpeg;base64,aGVsbG8=").unwrap();

    assert_eq!(url.media_type, "image/jpeg");
    assert_eq!(url.data, b"hello");
    assert!(url.is_image());
}

#[test]
fn test_parse_rejects_remote_url() {
    assert!(DataUrl::parse("https://example.com/a.jpg").is_err());
}

#[test]
fn test_parse_rejects_percent_encoded_payload() {
    assert!(DataUrl::parse("data:text/plain,hello").is_err());
}

#[test]
fn test_parse_rejects_invalid_base64() {
    assert!(DataUrl::parse("data:image/png;base64,@@@").is_err());
}

#[test]
fn test_text_media_type_is_not_image() {
    assert!(!DataUrl::new("text/plain", Vec::new()).is_image());
}
