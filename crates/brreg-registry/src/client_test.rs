use super::*;

fn test_client(base_url: &str) -> RegistryClient {
    RegistryClient::with_base_url(30, "test-agent", base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_appends_entity_path() {
    let client = test_client("https://data.brreg.no/enhetsregisteret/api");
    let url = client.build_url(&["enheter", "923609016"], &[]);
    assert_eq!(
        url.as_str(),
        "https://data.brreg.no/enhetsregisteret/api/enheter/923609016"
    );
}

#[test]
fn build_url_tolerates_trailing_slash() {
    let client = test_client("https://data.brreg.no/enhetsregisteret/api/");
    let url = client.build_url(&["enheter"], &[("navn", "equinor"), ("size", "10")]);
    assert_eq!(
        url.as_str(),
        "https://data.brreg.no/enhetsregisteret/api/enheter?navn=equinor&size=10"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://data.brreg.no/enhetsregisteret/api");
    let url = client.build_url(&["enheter"], &[("navn", "Bø & Sønn")]);
    assert!(
        url.as_str().contains("B%C3%B8+%26+S%C3%B8nn"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = RegistryClient::with_base_url(30, "test-agent", "not a url").unwrap_err();
    assert!(matches!(err, RegistryError::InvalidBaseUrl(_)));
}
