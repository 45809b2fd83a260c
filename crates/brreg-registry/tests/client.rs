//! Integration tests for `RegistryClient` using wiremock HTTP mocks.

use brreg_core::SearchMode;
use brreg_registry::{RegistryClient, RegistryError, SearchErrorKind};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> RegistryClient {
    RegistryClient::with_base_url(30, "test-agent", base_url)
        .expect("client construction should not fail")
}

fn entity(org: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "organisasjonsnummer": org,
        "navn": name,
        "organisasjonsform": { "kode": "AS", "beskrivelse": "Aksjeselskap" },
        "forretningsadresse": {
            "adresse": ["Forusbeen 50"],
            "postnummer": "4035",
            "poststed": "STAVANGER",
            "kommune": "STAVANGER",
            "land": "Norge"
        },
        "registreringsdatoEnhetsregisteret": "1995-03-12",
        "konkurs": false
    })
}

#[tokio::test]
async fn org_number_search_returns_single_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/enheter/923609016"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entity("923609016", "EQUINOR ASA")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .search("923609016", SearchMode::OrgNumber, 10)
        .await
        .expect("should find company");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].org_number, "923609016");
    assert_eq!(records[0].name, "EQUINOR ASA");
    assert_eq!(records[0].bankrupt, Some(false));
}

#[tokio::test]
async fn name_search_preserves_server_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "_embedded": {
            "enheter": [
                entity("923609016", "EQUINOR ASA"),
                entity("990888213", "EQUINOR ENERGY AS"),
                entity("914778271", "EQUINOR NEW ENERGY AS")
            ]
        },
        "page": { "size": 10, "totalElements": 3, "totalPages": 1, "number": 0 }
    });

    Mock::given(method("GET"))
        .and(path("/enheter"))
        .and(query_param("navn", "equinor"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .search("  equinor ", SearchMode::Name, 10)
        .await
        .expect("should list companies");

    let orgs: Vec<&str> = records.iter().map(|r| r.org_number.as_str()).collect();
    assert_eq!(orgs, ["923609016", "990888213", "914778271"]);
}

#[tokio::test]
async fn industry_search_uses_industry_parameter() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "_embedded": { "enheter": [entity("923609016", "EQUINOR ASA")] }
    });

    Mock::given(method("GET"))
        .and(path("/enheter"))
        .and(query_param("naeringskode", "06.100"))
        .and(query_param("size", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .search("06.100", SearchMode::Industry, 25)
        .await
        .expect("should list companies");

    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn empty_list_is_not_found() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "page": { "size": 10, "totalElements": 0, "totalPages": 0, "number": 0 }
    });

    Mock::given(method("GET"))
        .and(path("/enheter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let failure = client
        .search("zzzz", SearchMode::Name, 10)
        .await
        .expect_err("empty list should fail");

    assert_eq!(failure.kind, SearchErrorKind::NotFound);
    assert_eq!(failure.message, "No companies found with that name");
}

#[tokio::test]
async fn missing_org_number_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/enheter/123456789"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let failure = client
        .search("123456789", SearchMode::OrgNumber, 10)
        .await
        .expect_err("404 should fail");

    assert_eq!(failure.kind, SearchErrorKind::NotFound);
    assert_eq!(failure.mode, SearchMode::OrgNumber);
    assert_eq!(
        failure.message,
        "No company found with that organization number"
    );
}

#[tokio::test]
async fn server_error_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let failure = client
        .search("equinor", SearchMode::Name, 10)
        .await
        .expect_err("503 should fail");

    assert_eq!(failure.kind, SearchErrorKind::Unavailable);
}

#[tokio::test]
async fn other_status_is_unknown_with_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(418))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let failure = client
        .search("equinor", SearchMode::Name, 10)
        .await
        .expect_err("418 should fail");

    assert_eq!(failure.kind, SearchErrorKind::Unknown);
    assert_eq!(failure.message, "Search failed with status 418");
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/enheter/923609016"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .get_company("923609016")
        .await
        .expect_err("HTML should not parse");

    assert!(matches!(err, RegistryError::Deserialize { .. }));
}

#[tokio::test]
async fn blank_query_never_hits_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let failure = client
        .search("   ", SearchMode::Name, 10)
        .await
        .expect_err("blank query should fail");

    assert_eq!(failure.kind, SearchErrorKind::InvalidInput);
}
