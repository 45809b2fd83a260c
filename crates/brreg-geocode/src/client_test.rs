use super::*;

use crate::types::ReverseAddress;

const SPOT: Coordinates = Coordinates::new(59.9139, 10.7522);

fn response(display_name: &str, address: ReverseAddress) -> ReverseResponse {
    ReverseResponse {
        display_name: Some(display_name.to_string()),
        address,
    }
}

#[test]
fn build_url_targets_endpoint_with_encoded_query() {
    let client = GeocodeClient::with_base_url(30, "test-agent", "https://geo.example.com")
        .expect("client construction should not fail");
    let url = client.build_url("search", &[("format", "json"), ("q", "Storgata 1, Oslo")]);
    assert_eq!(
        url.as_str(),
        "https://geo.example.com/search?format=json&q=Storgata+1%2C+Oslo"
    );
}

#[test]
fn street_uses_road_and_house_number() {
    let pinned = pinned_from_reverse(
        SPOT,
        &response(
            "1, Karl Johans gate, Sentrum, Oslo, 0154, Norge",
            ReverseAddress {
                road: Some("Karl Johans gate".to_string()),
                house_number: Some("1".to_string()),
                suburb: Some("Sentrum".to_string()),
                city: Some("Oslo".to_string()),
                postcode: Some("0154".to_string()),
                ..ReverseAddress::default()
            },
        ),
    )
    .expect("should pin");

    assert_eq!(pinned.street, "Karl Johans gate 1");
    assert_eq!(pinned.postal_code, "0154");
    assert_eq!(pinned.city, "Oslo");
    assert_eq!(pinned.coordinates, SPOT);
}

#[test]
fn street_falls_back_to_suburb_then_city() {
    let suburb = pinned_from_reverse(
        SPOT,
        &response(
            "Grünerløkka, Oslo, Norge",
            ReverseAddress {
                neighbourhood: Some("Grünerløkka".to_string()),
                town: Some("Oslo".to_string()),
                ..ReverseAddress::default()
            },
        ),
    )
    .expect("should pin");
    assert_eq!(suburb.street, "Grünerløkka");
    assert_eq!(suburb.city, "Oslo");

    let city = pinned_from_reverse(
        SPOT,
        &response(
            "Lillehammer, Innlandet, Norge",
            ReverseAddress {
                village: Some("Lillehammer".to_string()),
                ..ReverseAddress::default()
            },
        ),
    )
    .expect("should pin");
    assert_eq!(city.street, "Lillehammer");
}

#[test]
fn street_falls_back_to_display_name_parts() {
    let pinned = pinned_from_reverse(
        SPOT,
        &response(
            "Hardangervidda, Vinje, Telemark, Norge",
            ReverseAddress::default(),
        ),
    )
    .expect("should pin");
    assert_eq!(pinned.street, "Hardangervidda, Vinje, Telemark");
    assert_eq!(pinned.city, "");
    assert_eq!(pinned.postal_code, "");
}

#[test]
fn missing_display_name_pins_nothing() {
    let empty = ReverseResponse {
        display_name: None,
        address: ReverseAddress::default(),
    };
    assert!(pinned_from_reverse(SPOT, &empty).is_none());
}

#[test]
fn non_numeric_coordinate_is_rejected() {
    assert!(matches!(
        parse_coordinate("north"),
        Err(GeocodeError::InvalidCoordinate(_))
    ));
    assert!((parse_coordinate(" 59.91 ").expect("numeric") - 59.91).abs() < f64::EPSILON);
}
