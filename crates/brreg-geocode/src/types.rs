//! Nominatim response shapes. Only the fields the control reads are modelled.

use serde::Deserialize;

/// One hit from `GET /search?format=json`. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// `GET /reverse?format=json&addressdetails=1` response.
///
/// When nothing is found the service answers 200 with `{"error": "..."}`,
/// which leaves `display_name` empty.
#[derive(Debug, Deserialize)]
pub struct ReverseResponse {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub address: ReverseAddress,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReverseAddress {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub suburb: Option<String>,
    pub neighbourhood: Option<String>,
    pub hamlet: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub municipality: Option<String>,
    pub village: Option<String>,
    pub postcode: Option<String>,
}

fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .map(str::trim)
        .find(|s| !s.is_empty())
}

impl ReverseAddress {
    #[must_use]
    pub fn street(&self) -> Option<String> {
        let road = first_present(&[&self.road])?;
        Some(match first_present(&[&self.house_number]) {
            Some(number) => format!("{road} {number}"),
            None => road.to_string(),
        })
    }

    #[must_use]
    pub fn locality(&self) -> Option<&str> {
        first_present(&[&self.suburb, &self.neighbourhood, &self.hamlet])
    }

    #[must_use]
    pub fn city(&self) -> Option<&str> {
        first_present(&[&self.city, &self.town, &self.municipality, &self.village])
    }

    #[must_use]
    pub fn postcode(&self) -> Option<&str> {
        first_present(&[&self.postcode])
    }
}
