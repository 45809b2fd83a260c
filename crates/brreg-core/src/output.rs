use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::form::FormState;

/// The payload handed to the host when the user accepts.
///
/// A snapshot of the form at acceptance time, serialised with the host's
/// property names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "organisasjonsnummer")]
    pub org_number: String,
    #[serde(rename = "navn")]
    pub name: String,
    #[serde(rename = "adress")]
    pub address: String,
    #[serde(rename = "postnummer")]
    pub postal_code: String,
    #[serde(rename = "poststed")]
    pub city: String,
    #[serde(rename = "registrationDate")]
    pub registration_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl OutputRecord {
    /// Snapshots `form` for the company identified by `org_number`.
    ///
    /// Text fields are trimmed; blank contact fields are omitted. Coordinates
    /// are only included when the map feature is on.
    #[must_use]
    pub fn from_form(org_number: &str, form: &FormState, include_coordinates: bool) -> Self {
        let coordinates = form.coordinates.filter(|_| include_coordinates);
        Self {
            org_number: org_number.to_string(),
            name: form.name.trim().to_string(),
            address: form.address.trim().to_string(),
            postal_code: form.postal_code.trim().to_string(),
            city: form.city.trim().to_string(),
            registration_date: form.registration_date,
            lat: coordinates.map(|c| c.lat),
            lng: coordinates.map(|c| c.lng),
            email: non_blank(&form.email),
            phone: non_blank(&form.phone),
            website: non_blank(&form.website),
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
