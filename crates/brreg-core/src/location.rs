use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Address guess produced by a reverse-geocoded map click.
///
/// Lives only until the map dialog closes, the user dismisses it, or it is
/// applied to the form.
#[derive(Debug, Clone, PartialEq)]
pub struct PinnedAddress {
    pub coordinates: Coordinates,
    /// Full label returned by the geocoding service.
    pub display_name: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

impl PinnedAddress {
    /// Payload handed to [`crate::FormState::apply_address_from_map`].
    #[must_use]
    pub fn to_address_data(&self) -> AddressData {
        AddressData {
            street: self.street.clone(),
            postal_code: self.postal_code.clone(),
            city: self.city.clone(),
            coordinates: self.coordinates,
        }
    }
}

/// Address fields chosen on the map, applied to the form as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressData {
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub coordinates: Coordinates,
}
