//! The user-editable projection of a selected company.

use chrono::NaiveDate;

use crate::address::{extract_address_components, geocode_query};
use crate::company::CompanyRecord;
use crate::location::{AddressData, Coordinates};

/// Fields the user reviews and edits before accepting.
///
/// Seeded from a [`CompanyRecord`] but never aliased to it: edits stay here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub registration_date: Option<NaiveDate>,
    pub coordinates: Option<Coordinates>,
    pub email: String,
    pub phone: String,
    pub website: String,
}

/// Forward-geocode work requested by [`FormState::populate_from_company`].
///
/// The caller decides whether and when to run it; the form itself never
/// waits on the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeRequest {
    /// Assembled address text, country included.
    pub query: String,
}

impl FormState {
    /// Resets every field, coordinates and contact fields included.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Copies a record's fields into the form.
    ///
    /// Text fields are available as soon as this returns. Coordinates are
    /// reset; when `map_enabled` and the record has a business address, the
    /// returned request describes the geocode that may fill them later.
    #[must_use]
    pub fn populate_from_company(
        &mut self,
        record: &CompanyRecord,
        country: &str,
        map_enabled: bool,
    ) -> Option<GeocodeRequest> {
        let parts = extract_address_components(record.business_address.as_ref());

        self.name.clone_from(&record.name);
        self.address = parts.street;
        self.postal_code = parts.postal_code;
        self.city = parts.city;
        self.registration_date = record.registration_date();
        self.coordinates = None;
        self.email = record.email.clone().unwrap_or_default();
        self.phone = record.phone.clone().unwrap_or_default();
        self.website = record.website.clone().unwrap_or_default();

        if !map_enabled {
            return None;
        }
        let query = geocode_query(record.business_address.as_ref()?, country);
        (!query.is_empty()).then_some(GeocodeRequest { query })
    }

    /// Overwrites address, postal code, city and coordinates in one step.
    pub fn apply_address_from_map(&mut self, data: &AddressData) {
        self.address.clone_from(&data.street);
        self.postal_code.clone_from(&data.postal_code);
        self.city.clone_from(&data.city);
        self.coordinates = Some(data.coordinates);
    }

    /// Stores the outcome of a forward geocode.
    pub fn set_coordinates(&mut self, coordinates: Option<Coordinates>) {
        self.coordinates = coordinates;
    }
}
