//! Flattening registry address blocks into editable strings.

use crate::company::Address;

/// Flat, independently editable address fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    /// Street lines joined with `", "`.
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

/// Projects an optional address block into flat strings.
///
/// Every field defaults to an empty string when the source is absent.
#[must_use]
pub fn extract_address_components(address: Option<&Address>) -> AddressParts {
    let Some(address) = address else {
        return AddressParts::default();
    };

    AddressParts {
        street: address.lines.join(", "),
        postal_code: address.postal_code.clone().unwrap_or_default(),
        city: address.city.clone().unwrap_or_default(),
    }
}

/// Human-readable one-line address: street lines, then `"<postal> <city>"`.
#[must_use]
pub fn format_address(address: Option<&Address>) -> String {
    let Some(address) = address else {
        return String::new();
    };

    let mut parts: Vec<String> = address
        .lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .cloned()
        .collect();

    let city_part = [address.postal_code.as_deref(), address.city.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !city_part.is_empty() {
        parts.push(city_part);
    }

    parts.join(", ")
}

/// Free-text query for forward geocoding: street lines, postal code, city and
/// country, skipping empty parts.
#[must_use]
pub fn geocode_query(address: &Address, country: &str) -> String {
    address
        .lines
        .iter()
        .map(String::as_str)
        .chain(address.postal_code.as_deref())
        .chain(address.city.as_deref())
        .chain(std::iter::once(country))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
