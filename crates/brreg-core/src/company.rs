//! Company records as returned by the registry.
//!
//! Field names on the wire are Norwegian; the Rust names are English and
//! mapped with `serde(rename)`. Fields the control never reads are kept in
//! `extra` so the raw-record viewer can show the full payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A postal or business address block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Street lines in registry order.
    #[serde(rename = "adresse", default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    #[serde(rename = "postnummer", default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "poststed", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "kommune", default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    #[serde(rename = "land", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A `{ kode, beskrivelse }` pair (organisation form, industry code, sector).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeDescription {
    #[serde(rename = "kode", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "beskrivelse", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One registry entity.
///
/// Immutable once decoded: the editable projection is [`crate::FormState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Nine-digit organisation number; the unique key of a record.
    #[serde(rename = "organisasjonsnummer")]
    pub org_number: String,
    #[serde(rename = "navn")]
    pub name: String,
    #[serde(rename = "forretningsadresse", default, skip_serializing_if = "Option::is_none")]
    pub business_address: Option<Address>,
    #[serde(rename = "postadresse", default, skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<Address>,
    /// Raw `YYYY-MM-DD` string; see [`CompanyRecord::registration_date`].
    #[serde(
        rename = "registreringsdatoEnhetsregisteret",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registered_at: Option<String>,
    #[serde(rename = "formaal", default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(rename = "epostadresse", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefon", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "hjemmeside", default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    // Extended fields, only read by the exporter.
    #[serde(rename = "organisasjonsform", default, skip_serializing_if = "Option::is_none")]
    pub organization_form: Option<CodeDescription>,
    #[serde(
        rename = "registreringsdatoForetaksregisteret",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub business_register_date: Option<String>,
    #[serde(rename = "stiftelsesdato", default, skip_serializing_if = "Option::is_none")]
    pub foundation_date: Option<String>,
    #[serde(
        rename = "registrertIMvaregisteret",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub in_vat_register: Option<bool>,
    #[serde(
        rename = "registreringsdatoMerverdiavgiftsregisteret",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vat_register_date: Option<String>,
    #[serde(
        rename = "frivilligMvaRegistrertBeskrivelser",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub voluntary_vat_descriptions: Vec<String>,
    #[serde(rename = "naeringskode1", default, skip_serializing_if = "Option::is_none")]
    pub industry_code: Option<CodeDescription>,
    #[serde(rename = "antallAnsatte", default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<u32>,
    #[serde(
        rename = "harRegistrertAntallAnsatte",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub has_registered_employees: Option<bool>,
    #[serde(
        rename = "registreringsdatoAntallAnsatteEnhetsregisteret",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub employees_registered_at: Option<String>,
    #[serde(
        rename = "institusjonellSektorkode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sector_code: Option<CodeDescription>,
    #[serde(
        rename = "registrertIForetaksregisteret",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub in_business_register: Option<bool>,
    #[serde(
        rename = "registrertIStiftelsesregisteret",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub in_foundation_register: Option<bool>,
    #[serde(
        rename = "registrertIFrivillighetsregisteret",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub in_voluntary_register: Option<bool>,
    #[serde(
        rename = "sisteInnsendteAarsregnskap",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub latest_annual_report: Option<String>,
    #[serde(rename = "konkurs", default, skip_serializing_if = "Option::is_none")]
    pub bankrupt: Option<bool>,
    #[serde(rename = "underAvvikling", default, skip_serializing_if = "Option::is_none")]
    pub under_liquidation: Option<bool>,
    #[serde(
        rename = "underTvangsavviklingEllerTvangsopplosning",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub under_forced_liquidation: Option<bool>,
    #[serde(rename = "maalform", default, skip_serializing_if = "Option::is_none")]
    pub language_form: Option<String>,
    #[serde(rename = "vedtektsdato", default, skip_serializing_if = "Option::is_none")]
    pub statute_date: Option<String>,
    #[serde(
        rename = "vedtektsfestetFormaal",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub statutory_purpose: Vec<String>,
    #[serde(rename = "aktivitet", default, skip_serializing_if = "Vec::is_empty")]
    pub activity: Vec<String>,

    /// Everything else the registry sent (`_links`, municipality numbers, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CompanyRecord {
    /// Entity-register registration date, if present and well formed.
    #[must_use]
    pub fn registration_date(&self) -> Option<NaiveDate> {
        self.registered_at.as_deref().and_then(parse_date)
    }

    /// Label used when listing results: `"<name> (<org number>)"`.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.org_number)
    }

    /// Pretty-printed JSON of the record, as shown by the raw-record viewer.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Parses a `"YYYY-MM-DD"` date string into a [`NaiveDate`].
///
/// Returns `None` if the string does not match the expected format.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}
