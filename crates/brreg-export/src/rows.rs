//! Flattening a [`CompanyRecord`] into labelled spreadsheet rows.

use brreg_core::company::parse_date;
use brreg_core::{Address, CodeDescription, CompanyRecord};

/// One `(label, value)` row of the export table.
pub type ExportRow = (&'static str, String);

/// Labels in the order they appear in the sheet.
pub const LABELS: [&str; 34] = [
    "Organization Number",
    "Company Name",
    "Organization Form Code",
    "Organization Form Description",
    "Website",
    "Email",
    "Phone",
    "Business Address",
    "Postal Address",
    "Registration Date (Entity Register)",
    "Registration Date (Business Register)",
    "Foundation Date",
    "Registered in VAT Register",
    "VAT Registration Date",
    "Voluntary VAT Descriptions",
    "Industry Code",
    "Industry Description",
    "Number of Employees",
    "Has Registered Employees",
    "Employee Registration Date",
    "Institutional Sector Code",
    "Institutional Sector Description",
    "Registered in Business Register",
    "Registered in Foundation Register",
    "Registered in Voluntary Register",
    "Latest Annual Report",
    "Bankruptcy",
    "Under Liquidation",
    "Under Forced Liquidation",
    "Language Form",
    "Statute Date",
    "Statutory Purpose",
    "Activity",
    "Purpose",
];

/// Flattens `record` into the fixed-order export table, header excluded.
///
/// Absent values become empty strings, booleans `Yes`/`No`, lists are
/// comma-joined and ISO dates are rendered `dd.mm.yyyy`.
#[must_use]
pub fn company_rows(record: &CompanyRecord) -> Vec<ExportRow> {
    let values = [
        record.org_number.clone(),
        record.name.clone(),
        code(record.organization_form.as_ref()),
        description(record.organization_form.as_ref()),
        text(record.website.as_ref()),
        text(record.email.as_ref()),
        text(record.phone.as_ref()),
        full_address(record.business_address.as_ref()),
        full_address(record.postal_address.as_ref()),
        date(record.registered_at.as_deref()),
        date(record.business_register_date.as_deref()),
        date(record.foundation_date.as_deref()),
        yes_no(record.in_vat_register),
        date(record.vat_register_date.as_deref()),
        record.voluntary_vat_descriptions.join(", "),
        code(record.industry_code.as_ref()),
        description(record.industry_code.as_ref()),
        record.employees.map(|n| n.to_string()).unwrap_or_default(),
        yes_no(record.has_registered_employees),
        date(record.employees_registered_at.as_deref()),
        code(record.sector_code.as_ref()),
        description(record.sector_code.as_ref()),
        yes_no(record.in_business_register),
        yes_no(record.in_foundation_register),
        yes_no(record.in_voluntary_register),
        text(record.latest_annual_report.as_ref()),
        yes_no(record.bankrupt),
        yes_no(record.under_liquidation),
        yes_no(record.under_forced_liquidation),
        text(record.language_form.as_ref()),
        date(record.statute_date.as_deref()),
        record.statutory_purpose.join(", "),
        record.activity.join(", "),
        text(record.purpose.as_ref()),
    ];

    LABELS.into_iter().zip(values).collect()
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn code(value: Option<&CodeDescription>) -> String {
    value.and_then(|c| c.code.clone()).unwrap_or_default()
}

fn description(value: Option<&CodeDescription>) -> String {
    value.and_then(|c| c.description.clone()).unwrap_or_default()
}

fn yes_no(value: Option<bool>) -> String {
    match value {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => String::new(),
    }
}

fn date(value: Option<&str>) -> String {
    match value {
        None => String::new(),
        Some(raw) => parse_date(raw).map_or_else(
            || raw.to_string(),
            |d| d.format("%d.%m.%Y").to_string(),
        ),
    }
}

/// Street lines, postal code, city, municipality and country.
fn full_address(address: Option<&Address>) -> String {
    let Some(address) = address else {
        return String::new();
    };
    address
        .lines
        .iter()
        .map(String::as_str)
        .chain(
            [
                address.postal_code.as_deref(),
                address.city.as_deref(),
                address.municipality.as_deref(),
                address.country.as_deref(),
            ]
            .into_iter()
            .flatten(),
        )
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(rows: &'a [ExportRow], label: &str) -> &'a str {
        rows.iter()
            .find(|(l, _)| *l == label)
            .map_or_else(|| panic!("missing row {label}"), |(_, v)| v.as_str())
    }

    #[test]
    fn bare_record_has_only_identity_values() {
        let record = CompanyRecord {
            org_number: "123456789".to_string(),
            name: "TOM AS".to_string(),
            ..CompanyRecord::default()
        };
        let rows = company_rows(&record);

        assert_eq!(rows.len(), LABELS.len());
        assert_eq!(rows[0], ("Organization Number", "123456789".to_string()));
        assert_eq!(rows[1], ("Company Name", "TOM AS".to_string()));
        assert!(rows[2..].iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn formats_booleans_lists_and_dates() {
        let record: CompanyRecord = serde_json::from_value(serde_json::json!({
            "organisasjonsnummer": "923609016",
            "navn": "EQUINOR ASA",
            "organisasjonsform": { "kode": "ASA", "beskrivelse": "Allmennaksjeselskap" },
            "forretningsadresse": {
                "adresse": ["Forusbeen 50"],
                "postnummer": "4035",
                "poststed": "STAVANGER",
                "kommune": "STAVANGER",
                "land": "Norge"
            },
            "registreringsdatoEnhetsregisteret": "1995-03-12",
            "stiftelsesdato": "early nineties",
            "registrertIMvaregisteret": true,
            "konkurs": false,
            "antallAnsatte": 21000,
            "aktivitet": ["Utvinning av råolje", "Rørtransport"]
        }))
        .expect("fixture should decode");
        let rows = company_rows(&record);

        assert_eq!(value(&rows, "Organization Form Code"), "ASA");
        assert_eq!(
            value(&rows, "Business Address"),
            "Forusbeen 50, 4035, STAVANGER, STAVANGER, Norge"
        );
        assert_eq!(value(&rows, "Registration Date (Entity Register)"), "12.03.1995");
        assert_eq!(value(&rows, "Foundation Date"), "early nineties");
        assert_eq!(value(&rows, "Registered in VAT Register"), "Yes");
        assert_eq!(value(&rows, "Bankruptcy"), "No");
        assert_eq!(value(&rows, "Under Liquidation"), "");
        assert_eq!(value(&rows, "Number of Employees"), "21000");
        assert_eq!(value(&rows, "Activity"), "Utvinning av råolje, Rørtransport");
        assert_eq!(value(&rows, "Postal Address"), "");
    }
}
