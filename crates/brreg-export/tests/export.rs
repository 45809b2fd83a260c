//! File-writing tests for the spreadsheet exporter.

use brreg_core::CompanyRecord;
use brreg_export::{export_company, ExportError};

fn record(name: &str) -> CompanyRecord {
    CompanyRecord {
        org_number: "923609016".to_string(),
        name: name.to_string(),
        registered_at: Some("1995-03-12".to_string()),
        bankrupt: Some(false),
        ..CompanyRecord::default()
    }
}

#[test]
fn writes_named_xlsx_into_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = export_company(&record("EQUINOR ASA"), dir.path()).expect("export should succeed");

    assert_eq!(path, dir.path().join("EQUINOR_ASA_data.xlsx"));
    let bytes = std::fs::read(&path).expect("file should exist");
    // xlsx is a zip container.
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn creates_missing_export_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("exports").join("today");
    let path = export_company(&record("ACME"), &nested).expect("export should succeed");
    assert!(path.starts_with(&nested));
    assert!(path.exists());
}

#[test]
fn reexport_overwrites_previous_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = export_company(&record("ACME"), dir.path()).expect("first export");
    let second = export_company(&record("ACME"), dir.path()).expect("second export");
    assert_eq!(first, second);
}

#[test]
fn unwritable_target_propagates_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").expect("write blocker file");

    let err = export_company(&record("ACME"), &blocker).expect_err("file is not a directory");
    assert!(matches!(err, ExportError::Io(_)));
}
