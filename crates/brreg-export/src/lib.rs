//! Spreadsheet export of a single company record.
//!
//! [`company_rows`] is the pure flattening step; [`export_company`] writes the
//! rows as a one-sheet workbook and is the only side effect in this crate.

pub mod error;
pub mod rows;
pub mod workbook;

pub use error::ExportError;
pub use rows::{company_rows, ExportRow};
pub use workbook::{export_company, export_file_name};
