//! Writes the export table to an `.xlsx` file.

use std::path::{Path, PathBuf};

use brreg_core::CompanyRecord;
use rust_xlsxwriter::{Table, TableColumn, Workbook};

use crate::error::ExportError;
use crate::rows::company_rows;

const SHEET_NAME: &str = "Company Data";
const TABLE_NAME: &str = "CompanyData";
const COLUMN_WIDTH: f64 = 58.0;

/// `<name with every non-ASCII-alphanumeric replaced by _>_data.xlsx`.
///
/// Falls back to `company_data.xlsx` when the name is empty.
#[must_use]
pub fn export_file_name(company_name: &str) -> String {
    if company_name.is_empty() {
        return "company_data.xlsx".to_string();
    }
    let stem: String = company_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{stem}_data.xlsx")
}

/// Writes `record` to `<dir>/<export_file_name>` and returns the path.
///
/// An existing file with the same name is overwritten.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if `dir` cannot be created, or
/// [`ExportError::Xlsx`] if the workbook cannot be built or saved.
pub fn export_company(record: &CompanyRecord, dir: &Path) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(&record.name));
    let rows = company_rows(record);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.set_column_width(0, COLUMN_WIDTH)?;
    worksheet.set_column_width(1, COLUMN_WIDTH)?;

    for (row, (label, value)) in (1_u32..).zip(&rows) {
        worksheet.write_string(row, 0, *label)?;
        worksheet.write_string(row, 1, value)?;
    }

    // The table writes its own header row at row 0.
    let columns = [
        TableColumn::new().set_header("Column"),
        TableColumn::new().set_header("Value"),
    ];
    let table = Table::new()
        .set_name(TABLE_NAME)
        .set_banded_rows(true)
        .set_columns(&columns);
    let last_row = u32::try_from(rows.len()).unwrap_or(u32::MAX);
    worksheet.add_table(0, 0, last_row, 1, &table)?;

    workbook.save(&path)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "exported company");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_replaces_non_alphanumerics() {
        assert_eq!(export_file_name("EQUINOR ASA"), "EQUINOR_ASA_data.xlsx");
        assert_eq!(export_file_name("Bø & Sønn AS"), "B____S_nn_AS_data.xlsx");
    }

    #[test]
    fn file_name_falls_back_for_empty_name() {
        assert_eq!(export_file_name(""), "company_data.xlsx");
    }
}
