pub mod csv_export;

pub use csv_export::{write_csv, ExportArtifact};

use crate::domain::PropertyTable;
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use std::path::Path;

/// What a results page is built from: the display-safe table and the CSV holding it.
#[derive(Debug)]
pub struct ExportedResults {
    pub table: PropertyTable,
    pub artifact: ExportArtifact,
}

/// Trims the backend's trailing column, then writes the trimmed table to `dir`.
pub fn export_results(
    table: PropertyTable,
    dir: &Path,
    now: NaiveDateTime,
) -> Result<ExportedResults, ServerError> {
    let table = table.without_last_column();
    let artifact = write_csv(dir, &table, now)?;

    Ok(ExportedResults { table, artifact })
}
