use crate::domain::PropertyTable;
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// A CSV written for one results request. Not catalogued anywhere;
/// the filename is the only handle.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub path: PathBuf,
    pub created_at: NaiveDateTime,
    pub row_count: usize,
}

impl ExportArtifact {
    pub fn download_url(&self) -> String {
        format!("/download/{}", self.filename)
    }
}

/// Second resolution: two exports in the same second share a name.
pub fn export_filename(now: NaiveDateTime) -> String {
    format!("property_results_{}.csv", now.format("%Y-%m-%d_%H-%M-%S"))
}

/// Writes header + rows to `dir/property_results_<timestamp>.csv`,
/// replacing any file already there under that name.
pub fn write_csv(
    dir: &Path,
    table: &PropertyTable,
    now: NaiveDateTime,
) -> Result<ExportArtifact, ServerError> {
    fs::create_dir_all(dir)?;

    let filename = export_filename(now);
    let path = dir.join(&filename);

    let mut writer = csv::Writer::from_path(&path)
        .map_err(|e| ServerError::Export(format!("Failed to create {}: {e}", path.display())))?;

    if !table.columns.is_empty() {
        writer
            .write_record(&table.columns)
            .map_err(|e| ServerError::Export(format!("Failed to write header: {e}")))?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        writer
            .write_record(row)
            .map_err(|e| ServerError::Export(format!("Failed to write row {i}: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| ServerError::Export(format!("Failed to flush {}: {e}", path.display())))?;

    log::info!("✅ Exported {} rows to {}", table.len(), path.display());

    Ok(ExportArtifact {
        filename,
        path,
        created_at: now,
        row_count: table.len(),
    })
}
