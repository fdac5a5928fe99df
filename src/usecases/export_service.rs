//! Export service. Turns the held leads into a CSV file.

use crate::adapters::export::{CsvQuoting, contacts_to_csv, export_file_name};
use crate::domain::{BusinessContact, DomainError};
use crate::ports::ExportPort;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ExportService {
    sink: Arc<dyn ExportPort>,
    quoting: CsvQuoting,
}

impl ExportService {
    pub fn new(sink: Arc<dyn ExportPort>, quoting: CsvQuoting) -> Self {
        Self { sink, quoting }
    }

    /// Write `leads` as `leads_<niche>_<location>.csv`.
    ///
    /// Returns `Ok(None)` without touching the sink when there is nothing to export.
    pub async fn export(
        &self,
        niche: &str,
        location: &str,
        leads: &[BusinessContact],
    ) -> Result<Option<PathBuf>, DomainError> {
        if leads.is_empty() {
            debug!("export skipped: no leads");
            return Ok(None);
        }

        let csv = contacts_to_csv(leads, self.quoting)
            .map_err(|e| DomainError::Export(format!("Failed to generate CSV: {}", e)))?;
        let file_name = export_file_name(niche, location);
        let path = self.sink.write_file(&file_name, &csv).await?;

        info!(path = %path.display(), rows = leads.len(), "leads exported");
        Ok(Some(path))
    }
}
