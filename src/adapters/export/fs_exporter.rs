//! Implements ExportPort by writing files into a directory.

use crate::domain::DomainError;
use crate::ports::ExportPort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// File-system exporter. One file per export, overwritten on repeat exports.
pub struct FsExporter {
    dir: PathBuf,
}

impl FsExporter {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ExportPort for FsExporter {
    /// Atomic save using write-replace:
    /// 1. Write to temp file
    /// 2. sync_all() to flush to disk
    /// 3. Rename over the target path
    async fn write_file(&self, file_name: &str, contents: &str) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DomainError::Export(format!("create export dir: {}", e)))?;

        let path = self.dir.join(file_name);
        let temp_path = path.with_extension("csv.tmp");

        if let Err(e) = write_and_replace(&temp_path, &path, contents).await {
            // Best effort; the original error is what gets reported
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        info!(path = %path.display(), bytes = contents.len(), "export written");
        Ok(path)
    }
}

async fn write_and_replace(temp_path: &Path, path: &Path, contents: &str) -> Result<(), DomainError> {
    let mut f = fs::File::create(temp_path)
        .await
        .map_err(|e| DomainError::Export(format!("create temp file: {}", e)))?;
    f.write_all(contents.as_bytes())
        .await
        .map_err(|e| DomainError::Export(format!("write temp file: {}", e)))?;
    f.sync_all()
        .await
        .map_err(|e| DomainError::Export(format!("sync temp file: {}", e)))?;
    drop(f);

    fs::rename(temp_path, path)
        .await
        .map_err(|e| DomainError::Export(format!("rename failed: {}", e)))
}
