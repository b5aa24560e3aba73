use crate::export::{ExportDocument, ExportError};
use std::fs;
use std::path::{Path, PathBuf};

/// Output directory for one run
///
/// Created on construction, idempotently. Every write replaces the whole file.
#[derive(Debug)]
pub struct OutputDirectory {
    root: PathBuf,
}

impl OutputDirectory {
    pub fn create(root: &Path) -> Result<Self, ExportError> {
        fs::create_dir_all(root).map_err(|e| ExportError::OutputDirectory {
            path: root.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn write(&self, document: &ExportDocument) -> Result<PathBuf, ExportError> {
        let path = self.root.join(document.file_name);
        fs::write(&path, document.contents.as_bytes()).map_err(|e| ExportError::Write {
            adapter: document.adapter_id,
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(path)
    }
}
