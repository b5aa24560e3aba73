use crate::logging::codes;

/// Export adapter and registry errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Adapter '{adapter}' failed to serialize its document: {source}")]
    Serialization {
        adapter: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Adapter '{adapter}' failed to write '{path}': {message}")]
    Write {
        adapter: &'static str,
        path: String,
        message: String,
    },

    #[error("Failed to create output directory '{path}': {message}")]
    OutputDirectory { path: String, message: String },

    #[error("Duplicate export adapter id: {id}")]
    DuplicateAdapter { id: &'static str },

    #[error("Adapter '{id}' writes '{file_name}', already claimed by adapter '{existing}'")]
    DuplicateFileName {
        id: &'static str,
        file_name: &'static str,
        existing: &'static str,
    },
}

impl ExportError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ExportError::Serialization { .. } => codes::export::SERIALIZATION_FAILED,
            ExportError::Write { .. } => codes::export::WRITE_FAILED,
            ExportError::OutputDirectory { .. } => codes::export::OUTPUT_DIR_FAILED,
            ExportError::DuplicateAdapter { .. } => codes::export::DUPLICATE_ADAPTER,
            ExportError::DuplicateFileName { .. } => codes::export::DUPLICATE_FILE_NAME,
        }
    }

    /// Adapter the failure belongs to, if any
    pub fn adapter(&self) -> Option<&'static str> {
        match self {
            ExportError::Serialization { adapter, .. } | ExportError::Write { adapter, .. } => {
                Some(*adapter)
            }
            ExportError::DuplicateAdapter { id } | ExportError::DuplicateFileName { id, .. } => {
                Some(*id)
            }
            ExportError::OutputDirectory { .. } => None,
        }
    }
}
