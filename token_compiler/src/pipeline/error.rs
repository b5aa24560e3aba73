use crate::export::ExportError;
use crate::file_processor::FileProcessorError;
use crate::patterns::PatternError;

/// Errors that abort a whole run
///
/// Per-adapter failures are not here; they are collected in the run report.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Token source unavailable: {0}")]
    SourceUnavailable(#[from] FileProcessorError),

    #[error("Pattern library failed to compile: {0}")]
    Patterns(#[from] PatternError),

    #[error("Adapter registry rejected an adapter: {0}")]
    Registry(#[source] ExportError),

    #[error("Output directory unavailable: {0}")]
    OutputDirectory(#[source] ExportError),
}

impl PipelineError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            PipelineError::SourceUnavailable(e) => e.error_code(),
            PipelineError::Patterns(e) => e.error_code(),
            PipelineError::Registry(e) | PipelineError::OutputDirectory(e) => e.error_code(),
        }
    }
}
