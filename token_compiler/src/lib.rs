// Macros must be in scope for every module below
#[macro_use]
pub mod logging;

pub mod builder;
pub mod config;
pub mod export;
pub mod file_processor;
pub mod patterns;
pub mod pipeline;
pub mod scanner;
pub mod tokens;

// Re-export key types for library consumers
pub use config::{ExportPreferences, LoggingPreferences, RuntimeConfig};
pub use export::{AdapterRegistry, ExportAdapter, ExportContext, ExportDocument, ExportError};
pub use pipeline::{Pipeline, PipelineError, PipelineState, RunOutcome, RunReport};
pub use tokens::{Category, TokenModel, TokenValue};
