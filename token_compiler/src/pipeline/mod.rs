//! Pipeline driver: source → scan → build → export
//!
//! `Idle → Scanning → Exporting(adapter)* → Done`. Every registered adapter is
//! attempted exactly once; one adapter failing does not stop the others.

mod error;
pub mod output;
mod result;
mod state;

pub use error::PipelineError;
pub use output::OutputDirectory;
pub use result::{AdapterFailure, RunOutcome, RunReport, WrittenDocument};
pub use state::PipelineState;

use crate::builder::{self, BuildOutput, BuildWarning};
use crate::config::ExportPreferences;
use crate::export::{AdapterRegistry, ExportContext, ExportDocument};
use crate::file_processor;
use crate::logging::{self, codes};
use crate::patterns::PatternLibrary;
use crate::scanner::{self, ScanMetrics};
use crate::tokens::TokenModel;
use crate::{log_debug, log_error, log_info, log_success};
use chrono::{DateTime, Utc};
use std::path::Path;
use std::time::Instant;

/// Everything a run produces, without touching the filesystem
#[derive(Debug)]
pub struct RenderOutput {
    pub model: TokenModel,
    pub warnings: Vec<BuildWarning>,
    pub scan_metrics: ScanMetrics,
    /// Empty when the model is empty
    pub documents: Vec<ExportDocument>,
    pub failures: Vec<AdapterFailure>,
}

/// State history of one run
struct History(Vec<PipelineState>);

impl History {
    fn new() -> Self {
        Self(vec![PipelineState::Idle])
    }

    fn enter(&mut self, state: PipelineState) {
        log_debug!("Pipeline state transition", "state" => state);
        self.0.push(state);
    }
}

pub struct Pipeline {
    preferences: ExportPreferences,
    library: PatternLibrary,
    registry: AdapterRegistry,
    fixed_timestamp: Option<DateTime<Utc>>,
}

impl Pipeline {
    /// Standard rules and adapters
    pub fn new(preferences: ExportPreferences) -> Result<Self, PipelineError> {
        let registry = AdapterRegistry::standard(preferences.generate_readme)
            .map_err(PipelineError::Registry)?;
        Self::with_registry(preferences, registry)
    }

    pub fn with_registry(
        preferences: ExportPreferences,
        registry: AdapterRegistry,
    ) -> Result<Self, PipelineError> {
        let library = PatternLibrary::standard()?;

        log_debug!("Pipeline configured",
            "rules" => library.rule_count(),
            "adapters" => registry.len(),
            "output_dir" => preferences.output_dir.display()
        );

        Ok(Self {
            preferences,
            library,
            registry,
            fixed_timestamp: None,
        })
    }

    /// Use this instant for `generatedAt` instead of the wall clock
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.fixed_timestamp = Some(timestamp);
        self
    }

    pub fn context(&self) -> ExportContext {
        let generated_at = if self.preferences.embed_timestamp {
            Some(self.fixed_timestamp.unwrap_or_else(Utc::now))
        } else {
            None
        };

        ExportContext {
            document_name: self.preferences.document_name.clone(),
            schema_version: self.preferences.schema_version.clone(),
            generated_at,
            source: self.preferences.source_path.display().to_string(),
            manifest: self.registry.manifest(),
        }
    }

    fn extract(&self, source: &str) -> (ScanMetrics, BuildOutput) {
        let scan = scanner::scan(&self.library, source);
        let built = builder::build(&self.library, &scan.hits);
        (scan.metrics, built)
    }

    /// Scan, build and render every document in memory
    pub fn render(&self, source: &str) -> RenderOutput {
        let (scan_metrics, BuildOutput { model, warnings }) = self.extract(source);
        let mut documents = Vec::new();
        let mut failures = Vec::new();

        if !model.is_empty() {
            let ctx = self.context();
            for adapter in self.registry.adapters() {
                match adapter.export(&model, &ctx) {
                    Ok(doc) => documents.push(doc),
                    Err(error) => failures.push(AdapterFailure {
                        adapter_id: adapter.id(),
                        error,
                    }),
                }
            }
        }

        RenderOutput {
            model,
            warnings,
            scan_metrics,
            documents,
            failures,
        }
    }

    /// Full run against the configured source and output directory
    pub fn run(&self) -> Result<RunOutcome, PipelineError> {
        let source_path = self.preferences.source_path.clone();
        logging::with_file_context(source_path.clone(), || self.run_source(&source_path))
    }

    fn run_source(&self, source_path: &Path) -> Result<RunOutcome, PipelineError> {
        let start_time = Instant::now();
        let mut history = History::new();

        log_info!("Starting token export",
            "source" => source_path.display(),
            "output_dir" => self.preferences.output_dir.display()
        );

        history.enter(PipelineState::Scanning);
        let file = file_processor::process_file(source_path)?;
        let (scan_metrics, BuildOutput { model, warnings }) = self.extract(&file.source);

        if model.is_empty() {
            log_success!(
                codes::success::NOTHING_TO_EXPORT,
                "No tokens found, nothing to export",
                "source" => source_path.display(),
                "hits" => scan_metrics.total_hits()
            );
            history.enter(PipelineState::Done);
            return Ok(RunOutcome::NothingToExport {
                warnings,
                history: history.0,
            });
        }

        let output = OutputDirectory::create(&self.preferences.output_dir).map_err(|e| {
            log_error!(e.error_code(), &e.to_string(),
                "path" => self.preferences.output_dir.display()
            );
            PipelineError::OutputDirectory(e)
        })?;

        let ctx = self.context();
        let mut written = Vec::new();
        let mut failed = Vec::new();

        for adapter in self.registry.adapters() {
            history.enter(PipelineState::Exporting(adapter.id()));

            let result = adapter.export(&model, &ctx).and_then(|doc| {
                let path = output.write(&doc)?;
                Ok(WrittenDocument {
                    adapter_id: doc.adapter_id,
                    path,
                    bytes: doc.contents.len(),
                })
            });

            match result {
                Ok(doc) => {
                    log_success!(codes::success::DOCUMENT_WRITTEN, "Document written",
                        "adapter" => doc.adapter_id,
                        "file" => doc.path.display(),
                        "bytes" => doc.bytes
                    );
                    written.push(doc);
                }
                Err(error) => {
                    log_error!(error.error_code(), &error.to_string(),
                        "adapter" => adapter.id()
                    );
                    failed.push(AdapterFailure {
                        adapter_id: adapter.id(),
                        error,
                    });
                }
            }
        }

        history.enter(PipelineState::Done);

        let report = RunReport {
            output_dir: output.root().to_path_buf(),
            written,
            failed,
            warnings,
            token_counts: model.counts(),
            scan_metrics,
            history: history.0,
            duration: start_time.elapsed(),
        };

        log_success!(codes::success::EXPORT_COMPLETE, "Token export complete",
            "tokens" => report.total_tokens(),
            "written" => report.written.len(),
            "failed" => report.failed.len(),
            "warnings" => report.warnings.len(),
            "duration_ms" => format!("{:.2}", report.duration.as_secs_f64() * 1000.0)
        );

        Ok(RunOutcome::Completed(report))
    }
}
