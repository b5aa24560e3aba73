use super::state::PipelineState;
use crate::builder::BuildWarning;
use crate::export::ExportError;
use crate::scanner::ScanMetrics;
use crate::tokens::Category;
use std::fmt::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct WrittenDocument {
    pub adapter_id: &'static str,
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug)]
pub struct AdapterFailure {
    pub adapter_id: &'static str,
    pub error: ExportError,
}

/// Outcome of a run that got past reading the source
#[derive(Debug)]
pub enum RunOutcome {
    /// The source produced no tokens; no adapter ran and nothing was written
    NothingToExport {
        warnings: Vec<BuildWarning>,
        history: Vec<PipelineState>,
    },
    Completed(RunReport),
}

impl RunOutcome {
    /// True unless an adapter failed
    pub fn is_success(&self) -> bool {
        match self {
            RunOutcome::NothingToExport { .. } => true,
            RunOutcome::Completed(report) => report.is_success(),
        }
    }

    pub fn history(&self) -> &[PipelineState] {
        match self {
            RunOutcome::NothingToExport { history, .. } => history,
            RunOutcome::Completed(report) => &report.history,
        }
    }

    pub fn warnings(&self) -> &[BuildWarning] {
        match self {
            RunOutcome::NothingToExport { warnings, .. } => warnings,
            RunOutcome::Completed(report) => &report.warnings,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            RunOutcome::NothingToExport { .. } => {
                "No tokens found in source, nothing to export".to_string()
            }
            RunOutcome::Completed(report) => report.summary(),
        }
    }
}

/// Per-run report: documents written, adapters failed, recovered warnings
#[derive(Debug)]
pub struct RunReport {
    pub output_dir: PathBuf,
    pub written: Vec<WrittenDocument>,
    pub failed: Vec<AdapterFailure>,
    pub warnings: Vec<BuildWarning>,
    pub token_counts: Vec<(Category, usize)>,
    pub scan_metrics: ScanMetrics,
    pub history: Vec<PipelineState>,
    pub duration: Duration,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total_tokens(&self) -> usize {
        self.token_counts.iter().map(|(_, n)| n).sum()
    }

    pub fn failed_adapters(&self) -> Vec<&'static str> {
        self.failed.iter().map(|f| f.adapter_id).collect()
    }

    /// Human-readable completion summary
    pub fn summary(&self) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "Exported {} tokens to {} ({} written, {} failed)",
            self.total_tokens(),
            self.output_dir.display(),
            self.written.len(),
            self.failed.len()
        );

        let counts: Vec<String> = self
            .token_counts
            .iter()
            .map(|(category, n)| format!("{}: {}", category, n))
            .collect();
        let _ = writeln!(out, "  tokens    {}", counts.join(", "));

        for doc in &self.written {
            let _ = writeln!(out, "  written   {} ({})", doc.path.display(), doc.adapter_id);
        }
        for failure in &self.failed {
            let _ = writeln!(out, "  failed    {}: {}", failure.adapter_id, failure.error);
        }
        if !self.warnings.is_empty() {
            let _ = writeln!(out, "  warnings  {} malformed value(s) skipped", self.warnings.len());
        }

        let _ = write!(out, "  finished in {:.2}ms", self.duration.as_secs_f64() * 1000.0);
        out
    }
}
