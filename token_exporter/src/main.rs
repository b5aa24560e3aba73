//! # Design token exporter
//!
//! Reads the token source, builds the token model and writes every export
//! document into the output directory.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use token_compiler::config::runtime::parse_log_level;
use token_compiler::logging::ProcessingSummary;
use token_compiler::{log_error, logging, Pipeline, RunOutcome, RuntimeConfig};

#[derive(Debug, Parser)]
#[command(name = "export-tokens", version, about = "Export design tokens to JSON, CSS and design-tool formats")]
struct Cli {
    /// Token source file
    #[arg(long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// Directory the documents are written into
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Document name carried by the design-tool envelopes
    #[arg(long)]
    name: Option<String>,

    /// Schema version carried by the design-tool envelopes
    #[arg(long)]
    schema_version: Option<String>,

    /// Embed a generatedAt timestamp
    #[arg(long)]
    timestamp: bool,

    /// Skip the README manifest
    #[arg(long)]
    no_readme: bool,

    /// Minimum log level (error, warning, info, debug)
    #[arg(long, value_name = "LEVEL", value_parser = parse_level_arg)]
    log_level: Option<token_compiler::config::runtime::LogLevel>,

    /// Emit JSON-lines log events
    #[arg(long)]
    structured_logs: bool,
}

fn parse_level_arg(value: &str) -> Result<token_compiler::config::runtime::LogLevel, String> {
    parse_log_level(value).ok_or_else(|| format!("unknown log level '{}'", value))
}

impl Cli {
    /// Configuration file (or defaults) with flags layered on top
    fn resolve_config(&self) -> Result<RuntimeConfig, token_compiler::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => RuntimeConfig::from_file(path)?,
            None => RuntimeConfig::default(),
        };

        if let Some(source) = &self.source {
            config.export.source_path = source.clone();
        }
        if let Some(out_dir) = &self.out_dir {
            config.export.output_dir = out_dir.clone();
        }
        if let Some(name) = &self.name {
            config.export.document_name = name.clone();
        }
        if let Some(version) = &self.schema_version {
            config.export.schema_version = version.clone();
        }
        if self.timestamp {
            config.export.embed_timestamp = true;
        }
        if self.no_readme {
            config.export.generate_readme = false;
        }
        if let Some(level) = self.log_level {
            config.logging.min_log_level = level;
        }
        if self.structured_logs {
            config.logging.use_structured_logging = true;
        }

        config.export.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::config::init_runtime_preferences(config.logging.clone()) {
        eprintln!("Warning: {}", e);
    }
    if let Err(e) = logging::init_global_logging() {
        eprintln!("Error: failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let pipeline = match Pipeline::new(config.export) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            log_error!(e.error_code(), &e.to_string());
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match pipeline.run() {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            logging::print_cargo_style_summary();
            return ExitCode::FAILURE;
        }
    };

    println!("{}", outcome.summary());
    logging::print_cargo_style_summary();
    if let Some(status) = status_line(&outcome, &logging::get_processing_summary()) {
        eprintln!("{}", status);
    }

    exit_code(&outcome)
}

/// One-line tally of logged problems, or `None` for a clean run
fn status_line(outcome: &RunOutcome, summary: &ProcessingSummary) -> Option<String> {
    if !summary.has_errors() && !summary.has_warnings() && outcome.warnings().is_empty() {
        return None;
    }

    let mut line = format!(
        "export-tokens: {} error(s), {} warning(s) logged, {} value(s) skipped",
        summary.total_errors,
        summary.total_warnings,
        outcome.warnings().len()
    );
    if let RunOutcome::Completed(report) = outcome {
        let failed = report.failed_adapters();
        if !failed.is_empty() {
            line.push_str(&format!("; failed adapters: {}", failed.join(", ")));
        }
    }
    Some(line)
}

fn exit_code(outcome: &RunOutcome) -> ExitCode {
    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use token_compiler::config::runtime::LogLevel;
    use token_compiler::PipelineState;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("export-tokens").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&[
            "--source",
            "tokens.dart",
            "--out-dir",
            "build",
            "--name",
            "Acme",
            "--schema-version",
            "3.1.0",
            "--timestamp",
            "--no-readme",
            "--log-level",
            "debug",
            "--structured-logs",
        ]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.export.source_path, PathBuf::from("tokens.dart"));
        assert_eq!(config.export.output_dir, PathBuf::from("build"));
        assert_eq!(config.export.document_name, "Acme");
        assert_eq!(config.export.schema_version, "3.1.0");
        assert!(config.export.embed_timestamp);
        assert!(!config.export.generate_readme);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        assert!(config.logging.use_structured_logging);
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.toml");
        fs::write(
            &path,
            "[export]\noutput_dir = \"from-file\"\ndocument_name = \"File Name\"\n",
        )
        .unwrap();

        let cli = parse(&["--config", path.to_str().unwrap(), "--name", "Flag Name"]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.export.output_dir, PathBuf::from("from-file"));
        assert_eq!(config.export.document_name, "Flag Name");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Cli::try_parse_from(["export-tokens", "--log-level", "loud"]).is_err());
        assert!(parse(&["--name", "  "]).resolve_config().is_err());
        assert!(parse(&["--config", "/nonexistent/tokens.toml"]).resolve_config().is_err());
    }

    #[test]
    fn test_status_line_quiet_when_clean() {
        let outcome = RunOutcome::NothingToExport {
            warnings: Vec::new(),
            history: vec![PipelineState::Idle, PipelineState::Scanning, PipelineState::Done],
        };
        assert_eq!(status_line(&outcome, &ProcessingSummary::default()), None);
    }

    #[test]
    fn test_status_line_reports_logged_counts() {
        let outcome = RunOutcome::NothingToExport {
            warnings: Vec::new(),
            history: vec![PipelineState::Idle, PipelineState::Scanning, PipelineState::Done],
        };
        let summary = ProcessingSummary {
            total_errors: 1,
            total_warnings: 2,
            ..ProcessingSummary::default()
        };

        assert_eq!(
            status_line(&outcome, &summary).as_deref(),
            Some("export-tokens: 1 error(s), 2 warning(s) logged, 0 value(s) skipped")
        );
    }
}
