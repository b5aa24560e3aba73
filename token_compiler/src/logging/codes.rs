//! Consolidated log codes and classification system
//!
//! Single source of truth for every code the pipeline emits and the metadata
//! that drives severity, halting and the recommended action shown to users.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for error, warning and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Source reading error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
}

/// Pattern library error codes
pub mod patterns {
    use super::Code;

    pub const PATTERN_COMPILE_FAILED: Code = Code::new("E020");
    pub const DUPLICATE_RULE_ID: Code = Code::new("E021");
}

/// Scanner warning codes
pub mod scanning {
    use super::Code;

    pub const HIT_LIMIT_REACHED: Code = Code::new("W101");
    pub const NAME_TOO_LONG: Code = Code::new("W102");
}

/// Model builder warning codes
pub mod building {
    use super::Code;

    pub const MALFORMED_NUMBER: Code = Code::new("W201");
    pub const MALFORMED_COLOR: Code = Code::new("W202");
    pub const MALFORMED_DURATION: Code = Code::new("W203");
    pub const MALFORMED_OFFSET: Code = Code::new("W204");
}

/// Export adapter error codes
pub mod export {
    use super::Code;

    pub const SERIALIZATION_FAILED: Code = Code::new("E300");
    pub const WRITE_FAILED: Code = Code::new("E301");
    pub const OUTPUT_DIR_FAILED: Code = Code::new("E302");
    pub const DUPLICATE_ADAPTER: Code = Code::new("E303");
    pub const DUPLICATE_FILE_NAME: Code = Code::new("E304");
}

/// Configuration error codes
pub mod config {
    use super::Code;

    pub const CONFIG_READ_FAILED: Code = Code::new("E400");
    pub const CONFIG_PARSE_FAILED: Code = Code::new("E401");
    pub const CONFIG_INVALID_VALUE: Code = Code::new("E402");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const SOURCE_READ_SUCCESS: Code = Code::new("I006");
    pub const SCAN_COMPLETE: Code = Code::new("I020");
    pub const MODEL_BUILD_COMPLETE: Code = Code::new("I030");
    pub const DOCUMENT_WRITTEN: Code = Code::new("I040");
    pub const EXPORT_COMPLETE: Code = Code::new("I041");
    pub const NOTHING_TO_EXPORT: Code = Code::new("I042");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

const REGISTRY_ENTRIES: &[ErrorMetadata] = &[
    // System
    ErrorMetadata::new(
        "ERR001",
        "System",
        Severity::Critical,
        false,
        true,
        "Critical internal error",
        "File a bug report with the run log attached",
    ),
    ErrorMetadata::new(
        "ERR002",
        "System",
        Severity::Critical,
        false,
        true,
        "Pipeline initialization failed",
        "Check the pattern library and adapter registration",
    ),
    // Source reading
    ErrorMetadata::new(
        "E005",
        "FileProcessing",
        Severity::Critical,
        false,
        true,
        "Token source file not found",
        "Check the configured source path",
    ),
    ErrorMetadata::new(
        "E007",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "Token source exceeds the maximum supported size",
        "Split the token definitions or raise the compile-time limit",
    ),
    ErrorMetadata::new(
        "E009",
        "FileProcessing",
        Severity::Critical,
        false,
        true,
        "Permission denied reading the token source",
        "Check file permissions",
    ),
    ErrorMetadata::new(
        "E010",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "Token source is not valid UTF-8",
        "Re-save the source with UTF-8 encoding",
    ),
    ErrorMetadata::new(
        "E011",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "I/O error reading the token source",
        "Check disk health and retry",
    ),
    ErrorMetadata::new(
        "E012",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "Token source path is invalid",
        "Point the source path at a regular file",
    ),
    // Patterns
    ErrorMetadata::new(
        "E020",
        "Patterns",
        Severity::Critical,
        false,
        true,
        "Extraction pattern failed to compile",
        "Fix the regular expression in the rule definition",
    ),
    ErrorMetadata::new(
        "E021",
        "Patterns",
        Severity::Critical,
        false,
        true,
        "Two extraction rules share one id",
        "Give every rule a unique id",
    ),
    // Scanning
    ErrorMetadata::new(
        "W101",
        "Scanning",
        Severity::Medium,
        true,
        false,
        "Rule produced more matches than the per-rule limit",
        "Check the source for generated or duplicated definitions",
    ),
    ErrorMetadata::new(
        "W102",
        "Scanning",
        Severity::Low,
        true,
        false,
        "Captured token name exceeds the maximum length",
        "Shorten the token name",
    ),
    // Building
    ErrorMetadata::new(
        "W201",
        "Building",
        Severity::Low,
        true,
        false,
        "Numeric token value could not be parsed",
        "Use a plain decimal literal in the token definition",
    ),
    ErrorMetadata::new(
        "W202",
        "Building",
        Severity::Low,
        true,
        false,
        "Color token value could not be normalized",
        "Use a 6- or 8-digit hex literal",
    ),
    ErrorMetadata::new(
        "W203",
        "Building",
        Severity::Low,
        true,
        false,
        "Duration token value is not a whole number of milliseconds",
        "Use an integer millisecond literal",
    ),
    ErrorMetadata::new(
        "W204",
        "Building",
        Severity::Low,
        true,
        false,
        "Shadow offset is not an (x, y) pair of numbers",
        "Use Offset(<x>, <y>) with numeric literals",
    ),
    // Export
    ErrorMetadata::new(
        "E300",
        "Export",
        Severity::High,
        true,
        false,
        "Document serialization failed",
        "File a bug report naming the failing adapter",
    ),
    ErrorMetadata::new(
        "E301",
        "Export",
        Severity::High,
        true,
        false,
        "Document could not be written",
        "Check that the output directory is writable",
    ),
    ErrorMetadata::new(
        "E302",
        "Export",
        Severity::High,
        true,
        false,
        "Output directory could not be created",
        "Check the configured output directory",
    ),
    ErrorMetadata::new(
        "E303",
        "Export",
        Severity::Critical,
        false,
        true,
        "Two export adapters share one id",
        "Register each adapter once",
    ),
    ErrorMetadata::new(
        "E304",
        "Export",
        Severity::Critical,
        false,
        true,
        "Two export adapters write the same file",
        "Give every adapter a distinct file name",
    ),
    // Config
    ErrorMetadata::new(
        "E400",
        "Config",
        Severity::High,
        false,
        true,
        "Configuration file could not be read",
        "Check the --config path",
    ),
    ErrorMetadata::new(
        "E401",
        "Config",
        Severity::High,
        false,
        true,
        "Configuration file is not valid TOML",
        "Fix the syntax reported in the error",
    ),
    ErrorMetadata::new(
        "E402",
        "Config",
        Severity::High,
        false,
        true,
        "Configuration value is out of range",
        "Fix the named field",
    ),
];

/// Code metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        REGISTRY_ENTRIES
            .iter()
            .map(|metadata| (metadata.code, metadata.clone()))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
