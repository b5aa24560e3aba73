//! Compile-time limits and defaults
//!
//! Limits here bound resource usage and cannot be changed at runtime.
//! Defaults are the values runtime preferences fall back to.

pub mod compile_time {
    pub mod file_processing {
        /// Maximum source size accepted for scanning (10MB)
        pub const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

        /// Threshold for considering a source "large" (1MB)
        /// PERFORMANCE: large sources get a debug note before scanning
        pub const LARGE_SOURCE_THRESHOLD: u64 = 1024 * 1024;

        /// Default location of the token definition source
        pub const DEFAULT_SOURCE_PATH: &str = "lib/shared/design/tokens/design_tokens.dart";
    }

    pub mod scanning {
        /// Maximum hits collected from a single rule
        /// RESOURCE: matches past this limit are ignored with a warning
        pub const MAX_HITS_PER_RULE: usize = 10_000;

        /// Maximum length of a captured token name
        pub const MAX_TOKEN_NAME_LENGTH: usize = 255;
    }

    pub mod export {
        /// Default output directory for generated documents
        pub const DEFAULT_OUTPUT_DIR: &str = "design-tokens";

        /// Default schema version written into document envelopes
        pub const DEFAULT_SCHEMA_VERSION: &str = "1.0.0";

        /// Default product name written into document envelopes
        pub const DEFAULT_DOCUMENT_NAME: &str = "NutryFlow Design Tokens";

        /// Length unit appended to dimension values
        pub const LENGTH_UNIT: &str = "px";

        /// Suffix for gradient color sequences
        pub const GRADIENT_SUFFIX: &str = "_gradient";
    }

    pub mod logging {
        /// Log buffer size across the whole run
        /// RESOURCE: Controls memory usage for logging
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log events per source before truncation
        pub const MAX_LOG_EVENTS_PER_FILE: usize = 1_000;

        /// Maximum log message length
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}
