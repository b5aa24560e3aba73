//! Token source reader with compile-time limits and global logging integration

use crate::config::constants::compile_time::file_processing::{
    LARGE_SOURCE_THRESHOLD, MAX_SOURCE_SIZE,
};
use crate::logging::codes;
use crate::{log_debug, log_error, log_success};
use std::fs;
use std::path::{Path, PathBuf};

/// Reasons the token source is unavailable
#[derive(Debug, Clone, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading file: {message}")]
    IoError { message: String },

    #[error("Invalid file path: {path}")]
    InvalidPath { path: String },
}

impl FileProcessorError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            FileProcessorError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            FileProcessorError::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            FileProcessorError::PermissionDenied { .. } => {
                codes::file_processing::PERMISSION_DENIED
            }
            FileProcessorError::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            FileProcessorError::IoError { .. } => codes::file_processing::IO_ERROR,
            FileProcessorError::InvalidPath { .. } => codes::file_processing::INVALID_PATH,
        }
    }
}

/// Metadata collected while reading the source
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// Canonical file path
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Number of lines in file
    pub line_count: usize,
    pub modified: Option<std::time::SystemTime>,
}

impl FileMetadata {
    /// Get file size in human-readable format
    pub fn human_readable_size(&self) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = self.size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", self.size, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }

    pub fn is_large_file(&self) -> bool {
        self.size > LARGE_SOURCE_THRESHOLD
    }
}

/// Source text plus metadata
#[derive(Debug, Clone)]
pub struct FileProcessingResult {
    /// File contents as UTF-8 string
    pub source: String,
    pub metadata: FileMetadata,
    pub processing_duration: std::time::Duration,
}

impl FileProcessingResult {
    /// Whitespace-only sources are valid and simply produce no tokens
    pub fn is_effectively_empty(&self) -> bool {
        self.source.trim().is_empty()
    }
}

/// Reads the single token source document
#[derive(Debug, Default)]
pub struct FileProcessor;

impl FileProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn max_file_size() -> u64 {
        MAX_SOURCE_SIZE
    }

    /// Read a source file and return contents with metadata
    pub fn process_file(&self, file_path: &Path) -> Result<FileProcessingResult, FileProcessorError> {
        let start_time = std::time::Instant::now();
        let display_path = file_path.display().to_string();

        log_debug!("Starting source read", "file" => display_path);

        let path = self.validate_path(file_path)?;
        let mut metadata = self.get_metadata(&path)?;
        self.validate_size(&metadata, &display_path)?;
        let source = self.read_file(&path, &display_path)?;

        metadata.line_count = source.lines().count();

        let result = FileProcessingResult {
            source,
            metadata,
            processing_duration: start_time.elapsed(),
        };

        log_success!(
            codes::success::SOURCE_READ_SUCCESS,
            "Token source read successfully",
            "file" => display_path,
            "size_human" => result.metadata.human_readable_size(),
            "lines" => result.metadata.line_count,
            "duration_ms" => format!("{:.2}", result.processing_duration.as_secs_f64() * 1000.0)
        );

        if result.is_effectively_empty() {
            log_debug!("Token source is empty", "file" => display_path);
        }

        Ok(result)
    }

    fn validate_path(&self, file_path: &Path) -> Result<PathBuf, FileProcessorError> {
        let display_path = file_path.display().to_string();

        if file_path.as_os_str().is_empty() {
            let error = FileProcessorError::InvalidPath {
                path: display_path,
            };
            log_error!(error.error_code(), "Empty source path provided");
            return Err(error);
        }

        if !file_path.exists() {
            let error = FileProcessorError::FileNotFound {
                path: display_path.clone(),
            };
            log_error!(error.error_code(), "Token source not found", "path" => display_path);
            return Err(error);
        }

        if !file_path.is_file() {
            let error = FileProcessorError::InvalidPath {
                path: display_path.clone(),
            };
            log_error!(error.error_code(), "Source path is not a file", "path" => display_path);
            return Err(error);
        }

        file_path.canonicalize().map_err(|e| {
            let error = FileProcessorError::IoError {
                message: format!("Failed to resolve path '{}': {}", display_path, e),
            };
            log_error!(error.error_code(), "Failed to canonicalize path",
                "path" => display_path,
                "io_error" => e);
            error
        })
    }

    fn get_metadata(&self, path: &Path) -> Result<FileMetadata, FileProcessorError> {
        let metadata = fs::metadata(path).map_err(|e| {
            let path_str = path.display().to_string();
            let error = match e.kind() {
                std::io::ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied {
                    path: path_str.clone(),
                },
                _ => FileProcessorError::IoError {
                    message: format!("Failed to read metadata for '{}': {}", path_str, e),
                },
            };
            log_error!(error.error_code(), "Failed to read source metadata",
                "path" => path_str,
                "io_error" => e);
            error
        })?;

        let file_metadata = FileMetadata {
            path: path.to_path_buf(),
            size: metadata.len(),
            line_count: 0,
            modified: metadata.modified().ok(),
        };

        log_debug!("Source metadata collected",
            "size_bytes" => file_metadata.size,
            "is_large_file" => file_metadata.is_large_file());

        Ok(file_metadata)
    }

    fn validate_size(&self, metadata: &FileMetadata, file_path: &str) -> Result<(), FileProcessorError> {
        let max_size = Self::max_file_size();
        if metadata.size > max_size {
            let error = FileProcessorError::FileTooLarge {
                size: metadata.size,
                max_size,
            };
            log_error!(error.error_code(), "Token source exceeds compile-time maximum size",
                "file" => file_path,
                "size_bytes" => metadata.size,
                "limit_bytes" => max_size);
            return Err(error);
        }

        Ok(())
    }

    fn read_file(&self, path: &Path, file_path: &str) -> Result<String, FileProcessorError> {
        fs::read_to_string(path).map_err(|e| {
            let error = match e.kind() {
                std::io::ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied {
                    path: path.display().to_string(),
                },
                std::io::ErrorKind::InvalidData => FileProcessorError::InvalidEncoding {
                    path: path.display().to_string(),
                },
                _ => FileProcessorError::IoError {
                    message: format!("Failed to read file '{}': {}", path.display(), e),
                },
            };
            log_error!(error.error_code(), "Failed to read token source",
                "file" => file_path,
                "io_error" => e);
            error
        })
    }
}

/// Read a source file with default settings
pub fn process_file(file_path: &Path) -> Result<FileProcessingResult, FileProcessorError> {
    FileProcessor::new().process_file(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn test_process_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("design_tokens.dart");
        let content = "class DesignTokens {\n  static double get spacingMd => 8.0;\n}\n";
        fs::write(&file_path, content).unwrap();

        let result = process_file(&file_path).unwrap();

        assert_eq!(result.source, content);
        assert_eq!(result.metadata.line_count, 3);
        assert!(!result.is_effectively_empty());
        assert!(!result.metadata.is_large_file());
    }

    #[test]
    fn test_empty_file_is_valid() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.dart");
        fs::write(&file_path, "").unwrap();

        let result = process_file(&file_path).unwrap();
        assert!(result.is_effectively_empty());
        assert_eq!(result.metadata.size, 0);
    }

    #[test]
    fn test_file_not_found() {
        let result = process_file(Path::new("nonexistent/design_tokens.dart"));
        assert_matches!(result, Err(FileProcessorError::FileNotFound { .. }));
    }

    #[test]
    fn test_directory_is_invalid_path() {
        let dir = tempdir().unwrap();
        let result = process_file(dir.path());
        assert_matches!(result, Err(FileProcessorError::InvalidPath { .. }));
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let result = process_file(Path::new(""));
        assert_matches!(result, Err(FileProcessorError::InvalidPath { .. }));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary.dart");
        fs::write(&file_path, [0xff, 0xfe, 0xfd]).unwrap();

        let result = process_file(&file_path);
        assert_matches!(result, Err(FileProcessorError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_file_too_large() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("large.dart");
        let file = fs::File::create(&file_path).unwrap();
        file.set_len(MAX_SOURCE_SIZE + 1).unwrap();

        let result = process_file(&file_path);
        assert_matches!(
            result,
            Err(FileProcessorError::FileTooLarge { size, max_size })
                if size == MAX_SOURCE_SIZE + 1 && max_size == MAX_SOURCE_SIZE
        );
    }

    #[test]
    fn test_error_methods() {
        let error = FileProcessorError::FileNotFound {
            path: "design_tokens.dart".to_string(),
        };

        assert_eq!(error.error_code().as_str(), "E005");
        assert_eq!(
            FileProcessorError::PermissionDenied { path: "design_tokens.dart".to_string() }
                .error_code()
                .as_str(),
            "E009"
        );
    }

    #[test]
    fn test_human_readable_size() {
        let metadata = FileMetadata {
            path: PathBuf::from("tokens.dart"),
            size: 2048,
            line_count: 0,
            modified: None,
        };
        assert_eq!(metadata.human_readable_size(), "2.00 KB");
    }
}
