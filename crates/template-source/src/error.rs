//! Error types for template loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading templates.
///
/// All of these are configuration errors: the run cannot start without at
/// least one readable template.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Template directory is missing or is not a directory.
    #[error("Template directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Directory exists but holds no file with the recognized extension.
    #[error("No .{extension} files found in: {}", directory.display())]
    NoTemplates {
        directory: PathBuf,
        extension: String,
    },

    /// Template file is not valid UTF-8.
    #[error("Template is not valid UTF-8: {}", path.display())]
    InvalidUtf8 { path: PathBuf },

    /// IO error.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
