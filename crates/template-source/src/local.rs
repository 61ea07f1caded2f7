//! Local filesystem template discovery

use crate::{Template, TemplateError};
use std::path::{Path, PathBuf};

/// List template files in a directory (non-recursive, immediate children only)
///
/// Returns only regular files whose extension matches, sorted by path.
pub async fn list_templates(path: &Path, extension: &str) -> Result<Vec<PathBuf>, TemplateError> {
    let is_dir = tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return Err(TemplateError::DirectoryNotFound(path.to_path_buf()));
    }

    let io_err = |source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut results = Vec::new();
    let mut entries = tokio::fs::read_dir(path).await.map_err(io_err)?;

    while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
        let entry_path = entry.path();
        let metadata = entry.metadata().await.map_err(|source| TemplateError::Io {
            path: entry_path.clone(),
            source,
        })?;

        // Only include files, skip directories
        if metadata.is_file() && has_extension(&entry_path, extension) {
            results.push(entry_path);
        }
    }

    // Sort for consistent ordering
    results.sort();

    tracing::debug!(
        "Listed {} template file(s) in directory: {}",
        results.len(),
        path.display()
    );

    Ok(results)
}

/// Read a single template file as UTF-8
pub async fn read_template(path: &Path) -> Result<Template, TemplateError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let content = String::from_utf8(bytes).map_err(|_| TemplateError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::debug!("Read template {} ({} bytes)", name, content.len());

    Ok(Template { name, content })
}

fn has_extension(path: &Path, extension: &str) -> bool {
    let wanted = extension.trim_start_matches('.');
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(wanted))
}
