//! Template loading for soap-injector.
//!
//! A template is a text file (XML by default) holding a message body with
//! `{{NAME}}` placeholders. Templates are read once at startup from a single
//! directory and are immutable afterwards.
//!
//! # Example
//!
//! ```ignore
//! use soap_injector_templates::{TemplateSet, DEFAULT_EXTENSION};
//!
//! let templates = TemplateSet::load("./soap_templates", DEFAULT_EXTENSION).await?;
//! for template in templates.iter() {
//!     println!("{}: {} bytes", template.name, template.content.len());
//! }
//! ```

mod error;
mod local;

use std::path::{Path, PathBuf};

pub use error::TemplateError;

/// Extension recognized when none is configured.
pub const DEFAULT_EXTENSION: &str = "xml";

/// A message template loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// File name, used to identify the template in logs
    pub name: String,
    /// Raw file contents
    pub content: String,
}

impl Template {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Non-empty, name-ordered collection of templates from one directory.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    directory: PathBuf,
    templates: Vec<Template>,
}

impl TemplateSet {
    /// Load every file in `directory` whose extension matches `extension`.
    ///
    /// The listing is non-recursive and the extension comparison ignores
    /// case. Fails if the directory does not exist or holds no matching file.
    pub async fn load(
        directory: impl AsRef<Path>,
        extension: &str,
    ) -> Result<Self, TemplateError> {
        let directory = directory.as_ref();
        let paths = local::list_templates(directory, extension).await?;

        if paths.is_empty() {
            return Err(TemplateError::NoTemplates {
                directory: directory.to_path_buf(),
                extension: extension.to_string(),
            });
        }

        let mut templates = Vec::with_capacity(paths.len());
        for path in &paths {
            templates.push(local::read_template(path).await?);
        }

        tracing::info!(
            "Loaded {} template(s) from {}",
            templates.len(),
            directory.display()
        );
        for template in &templates {
            tracing::info!("  - {}", template.name);
        }

        Ok(Self {
            directory: directory.to_path_buf(),
            templates,
        })
    }

    /// Build a set from templates already in memory.
    ///
    /// Templates are sorted by name to match the on-disk ordering.
    pub fn from_templates(
        directory: impl Into<PathBuf>,
        mut templates: Vec<Template>,
    ) -> Result<Self, TemplateError> {
        let directory = directory.into();
        if templates.is_empty() {
            return Err(TemplateError::NoTemplates {
                directory,
                extension: DEFAULT_EXTENSION.to_string(),
            });
        }
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self {
            directory,
            templates,
        })
    }

    /// Directory the templates were loaded from.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false for a successfully constructed set.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    pub fn as_slice(&self) -> &[Template] {
        &self.templates
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    /// Template names in load order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }
}
