//! Document template resolution
//!
//! Resolution order:
//! 1. `name` itself, if it is an absolute path to a file
//! 2. `<dir>/<name>` for each search directory, in order
//! 3. Builtin template
//!
//! Relative names never resolve against the process working directory.
//!
//! Templates are read on every call; nothing is cached.

use crate::template::builtin::get_builtin_template;
use crate::template::error::TemplateError;
use std::path::{Path, PathBuf};

/// Resolves document templates by name
#[derive(Debug, Clone, Default)]
pub struct TemplateLoader {
    search_paths: Vec<PathBuf>,
}

impl TemplateLoader {
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Load template text for `name`
    pub fn load(&self, name: &str) -> Result<String, TemplateError> {
        let direct = Path::new(name);
        if direct.is_absolute() && direct.is_file() {
            log::debug!("Loading template from {}", direct.display());
            return read_template(direct);
        }

        for dir in &self.search_paths {
            let candidate = dir.join(name);
            if candidate.is_file() {
                log::debug!("Loading template from {}", candidate.display());
                return read_template(&candidate);
            }
        }

        if let Some(builtin) = get_builtin_template(name) {
            log::debug!("Using builtin template '{}'", name);
            return Ok(builtin.to_string());
        }

        Err(TemplateError::TemplateNotFound {
            name: name.to_string(),
            searched: self.search_paths.clone(),
        })
    }
}

/// Read a template file, attaching the path to I/O errors
pub fn read_template(path: &Path) -> Result<String, TemplateError> {
    std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    })
}
