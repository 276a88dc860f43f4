//! Append-only JSONL persistence for gesture libraries.
//!
//! A library file starts with a `#`-prefixed JSON header line followed by
//! one JSON template per line. Appending a custom template never rewrites
//! existing entries, so a crash mid-save cannot corrupt earlier templates.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::template::{Library, Template};

/// Header written as the first line of a library file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryFileHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Wall-clock time the file was created (ISO 8601).
    pub created_at: String,
}

impl LibraryFileHeader {
    pub fn new() -> Self {
        Self {
            schema_version: "1.0".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl Default for LibraryFileHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when reading or writing library files.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Parse templates from JSONL content (one JSON object per line).
/// Header and blank lines are skipped.
pub fn parse_templates(jsonl: &str) -> Result<Vec<Template>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize templates to JSONL format (no header).
pub fn serialize_templates(templates: &[Template]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for template in templates {
        output.push_str(&serde_json::to_string(template)?);
        output.push('\n');
    }
    Ok(output)
}

/// A template library file on disk.
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the library, preserving file order.
    pub fn load(&self) -> Result<Library, StoreError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        let templates = parse_templates(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(Library::new(templates))
    }

    /// Load the library, or an empty one if the file does not exist yet.
    /// A missing custom library is normal on first run.
    pub fn load_or_empty(&self) -> Result<Library, StoreError> {
        if !self.exists() {
            return Ok(Library::default());
        }
        self.load()
    }

    /// Append a single template, creating the file (with header) on first use.
    pub fn append(&self, template: &Template) -> Result<(), StoreError> {
        let io_err = |e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let fresh = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;

        let parse_err = |e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        };

        if fresh {
            let header = serde_json::to_string(&LibraryFileHeader::new()).map_err(parse_err)?;
            writeln!(file, "# {header}").map_err(io_err)?;
        }

        let json = serde_json::to_string(template).map_err(parse_err)?;
        writeln!(file, "{json}").map_err(io_err)?;
        Ok(())
    }

    /// Write a whole library, replacing any existing file.
    pub fn write_all(&self, library: &Library) -> Result<(), StoreError> {
        let io_err = |e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let parse_err = |e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        };

        let header = serde_json::to_string(&LibraryFileHeader::new()).map_err(parse_err)?;
        let body = serialize_templates(&library.templates).map_err(parse_err)?;
        std::fs::write(&self.path, format!("# {header}\n{body}")).map_err(io_err)
    }

    /// Read the header line, if the file has one.
    pub fn read_header(&self) -> Result<Option<LibraryFileHeader>, StoreError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        let Some(first) = content.lines().next() else {
            return Ok(None);
        };
        let Some(json) = first.strip_prefix("# ") else {
            return Ok(None);
        };
        let header = serde_json::from_str(json).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(Some(header))
    }
}
