//! Reading report files from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::raw::RawReport;

/// Errors that can occur while reading a report file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: invalid JSON: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A raw report together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub source: String,
    pub report: RawReport,
}

impl RawDocument {
    /// Parses a report from JSON text, labelling it with `source`.
    pub fn from_json(source: impl Into<String>, json: &str) -> Result<Self, serde_json::Error> {
        Ok(RawDocument {
            source: source.into(),
            report: serde_json::from_str(json)?,
        })
    }
}

/// Loads one report file.
pub fn load_report(path: &Path) -> Result<RawDocument, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = RawDocument::from_json(path.display().to_string(), &text).map_err(|source| {
        LoadError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(file = %path.display(), clans = doc.report.clans.len(), "report.loaded");
    Ok(doc)
}

/// Loads every file, returning all documents or every failure.
pub fn load_reports<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RawDocument>, Vec<LoadError>> {
    let mut docs = Vec::with_capacity(paths.len());
    let mut errors = Vec::new();
    for path in paths {
        match load_report(path.as_ref()) {
            Ok(doc) => docs.push(doc),
            Err(e) => errors.push(e),
        }
    }
    if errors.is_empty() {
        Ok(docs)
    } else {
        Err(errors)
    }
}
