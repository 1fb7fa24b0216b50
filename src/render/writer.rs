//! Handing a finished map to its destination.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::RenderMap;

/// Errors from writing a map.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot encode map for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A destination for rendered maps.
pub trait MapWriter {
    fn write(&mut self, map: &RenderMap) -> Result<(), WriteError>;
}

/// Writes the map as pretty-printed JSON to a file.
#[derive(Debug, Clone)]
pub struct JsonMapWriter {
    path: PathBuf,
}

impl JsonMapWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonMapWriter { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> WriteError {
        WriteError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl MapWriter for JsonMapWriter {
    fn write(&mut self, map: &RenderMap) -> Result<(), WriteError> {
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, map).map_err(|source| WriteError::Encode {
            path: self.path.clone(),
            source,
        })?;
        out.write_all(b"\n").map_err(|e| self.io_error(e))?;
        out.flush().map_err(|e| self.io_error(e))?;
        info!(path = %self.path.display(), hexes = map.len(), "map.written");
        Ok(())
    }
}
