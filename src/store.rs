//! Save-file persistence for [`GameState`].
//!
//! The whole state snapshot is written after every mutation, so a host
//! crash or accidental quit never loses more than the step in flight.

use crate::state::GameState;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access save file {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("save file {} is corrupt: {}", path.display(), source)]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Write the full state snapshot to `path`.
pub fn save(path: &Path, state: &GameState) -> Result<(), StoreError> {
    let text = serde_json::to_string_pretty(state).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "state saved");
    Ok(())
}

/// Read a previously saved state. A missing file is not an error, it just
/// means there is nothing to resume.
pub fn load(path: &Path) -> Result<Option<GameState>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let state = serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(state))
}

/// Delete the save file. Deleting a file that is already gone is fine.
pub fn clear(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "save file cleared");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn exists(path: &Path) -> bool {
    path.exists()
}
