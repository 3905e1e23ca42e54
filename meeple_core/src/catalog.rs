//! Catalog loading from a JSON snapshot

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::game::BoardGame;

/// Errors from catalog loading
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog file could not be read
    Read { path: PathBuf, source: io::Error },
    /// The catalog file is not a valid JSON array of games
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Read { path, source } => {
                write!(f, "Cannot read catalog '{}': {}", path.display(), source)
            }
            CatalogError::Parse { path, source } => {
                write!(f, "Cannot parse catalog '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Read { source, .. } => Some(source),
            CatalogError::Parse { source, .. } => Some(source),
        }
    }
}

/// Load a catalog: a JSON array of game records with camelCase keys.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<BoardGame>, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let games: Vec<BoardGame> =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("Loaded {} games from '{}'", games.len(), path.display());
    Ok(games)
}
