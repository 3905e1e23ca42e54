//! Error types for the Meeple CLI

use std::fmt;

use meeple_core::CatalogError;

/// Errors that end a CLI session
#[derive(Debug)]
pub enum CliError {
    /// The catalog could not be loaded
    Catalog(CatalogError),
    /// The interactive prompt failed (not a cancelled input)
    Prompt(inquire::InquireError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Catalog(source) => write!(f, "{}", source),
            CliError::Prompt(source) => write!(f, "Prompt failed: {}", source),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Catalog(source) => Some(source),
            CliError::Prompt(source) => Some(source),
        }
    }
}

impl From<CatalogError> for CliError {
    fn from(source: CatalogError) -> Self {
        CliError::Catalog(source)
    }
}
