//! Error types for the tape catalog

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Lookup failures surfaced by the catalog.
///
/// The `Display` text of each variant is the message shown to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("tape not found")]
    TapeNotFound(String),

    #[error("we currently have no {0} movies available")]
    GenreUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CatalogError::TapeNotFound("10".to_string()).to_string(),
            "tape not found"
        );
        assert_eq!(
            CatalogError::GenreUnavailable("Romantic".to_string()).to_string(),
            "we currently have no Romantic movies available"
        );
    }
}
