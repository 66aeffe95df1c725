//! Storage traits for the catalog

use crate::{CreateOutcome, Result, Tape};

/// Tape store
///
/// Implementations keep insertion order and never block on I/O.
pub trait TapeStore: Send + Sync {
    /// All tapes, or only those whose genre equals `genre` exactly.
    ///
    /// An empty filtered result is reported as `GenreUnavailable`.
    fn list(&self, genre: Option<&str>) -> Result<Vec<Tape>>;

    /// First tape whose id equals `id`.
    fn get_by_id(&self, id: &str) -> Result<Tape>;

    /// Append `candidate`, or bump the stock of the first tape with the same
    /// title and director.
    fn create(&self, candidate: Tape) -> CreateOutcome;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
