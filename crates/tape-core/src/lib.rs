//! Tape Catalog Core Library
//!
//! Domain types, the error taxonomy and the storage port for the tape catalog.
//! Contains no async runtime so it can be shared by any front end.

pub mod error;
pub mod ports;
pub mod types;

pub use error::{CatalogError, Result};
pub use ports::TapeStore;
pub use types::*;
