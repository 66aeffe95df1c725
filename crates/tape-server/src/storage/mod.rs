//! Storage layer
//!
//! The catalog lives in process memory only and is rebuilt from the seed
//! list on every start.

pub mod memory;

pub use memory::MemoryCatalog;
