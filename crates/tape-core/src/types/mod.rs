//! Core domain types

pub mod tape;

pub use tape::*;
