//! HTTP handlers

pub mod health;
pub mod tapes;

pub use health::health;
