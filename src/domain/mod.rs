//! Domain layer for the adjutant workflow engine.
//!
//! Core models, port traits, and error types; free of any concrete gateway
//! or transport concern.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
