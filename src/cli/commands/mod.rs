//! CLI command implementations.

pub mod ask;
pub mod plan;
pub mod route;
pub mod run;
