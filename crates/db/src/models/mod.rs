//! Row models and write DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the columns the procedures return
//! - A serializable response shape where the row must not be exposed as-is
//! - Write DTOs whose fields are bound positionally into procedure calls

pub mod album;
pub mod report;
pub mod user;
pub mod video;
