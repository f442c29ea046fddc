//! Domain vocabulary shared by the Stream Box crates.
//!
//! Nothing in here performs I/O: the types, error taxonomy, role policies,
//! status vocabularies, tag codec and ownership rules are pure so they can be
//! unit tested without a database.

pub mod access;
pub mod error;
pub mod roles;
pub mod status;
pub mod tags;
pub mod types;
pub mod validation;
