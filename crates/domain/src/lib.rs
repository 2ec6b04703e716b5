//! Domain layer for Sift
//!
//! Contains the entities produced by the search-and-summarize pipeline and
//! the domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::DomainError;
