//! Application layer - Use cases and orchestration
//!
//! Contains the search-extract-summarize pipeline and the port definitions
//! it drives. Adapters in the infrastructure layer implement the ports.

pub mod error;
pub mod ports;
pub mod services;
pub mod settings;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
pub use settings::PipelineSettings;
