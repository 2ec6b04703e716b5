//! Cache implementations
//!
//! - `MokaCache`: bounded in-memory cache with optional TTL, backing the
//!   pipeline's query result cache

mod moka_cache;

pub use moka_cache::{MokaCache, MokaCacheConfig};
