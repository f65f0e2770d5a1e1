//! Cache Module
//!
//! Provides the concurrent identity -> key property list cache.

mod stats;
mod store;

// Re-export public types
pub use stats::CacheStats;
pub use store::PropertyCache;
