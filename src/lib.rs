//! Keyprops - cached key property lists for managed resource names
//!
//! Parses the `key=value,...` part of names such as
//! `java.lang:type=GarbageCollector,name=G1 Young Generation` into ordered
//! property lists, and caches the result per resource so collection drivers
//! can look properties up on every scrape without re-parsing.

pub mod cache;
pub mod config;
pub mod error;
pub mod identity;
pub mod properties;
pub mod tasks;

pub use cache::{CacheStats, PropertyCache};
pub use config::Config;
pub use error::IdentityError;
pub use identity::{ObjectInstance, ObjectName, ResourceIdentity, ResourceInstance};
pub use properties::{parse_key_properties, PropertyList};
pub use tasks::{eviction_channel, spawn_eviction_task};
