//! Background Tasks Module
//!
//! Contains background tasks that run alongside a collection driver.
//!
//! # Tasks
//! - Eviction: Drops cached key properties of resources reported as removed

mod eviction;

pub use eviction::{eviction_channel, spawn_eviction_task};
