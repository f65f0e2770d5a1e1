//! Property Cache Store
//!
//! Maps resource identities to their parsed key property lists, parsing on
//! first lookup and dropping entries when resources go away.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::cache::stats::{CacheCounters, CacheStats};
use crate::config::Config;
use crate::identity::{ObjectName, ResourceIdentity, ResourceInstance};
use crate::properties::{parse_key_properties, PropertyList};

// == Property Cache ==
/// Concurrent identity -> key property list cache.
///
/// Entries are immutable once stored and handed out as shared `Arc`s, so
/// every caller looking up the same identity sees the same instance until it
/// is evicted.
#[derive(Debug)]
pub struct PropertyCache<K: ResourceIdentity = ObjectName> {
    /// Parsed property lists by identity
    entries: RwLock<HashMap<K, Arc<PropertyList>>>,
    /// Lookup and eviction counters
    counters: CacheCounters,
}

impl<K: ResourceIdentity> PropertyCache<K> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty cache with room for `capacity` identities.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
            counters: CacheCounters::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    // == Get Key Property List ==
    /// Returns the key properties of `identity`, parsing them on first use.
    ///
    /// Concurrent first lookups of one identity may each parse; the first
    /// list installed is kept and returned to all of them.
    pub fn get_key_property_list(&self, identity: &K) -> Arc<PropertyList> {
        if let Some(properties) = self.entries.read().get(identity) {
            self.counters.record_hit();
            trace!(?identity, "Key property cache hit");
            return Arc::clone(properties);
        }

        self.counters.record_miss();

        // Parse outside the lock so other identities are not held up.
        let parsed = Arc::new(parse_key_properties(identity.key_property_list_string()));
        self.counters.record_parse();
        debug!(
            ?identity,
            properties = parsed.len(),
            "Parsed key properties on cache miss"
        );

        let mut entries = self.entries.write();
        Arc::clone(entries.entry(identity.clone()).or_insert(parsed))
    }

    // == Remove Entries ==
    /// Drops the entries of resources that no longer exist.
    ///
    /// Unknown identities are ignored. Returns the number of entries removed.
    pub fn remove_entries<'a, I, R>(&self, instances: I) -> usize
    where
        I: IntoIterator<Item = &'a R>,
        R: ResourceInstance<Identity = K> + 'a,
    {
        let removed = {
            let mut entries = self.entries.write();
            instances
                .into_iter()
                .filter(|instance| entries.remove(instance.identity()).is_some())
                .count()
        };

        self.counters.record_evictions(removed as u64);
        if removed > 0 {
            debug!(removed, "Evicted key property lists of removed resources");
        }
        removed
    }

    // == Contains ==
    /// Returns true if `identity` currently has a stored entry.
    pub fn contains(&self, identity: &K) -> bool {
        self.entries.read().contains_key(identity)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.len())
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<K: ResourceIdentity> Default for PropertyCache<K> {
    fn default() -> Self {
        Self::new()
    }
}
