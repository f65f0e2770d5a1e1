//! Eviction Task
//!
//! Background task that drops cache entries for resources discovery reports
//! as removed.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::PropertyCache;
use crate::config::Config;
use crate::identity::ResourceInstance;

/// Creates the channel discovery uses to report removed resources.
///
/// Each message is one batch of instances known to be gone.
pub fn eviction_channel<R>(config: &Config) -> (mpsc::Sender<Vec<R>>, mpsc::Receiver<Vec<R>>) {
    mpsc::channel(config.eviction_channel_capacity.max(1))
}

/// Spawns a background task that applies removal batches to the cache.
///
/// The task runs until every sender is dropped, then exits.
///
/// # Arguments
/// * `cache` - Shared cache to evict from
/// * `removals` - Receiving end of an [`eviction_channel`]
///
/// # Example
/// ```ignore
/// let cache = Arc::new(PropertyCache::from_config(&config));
/// let (tx, rx) = eviction_channel::<ObjectInstance>(&config);
/// let handle = spawn_eviction_task(cache.clone(), rx);
/// tx.send(removed_instances).await?;
/// ```
pub fn spawn_eviction_task<R>(
    cache: Arc<PropertyCache<R::Identity>>,
    mut removals: mpsc::Receiver<Vec<R>>,
) -> JoinHandle<()>
where
    R: ResourceInstance + Send + 'static,
    R::Identity: 'static,
{
    tokio::spawn(async move {
        info!("Starting key property eviction task");

        while let Some(batch) = removals.recv().await {
            let removed = cache.remove_entries(&batch);
            debug!(
                reported = batch.len(),
                removed,
                "Applied resource removal batch"
            );
        }

        info!("Eviction channel closed, stopping eviction task");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{ObjectInstance, ObjectName};

    fn instance(text: &str) -> ObjectInstance {
        ObjectInstance::new(ObjectName::new(text).unwrap(), "com.example.Bean")
    }

    #[tokio::test]
    async fn test_eviction_task_removes_reported_entries() {
        let config = Config::default();
        let cache: Arc<PropertyCache> = Arc::new(PropertyCache::from_config(&config));
        let gone = instance("com.example:type=Gone");
        let kept = instance("com.example:type=Kept");
        cache.get_key_property_list(gone.identity());
        cache.get_key_property_list(kept.identity());

        let (tx, rx) = eviction_channel::<ObjectInstance>(&config);
        let handle = spawn_eviction_task(cache.clone(), rx);

        tx.send(vec![gone.clone()]).await.unwrap();
        drop(tx);
        handle.await.unwrap();

        assert!(!cache.contains(gone.identity()));
        assert!(cache.contains(kept.identity()));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[tokio::test]
    async fn test_eviction_task_ignores_unknown_resources() {
        let config = Config::default();
        let cache: Arc<PropertyCache> = Arc::new(PropertyCache::from_config(&config));
        let kept = instance("com.example:type=Kept");
        cache.get_key_property_list(kept.identity());

        let (tx, rx) = eviction_channel::<ObjectInstance>(&config);
        let handle = spawn_eviction_task(cache.clone(), rx);

        tx.send(vec![instance("com.example:type=Never")]).await.unwrap();
        tx.send(Vec::new()).await.unwrap();
        drop(tx);
        handle.await.unwrap();

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[tokio::test]
    async fn test_eviction_task_stops_when_senders_dropped() {
        let config = Config::default();
        let cache: Arc<PropertyCache> = Arc::new(PropertyCache::new());
        let (tx, rx) = eviction_channel::<ObjectInstance>(&config);
        let handle = spawn_eviction_task(cache, rx);

        drop(tx);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_eviction_task_can_be_aborted() {
        let config = Config::default();
        let cache: Arc<PropertyCache> = Arc::new(PropertyCache::new());
        let (_tx, rx) = eviction_channel::<ObjectInstance>(&config);
        let handle = spawn_eviction_task(cache, rx);

        handle.abort();
        let result = handle.await;
        assert!(result.unwrap_err().is_cancelled());
    }
}
