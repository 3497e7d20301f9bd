//! Providers load rendered map imagery from the remote service or from a local cache.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::PathmapError;
use crate::map::MapScene;

mod file_cache;
mod url_provider;

pub use file_cache::FileCacheController;
pub use url_provider::UrlImageryProvider;

/// Source of the URL the given key can be loaded from.
pub trait UrlSource<Key>: (Fn(&Key) -> String) + Send + Sync {}
impl<Key, T: Fn(&Key) -> String + Send + Sync> UrlSource<Key> for T {}

/// Loads rendered map images for a scene.
///
/// This is the seam between map handles and the transport. The default implementation is
/// [`UrlImageryProvider`]; tests and embedders can substitute their own through
/// [`MapService::with_provider`](crate::MapService::with_provider).
#[async_trait]
pub trait ImageryProvider: Send + Sync {
    /// Loads the raw image bytes for the given scene.
    async fn load(&self, scene: &MapScene) -> Result<Bytes, PathmapError>;
}

/// Persistent cache for raw loaded data.
pub trait PersistentCacheController<Key: ?Sized, Data> {
    /// Returns the stored entry for the key, if any.
    fn get(&self, key: &Key) -> Option<Data>;
    /// Stores the entry in the cache.
    fn insert(&self, key: &Key, data: &Data) -> Result<(), PathmapError>;
}
