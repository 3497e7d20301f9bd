use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, info, warn};
use quick_cache::sync::Cache;

use crate::error::PathmapError;
use crate::map::MapScene;
use crate::provider::{FileCacheController, ImageryProvider, PersistentCacheController, UrlSource};

const MEMORY_CACHE_CAPACITY: usize = 64;

/// Loads rendered map images from the remote service over HTTP and uses `PersistentCache` to
/// save them locally. Recently loaded images are also kept in an in-memory cache, so repeated
/// renders of an unchanged map do not hit the network.
pub struct UrlImageryProvider<PersistentCache = FileCacheController> {
    url_source: Box<dyn UrlSource<MapScene>>,
    http_client: reqwest::Client,
    memory_cache: Cache<String, Bytes>,
    persistent_cache: Option<PersistentCache>,
    offline_mode: bool,
}

impl UrlImageryProvider<FileCacheController> {
    /// Creates a new instance without persistent cache.
    pub fn new(url_source: impl UrlSource<MapScene> + 'static) -> Self {
        Self {
            url_source: Box::new(url_source),
            http_client: reqwest::Client::new(),
            memory_cache: Cache::new(MEMORY_CACHE_CAPACITY),
            persistent_cache: None,
            offline_mode: false,
        }
    }
}

impl<PersistentCache> UrlImageryProvider<PersistentCache> {
    /// Creates a new instance with persistent cache.
    pub fn new_cached(
        url_source: impl UrlSource<MapScene> + 'static,
        cache: PersistentCache,
    ) -> Self {
        Self {
            url_source: Box::new(url_source),
            http_client: reqwest::Client::new(),
            memory_cache: Cache::new(MEMORY_CACHE_CAPACITY),
            persistent_cache: Some(cache),
            offline_mode: false,
        }
    }

    /// If offline mode is enabled, the provider will not attempt to download data from
    /// Internet, and will only use its caches as the source of data.
    pub fn set_offline_mode(&mut self, enabled: bool) {
        if enabled && self.persistent_cache.is_none() {
            warn!(
                "Offline mode for url imagery provider is enabled, but no persistent cache is \
                 configured. Only images requested earlier in this process will be available."
            )
        }

        self.offline_mode = enabled;
    }

    fn check_offline_mode(&self) -> Result<(), PathmapError> {
        if self.offline_mode {
            Err(PathmapError::NotFound)
        } else {
            Ok(())
        }
    }

    async fn load_from_web(&self, url: &str) -> Result<Bytes, PathmapError> {
        let response = self.http_client.get(url).send().await?;
        if !response.status().is_success() {
            info!(
                "Failed to load {url}: {}, {:?}",
                response.status(),
                response.text().await
            );
            return Err(PathmapError::Io);
        }

        Ok(response.bytes().await?)
    }
}

#[async_trait]
impl<PersistentCache> ImageryProvider for UrlImageryProvider<PersistentCache>
where
    PersistentCache: PersistentCacheController<str, Bytes> + Send + Sync,
{
    async fn load(&self, scene: &MapScene) -> Result<Bytes, PathmapError> {
        let url = (self.url_source)(scene);

        if let Some(data) = self.memory_cache.get(&url) {
            debug!("Loaded {url} from memory cache");
            return Ok(data);
        }

        if let Some(cache) = &self.persistent_cache {
            if let Some(data) = cache.get(&url) {
                debug!("Loaded {url} from persistent cache");
                self.memory_cache.insert(url, data.clone());
                return Ok(data);
            }
        }

        self.check_offline_mode()?;

        info!("Loading {url}");
        let data = self.load_from_web(&url).await?;

        if let Some(cache) = &self.persistent_cache {
            if let Err(error) = cache.insert(&url, &data) {
                warn!("Failed to write persistent cache entry: {error:?}");
            }
        }

        self.memory_cache.insert(url, data.clone());

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::geo::Size;
    use crate::imagery::ImageryMode;
    use crate::latlon;

    struct CountingCache {
        hits: AtomicUsize,
        data: Bytes,
    }

    impl PersistentCacheController<str, Bytes> for CountingCache {
        fn get(&self, _key: &str) -> Option<Bytes> {
            self.hits.fetch_add(1, Ordering::SeqCst);
            Some(self.data.clone())
        }

        fn insert(&self, _key: &str, _data: &Bytes) -> Result<(), PathmapError> {
            Ok(())
        }
    }

    fn scene() -> MapScene {
        MapScene {
            center: latlon!(37.7749, -122.4194),
            zoom: 15,
            imagery: ImageryMode::Satellite,
            size: Size::default(),
            markers: vec![],
        }
    }

    #[tokio::test]
    async fn serves_from_persistent_cache() {
        let cache = CountingCache {
            hits: AtomicUsize::new(0),
            data: Bytes::from_static(b"image bytes"),
        };
        let provider = UrlImageryProvider::new_cached(|_: &MapScene| "cached".to_string(), cache);

        let data = provider.load(&scene()).await.expect("failed to load");
        assert_eq!(data, Bytes::from_static(b"image bytes"));
    }

    #[tokio::test]
    async fn memory_cache_shields_persistent_cache() {
        let cache = CountingCache {
            hits: AtomicUsize::new(0),
            data: Bytes::from_static(b"image bytes"),
        };
        let provider = UrlImageryProvider::new_cached(|_: &MapScene| "stable".to_string(), cache);

        for _ in 0..3 {
            provider.load(&scene()).await.expect("failed to load");
        }

        let hits = provider
            .persistent_cache
            .as_ref()
            .expect("cache is configured")
            .hits
            .load(Ordering::SeqCst);
        assert_eq!(hits, 1);
    }

    #[tokio::test]
    async fn offline_mode_without_cached_entry_is_not_found() {
        let mut provider = UrlImageryProvider::new(|_: &MapScene| "missing".to_string());
        provider.set_offline_mode(true);

        assert!(matches!(
            provider.load(&scene()).await,
            Err(PathmapError::NotFound)
        ));
    }
}
