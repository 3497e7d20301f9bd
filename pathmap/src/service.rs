//! The imagery service: configuration, bootstrap and the global readiness handle.

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use lazy_static::lazy_static;
use log::info;
use parking_lot::RwLock;

use crate::attribution::Attribution;
use crate::error::PathmapError;
use crate::map::MapScene;
use crate::provider::{FileCacheController, ImageryProvider, UrlImageryProvider};

lazy_static! {
    static ref INSTANCE: RwLock<Option<Arc<MapService>>> = RwLock::new(None);
}

/// Configuration of the connection to the remote imagery service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    base_url: String,
    api_key: String,
    cache_path: Option<PathBuf>,
    offline_mode: bool,
    attribution: Option<Attribution>,
}

impl ServiceConfig {
    /// Creates a new configuration for the given service endpoint and credential.
    ///
    /// The credential is always supplied by the caller; it is sent to the service as the `key`
    /// query parameter of every request.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            cache_path: None,
            offline_mode: false,
            attribution: None,
        }
    }

    /// Sets the folder for the persistent cache of loaded imagery.
    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// If offline mode is enabled, the service skips the availability check on initialization
    /// and serves imagery only from its caches.
    pub fn with_offline_mode(mut self, enabled: bool) -> Self {
        self.offline_mode = enabled;
        self
    }

    /// Sets the attribution of the imagery source.
    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    /// URL of the availability check request sent on initialization.
    fn bootstrap_url(&self) -> String {
        format!("{}?key={}", self.base_url, self.api_key)
    }

    /// URL the given scene can be requested at.
    pub fn scene_url(&self, scene: &MapScene) -> String {
        let mut url = format!(
            "{}?key={}&center={},{}&zoom={}&maptype={}&size={}x{}",
            self.base_url,
            self.api_key,
            scene.center.lat(),
            scene.center.lng(),
            scene.zoom,
            scene.imagery.as_str(),
            scene.size.width(),
            scene.size.height(),
        );

        for position in &scene.markers {
            url.push_str(&format!("&markers={},{}", position.lat(), position.lng()));
        }

        url
    }
}

/// Access point to the remote imagery service.
///
/// A service handle is created either by [`MapService::initialize`], which also registers it
/// process-wide for [`init_map`](crate::init_map) consumers, or by [`MapService::new`] /
/// [`MapService::with_provider`] for applications that pass the handle around explicitly.
pub struct MapService {
    config: ServiceConfig,
    provider: Box<dyn ImageryProvider>,
}

impl MapService {
    /// Creates a service handle with the default URL imagery provider.
    ///
    /// The handle is not registered globally; see [`MapService::initialize`] for that.
    pub fn new(config: ServiceConfig) -> Result<Self, PathmapError> {
        if config.api_key.is_empty() {
            return Err(PathmapError::Generic(
                "imagery service API key is empty".into(),
            ));
        }

        let provider: Box<dyn ImageryProvider> = match &config.cache_path {
            Some(path) => {
                let cache = FileCacheController::new(path)?;
                let url_config = config.clone();
                let mut provider = UrlImageryProvider::new_cached(
                    move |scene: &MapScene| url_config.scene_url(scene),
                    cache,
                );
                provider.set_offline_mode(config.offline_mode);
                Box::new(provider)
            }
            None => {
                let url_config = config.clone();
                let mut provider =
                    UrlImageryProvider::new(move |scene: &MapScene| url_config.scene_url(scene));
                provider.set_offline_mode(config.offline_mode);
                Box::new(provider)
            }
        };

        Ok(Self { config, provider })
    }

    /// Creates a service handle with a custom imagery provider.
    pub fn with_provider(config: ServiceConfig, provider: impl ImageryProvider + 'static) -> Self {
        Self {
            config,
            provider: Box::new(provider),
        }
    }

    /// Initializes the global service instance.
    ///
    /// Unless offline mode is configured, the service endpoint is probed with the configured
    /// credential before the instance becomes visible, so a completed `initialize` call means
    /// the service is reachable and the credential is accepted. Readiness is resolved exactly
    /// once: repeated calls return [`PathmapError::AlreadyInitialized`].
    pub async fn initialize(config: ServiceConfig) -> Result<Arc<MapService>, PathmapError> {
        if INSTANCE.read().is_some() {
            return Err(PathmapError::AlreadyInitialized);
        }

        let service = Self::new(config)?;
        if !service.config.offline_mode {
            service.probe().await?;
        }

        let service = Arc::new(service);

        let mut instance = INSTANCE.write();
        if instance.is_some() {
            return Err(PathmapError::AlreadyInitialized);
        }
        *instance = Some(service.clone());

        Ok(service)
    }

    /// Returns the globally initialized service.
    ///
    /// Returns [`PathmapError::NotReady`] when called before [`MapService::initialize`] has
    /// completed.
    pub fn get() -> Result<Arc<MapService>, PathmapError> {
        INSTANCE.read().clone().ok_or(PathmapError::NotReady)
    }

    /// True if the global service instance is initialized.
    pub fn is_ready() -> bool {
        INSTANCE.read().is_some()
    }

    /// Attribution of the imagery source, if configured.
    pub fn attribution(&self) -> Option<&Attribution> {
        self.config.attribution.as_ref()
    }

    /// Loads the raw image bytes for the given scene.
    pub async fn load_scene(&self, scene: &MapScene) -> Result<Bytes, PathmapError> {
        self.provider.load(scene).await
    }

    async fn probe(&self) -> Result<(), PathmapError> {
        info!(
            "Checking imagery service availability at {}",
            self.config.base_url
        );

        let response = reqwest::get(self.config.bootstrap_url()).await?;
        if !response.status().is_success() {
            info!(
                "Imagery service rejected the bootstrap request: {}",
                response.status()
            );
            return Err(PathmapError::Io);
        }

        Ok(())
    }
}
