//! Bootstrap lifecycle of the global service instance.
//!
//! The whole lifecycle lives in a single test function: the global instance is process-wide,
//! and test ordering within a binary is not guaranteed.

use pathmap::{init_map, latlon, MapService, PathmapError, ServiceConfig};

#[tokio::test]
async fn service_readiness_lifecycle() {
    // Before the bootstrap completes map creation fails with an identifiable error instead of
    // crashing somewhere inside a request.
    assert!(!MapService::is_ready());
    assert!(matches!(MapService::get(), Err(PathmapError::NotReady)));
    assert!(matches!(
        init_map(latlon!(37.7749, -122.4194), [[37.7750, -122.4195]]),
        Err(PathmapError::NotReady)
    ));

    // Offline mode skips the network probe, so the bootstrap completes without a server.
    let config = ServiceConfig::new("https://maps.example.com/api/staticmap", "TESTKEY")
        .with_offline_mode(true);
    MapService::initialize(config.clone())
        .await
        .expect("failed to initialize");

    assert!(MapService::is_ready());
    assert!(MapService::get().is_ok());

    let map = init_map(
        latlon!(37.7749, -122.4194),
        [[37.7750, -122.4195], [37.7740, -122.4190]],
    )
    .expect("service is initialized");
    assert_eq!(map.markers().len(), 2);

    // Readiness resolves exactly once.
    assert!(matches!(
        MapService::initialize(config).await,
        Err(PathmapError::AlreadyInitialized)
    ));
}
