//! Pathmap is a thin client over a remote map imagery service. It renders a satellite map
//! centered on a given coordinate and places markers for a supplied list of path points. All
//! actual map drawing is delegated to the remote service; this crate constructs the requests,
//! manages the service credential and readiness, and hands out typed handles for the created
//! maps and markers.
//!
//! # Quick start
//!
//! ```no_run
//! use pathmap::{init_map, latlon, MapService, ServiceConfig};
//!
//! # tokio_test::block_on(async {
//! MapService::initialize(ServiceConfig::new(
//!     "https://maps.example.com/api/staticmap",
//!     "YOUR_API_KEY",
//! ))
//! .await
//! .expect("failed to initialize the imagery service");
//!
//! let map = init_map(
//!     latlon!(37.7749, -122.4194),
//!     [[37.7750, -122.4195], [37.7740, -122.4190]],
//! )
//! .expect("service is initialized");
//!
//! map.render_to_file("result.png").await.expect("failed to render the map");
//! # });
//! ```
//!
//! This requests a satellite image centered on San Francisco with two markers and saves it to
//! `result.png`. By default maps are created with zoom level 15, satellite imagery and one
//! `"path point"` marker per input point; use [`init_map_with`] and [`MapOptions`] to override
//! any of those.
//!
//! # Service readiness
//!
//! The remote service must be bootstrapped exactly once with [`MapService::initialize`] before
//! the first map is created. The call is asynchronous: it completes only after the service has
//! accepted the configured credential, so a completed `initialize` is the readiness signal.
//! Creating a map before that returns [`PathmapError::NotReady`] instead of failing somewhere
//! inside a request.
//!
//! Applications that do not want process-global state can skip the registry altogether: create
//! a service handle with [`MapService::new`] and pass it to [`PathMap::new`] directly.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod attribution;
pub mod decoded_image;
pub mod error;
mod geo;
mod imagery;
mod map;
pub mod provider;
mod service;

pub use attribution::Attribution;
pub use decoded_image::DecodedImage;
pub use error::PathmapError;
pub use geo::{GeoPoint, Size};
pub use imagery::ImageryMode;
pub use map::{init_map, init_map_with, MapOptions, MapScene, Marker, PathMap};
pub use map::{DEFAULT_MARKER_TITLE, DEFAULT_ZOOM};
pub use service::{MapService, ServiceConfig};
