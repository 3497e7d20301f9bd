//! Map handles created by the initializer, and the scenes they render through.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::decoded_image::DecodedImage;
use crate::error::PathmapError;
use crate::geo::{GeoPoint, Size};
use crate::imagery::ImageryMode;
use crate::service::MapService;

/// Title assigned to markers when no explicit title is configured.
pub const DEFAULT_MARKER_TITLE: &str = "path point";

/// Zoom level used when no explicit zoom is configured.
pub const DEFAULT_ZOOM: u32 = 15;

/// Configuration of a created map.
///
/// The defaults are zoom level 15, satellite imagery, `"path point"` marker titles and a
/// 1024x1024 output image.
#[derive(Debug, Clone)]
pub struct MapOptions {
    zoom: u32,
    imagery: ImageryMode,
    marker_title: String,
    size: Size,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            imagery: ImageryMode::Satellite,
            marker_title: DEFAULT_MARKER_TITLE.to_string(),
            size: Size::default(),
        }
    }
}

impl MapOptions {
    /// Zoom level of the map.
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Imagery the map is rendered with.
    pub fn imagery(&self) -> ImageryMode {
        self.imagery
    }

    /// Title given to the markers created together with the map.
    pub fn marker_title(&self) -> &str {
        &self.marker_title
    }

    /// Size of the rendered image.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the zoom level of the map.
    pub fn with_zoom(mut self, zoom: u32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Sets the imagery the map is rendered with.
    pub fn with_imagery(mut self, imagery: ImageryMode) -> Self {
        self.imagery = imagery;
        self
    }

    /// Sets the title given to the markers created together with the map.
    pub fn with_marker_title(mut self, title: impl Into<String>) -> Self {
        self.marker_title = title.into();
        self
    }

    /// Sets the size of the rendered image.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

/// A visual pin attached to a map at a given coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    position: GeoPoint,
    title: String,
}

impl Marker {
    /// Creates a new marker with the default title.
    pub fn new(position: impl Into<GeoPoint>) -> Self {
        Self::with_title(position, DEFAULT_MARKER_TITLE)
    }

    /// Creates a new marker with the given title.
    pub fn with_title(position: impl Into<GeoPoint>, title: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            title: title.into(),
        }
    }

    /// Position of the marker.
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    /// Title of the marker.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Moves the marker to the given position.
    pub fn set_position(&mut self, position: impl Into<GeoPoint>) {
        self.position = position.into();
    }

    /// Changes the title of the marker.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

/// Snapshot of everything the imagery service needs to render one map image.
///
/// Scenes are plain values: deriving one from a map does not tie it to the map's lifetime, and
/// equal scenes render to identical images, which makes them the natural cache key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapScene {
    /// Center of the rendered map.
    pub center: GeoPoint,
    /// Zoom level of the rendered map.
    pub zoom: u32,
    /// Imagery the map is rendered with.
    pub imagery: ImageryMode,
    /// Size of the rendered image in pixels.
    pub size: Size,
    /// Positions of the markers placed on the map, in creation order.
    pub markers: Vec<GeoPoint>,
}

/// A map bound to the imagery service, holding the markers created for it.
///
/// Every initializer call creates an independent map; maps do not share state and may be
/// rendered concurrently. The map owns its markers, so they can be inspected and updated after
/// creation.
pub struct PathMap {
    service: Arc<MapService>,
    center: GeoPoint,
    options: MapOptions,
    markers: Vec<Marker>,
}

impl PathMap {
    /// Creates a new map over the given service handle.
    ///
    /// One marker is created per input point, in input order, each titled with the options'
    /// marker title. The point list may be empty.
    pub fn new(
        service: Arc<MapService>,
        center: impl Into<GeoPoint>,
        points: impl IntoIterator<Item = impl Into<GeoPoint>>,
        options: MapOptions,
    ) -> Self {
        let markers = points
            .into_iter()
            .map(|point| Marker::with_title(point, options.marker_title.clone()))
            .collect();

        Self {
            service,
            center: center.into(),
            options,
            markers,
        }
    }

    /// Center of the map.
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Moves the center of the map to the given position.
    pub fn set_center(&mut self, center: impl Into<GeoPoint>) {
        self.center = center.into();
    }

    /// Options the map was created with.
    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Markers placed on the map, in creation order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Mutable access to the markers placed on the map.
    pub fn markers_mut(&mut self) -> &mut [Marker] {
        &mut self.markers
    }

    /// Places another marker on the map.
    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Snapshot of the map state for the imagery service.
    pub fn scene(&self) -> MapScene {
        MapScene {
            center: self.center,
            zoom: self.options.zoom,
            imagery: self.options.imagery,
            size: self.options.size,
            markers: self.markers.iter().map(|marker| marker.position()).collect(),
        }
    }

    /// Requests the rendered map image from the imagery service.
    pub async fn render(&self) -> Result<DecodedImage, PathmapError> {
        let bytes = self.service.load_scene(&self.scene()).await?;
        DecodedImage::decode(&bytes)
    }

    /// Renders the map and saves the image to a PNG file at the given path.
    pub async fn render_to_file(&self, path: impl AsRef<Path>) -> Result<(), PathmapError> {
        self.render().await?.save_png(path)
    }
}

/// Creates a map with the default options: zoom level 15, satellite imagery and one
/// `"path point"` marker per input point.
///
/// Returns [`PathmapError::NotReady`] if [`MapService::initialize`] has not completed yet.
pub fn init_map(
    center: impl Into<GeoPoint>,
    points: impl IntoIterator<Item = impl Into<GeoPoint>>,
) -> Result<PathMap, PathmapError> {
    init_map_with(center, points, MapOptions::default())
}

/// Creates a map with explicit options.
///
/// Returns [`PathmapError::NotReady`] if [`MapService::initialize`] has not completed yet.
pub fn init_map_with(
    center: impl Into<GeoPoint>,
    points: impl IntoIterator<Item = impl Into<GeoPoint>>,
    options: MapOptions,
) -> Result<PathMap, PathmapError> {
    let service = MapService::get()?;
    Ok(PathMap::new(service, center, points, options))
}
