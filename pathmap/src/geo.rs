//! Geographic primitives used across the crate.

use serde::{Deserialize, Serialize};

/// 2d point on the surface of the Earth, in degrees.
///
/// Points are often supplied as ordered `[latitude, longitude]` pairs; conversion to the
/// labeled form performs no value transformation. The coordinate ranges (latitude in
/// `[-90, 90]`, longitude in `[-180, 180]`) are the caller's responsibility - out of range
/// values are passed to the imagery service as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Creates a new point from latitude and longitude values (in degrees).
    pub fn latlon(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from(pair: [f64; 2]) -> Self {
        Self::latlon(pair[0], pair[1])
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from(pair: (f64, f64)) -> Self {
        Self::latlon(pair.0, pair.1)
    }
}

/// Creates a new [`GeoPoint`] from latitude and longitude values (in degrees).
///
/// ```
/// use pathmap::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lng:expr) => {
        $crate::GeoPoint::latlon($lat, $lng)
    };
}

/// Size of a rendered map image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    width: u32,
    height: u32,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(1024, 1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_conversion_is_exact() {
        let point = GeoPoint::from([37.7750, -122.4195]);
        assert_eq!(point.lat(), 37.7750);
        assert_eq!(point.lng(), -122.4195);

        let point = GeoPoint::from((-89.999, 179.999));
        assert_eq!(point.lat(), -89.999);
        assert_eq!(point.lng(), 179.999);
    }

    #[test]
    fn out_of_range_values_are_preserved() {
        let point = GeoPoint::from([100.0, -500.0]);
        assert_eq!(point.lat(), 100.0);
        assert_eq!(point.lng(), -500.0);
    }

    #[test]
    fn latlon_macro() {
        let point = latlon!(38.0, 52.0);
        assert_eq!(point, GeoPoint::latlon(38.0, 52.0));
    }

    #[test]
    fn serializes_as_labeled_structure() {
        let json = serde_json::to_string(&latlon!(37.7749, -122.4194)).expect("failed to serialize");
        assert_eq!(json, r#"{"lat":37.7749,"lng":-122.4194}"#);
    }
}
