//! Imagery kinds provided by the remote service.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PathmapError;

/// Imagery the map is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageryMode {
    /// Satellite photography.
    #[default]
    Satellite,
    /// Standard road map.
    Roadmap,
    /// Satellite photography with road and label overlays.
    Hybrid,
    /// Physical relief.
    Terrain,
}

impl ImageryMode {
    /// Identifier of the mode in the service request vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageryMode::Satellite => "satellite",
            ImageryMode::Roadmap => "roadmap",
            ImageryMode::Hybrid => "hybrid",
            ImageryMode::Terrain => "terrain",
        }
    }
}

impl Display for ImageryMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageryMode {
    type Err = PathmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "satellite" => Ok(ImageryMode::Satellite),
            "roadmap" => Ok(ImageryMode::Roadmap),
            "hybrid" => Ok(ImageryMode::Hybrid),
            "terrain" => Ok(ImageryMode::Terrain),
            other => Err(PathmapError::Generic(format!(
                "unknown imagery mode: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_satellite() {
        assert_eq!(ImageryMode::default(), ImageryMode::Satellite);
    }

    #[test]
    fn round_trips_through_str() {
        for mode in [
            ImageryMode::Satellite,
            ImageryMode::Roadmap,
            ImageryMode::Hybrid,
            ImageryMode::Terrain,
        ] {
            assert_eq!(mode.as_str().parse::<ImageryMode>().ok(), Some(mode));
        }

        assert!("streetview".parse::<ImageryMode>().is_err());
    }
}
