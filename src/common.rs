//! Common types shared across multiple modules.
//!
//! Geographic position and the equirectangular projection between geographic
//! coordinates and Bevy world space.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::WORLD_UNITS_PER_DEGREE;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPos {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPos {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Project to world space: x = lon, y = lat, scaled.
    pub fn to_world(self) -> Vec2 {
        Vec2::new(
            (self.lon * WORLD_UNITS_PER_DEGREE) as f32,
            (self.lat * WORLD_UNITS_PER_DEGREE) as f32,
        )
    }

    /// Inverse projection from world space.
    pub fn from_world(world: Vec2) -> Self {
        Self {
            lat: world.y as f64 / WORLD_UNITS_PER_DEGREE,
            lon: world.x as f64 / WORLD_UNITS_PER_DEGREE,
        }
    }

    /// The same position as a `geo` point (x = lon, y = lat).
    pub fn to_point(self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_axes() {
        let pos = GeoPos::new(40.0, -100.0);
        let world = pos.to_world();
        assert_eq!(world.x, (-100.0 * WORLD_UNITS_PER_DEGREE) as f32);
        assert_eq!(world.y, (40.0 * WORLD_UNITS_PER_DEGREE) as f32);
    }

    #[test]
    fn test_projection_roundtrip() {
        let pos = GeoPos::new(39.8283, -98.5795);
        let recovered = GeoPos::from_world(pos.to_world());
        assert!((recovered.lat - pos.lat).abs() < 1e-4);
        assert!((recovered.lon - pos.lon).abs() < 1e-4);
    }

    #[test]
    fn test_to_point_axis_order() {
        // geo points are (x, y) = (lon, lat)
        let pt = GeoPos::new(0.5, 120.0).to_point();
        assert_eq!(pt.x(), 120.0);
        assert_eq!(pt.y(), 0.5);
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&GeoPos::new(1.0, 2.0)).unwrap();
        assert!(json.contains("\"lat\""));
        assert!(json.contains("\"lon\""));
    }
}
