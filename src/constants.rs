//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels (also used for graticule viewport calculations)
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels (also used for graticule viewport calculations)
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// World units per degree of longitude/latitude (equirectangular projection)
pub const WORLD_UNITS_PER_DEGREE: f64 = 10.0;

/// Latitude the camera starts centered on
pub const DEFAULT_CENTER_LAT: f64 = 39.8283;

/// Longitude the camera starts centered on
pub const DEFAULT_CENTER_LON: f64 = -98.5795;

/// Graticule line spacing in degrees
pub const GRATICULE_SPACING_DEG: f32 = 10.0;

/// World-space radius within which a click removes an existing marker
pub const MARKER_HIT_RADIUS: f32 = 6.0;

/// World-space radius of the marker glyphs
pub const MARKER_GLYPH_RADIUS: f32 = 4.0;

/// World-space radius within which a click grabs a sketch vertex for dragging
pub const SKETCH_VERTEX_RADIUS: f32 = 5.0;

/// Minimum vertex count for a finished sketch polygon
pub const SKETCH_MIN_VERTICES: usize = 3;

/// File name of the marker storage slot inside the data directory
pub const MARKER_SLOT_FILE: &str = "markers.json";

/// Fixed relative path of the bundled region dataset
pub const REGION_DATASET_PATH: &str = "assets/regions.geojson";
