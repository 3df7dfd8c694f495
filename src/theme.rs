//! Centralized color theme for the application.
//!
//! All colors used by the map rendering and UI live here.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Map Colors
// ============================================================================

/// Fill for regions without an assigned color (deep blue, mostly transparent)
pub const REGION_DEFAULT_FILL: Color = Color::srgba(0.03, 0.23, 0.56, 0.1);

/// Region boundary outlines
pub const REGION_OUTLINE: Color = Color::srgba(0.5, 0.5, 0.5, 0.8);

/// Semi-transparent grey graticule lines
pub const GRID_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.3);

/// Fill alpha applied to assigned region colors
pub const REGION_FILL_ALPHA: f32 = 0.4;

// ============================================================================
// Marker Colors
// ============================================================================

/// Glyph color for blue-side marker categories
pub const SIDE_BLUE: Color = Color::srgb(0.15, 0.45, 0.9);

/// Glyph color for red-side marker categories
pub const SIDE_RED: Color = Color::srgb(0.85, 0.2, 0.2);

/// egui swatch for blue-side categories
pub const SIDE_BLUE_UI: egui::Color32 = egui::Color32::from_rgb(38, 115, 230);

/// egui swatch for red-side categories
pub const SIDE_RED_UI: egui::Color32 = egui::Color32::from_rgb(217, 51, 51);

// ============================================================================
// Sketch Colors
// ============================================================================

/// Finished sketch polygons (green)
pub const SKETCH_COLOR: Color = Color::srgb(0.17, 0.63, 0.35);

/// In-progress sketch preview
pub const SKETCH_PREVIEW_COLOR: Color = Color::srgba(0.17, 0.63, 0.35, 0.5);

/// Vertex handles while editing a sketch
pub const SKETCH_VERTEX_COLOR: Color = Color::srgb(1.0, 0.7, 0.2);
