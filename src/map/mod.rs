//! The base map: region catalog, camera, and map rendering.
//!
//! - [`region`] - Region type and the catalog resource with containment lookup
//! - [`loader`] - Async GeoJSON dataset loading at startup
//! - [`camera`] - 2D pan/zoom camera over the projected map
//! - [`rendering`] - Region fill meshes, outlines, and the graticule

pub mod camera;
mod loader;
pub mod region;
mod rendering;

pub use camera::MapCamera;
pub use region::{CatalogState, Region, RegionCatalog};
pub use rendering::MapViewSettings;

use bevy::prelude::*;

use crate::config::ConfigLoaded;

pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RegionCatalog>()
            .init_resource::<MapViewSettings>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    loader::start_catalog_load.after(ConfigLoaded),
                ),
            )
            .add_systems(
                Update,
                (
                    loader::poll_catalog_load,
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::apply_camera_zoom,
                    rendering::spawn_region_shapes,
                    rendering::apply_region_colors,
                    rendering::draw_region_outlines,
                    rendering::draw_graticule,
                ),
            );
    }
}
