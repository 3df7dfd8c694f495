//! Annotation: categories, marker/color state, click handling, the sketch
//! tool, and slot persistence.
//!
//! The map module owns the region catalog; this module owns everything the
//! user puts on top of it.

use bevy::prelude::*;

pub mod category;
mod clear;
mod click;
mod hit_testing;
mod params;
mod persistence;
mod rendering;
mod sketch;
mod state;

#[cfg(test)]
mod tests;

pub use category::{Category, RegionColor, Side, UnitKind};
pub use clear::ClearCategoryRequest;
pub use params::CameraParams;
pub use sketch::{SketchMode, SketchModeRequest, SketchState};
pub use state::{CurrentCategory, MarkerStore, RegionColors, SketchGate};

use crate::config::ConfigLoaded;

pub struct AnnotatePlugin;

impl Plugin for AnnotatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MarkerStore>()
            .init_resource::<RegionColors>()
            .init_resource::<SketchGate>()
            .init_resource::<CurrentCategory>()
            .init_resource::<SketchState>()
            .init_resource::<persistence::SlotState>()
            .add_message::<ClearCategoryRequest>()
            .add_message::<SketchModeRequest>()
            .add_message::<sketch::SketchLifecycle>()
            .add_systems(
                Startup,
                persistence::load_marker_slot.after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    // Mode switches settle the gate before input dispatch
                    (
                        sketch::apply_mode_requests,
                        sketch::handle_sketch_escape,
                        sketch::apply_sketch_gate,
                    )
                        .chain(),
                    (
                        click::handle_map_click,
                        clear::clear_category_system.run_if(on_message::<ClearCategoryRequest>),
                        sketch::handle_sketch_draw,
                        sketch::handle_sketch_edit,
                        sketch::handle_sketch_delete,
                    ),
                    // Persistence reacts to whatever this frame changed
                    (
                        persistence::mark_slot_dirty,
                        persistence::save_slot_on_change,
                        persistence::poll_slot_saves,
                    )
                        .chain(),
                    (
                        rendering::draw_markers,
                        rendering::draw_sketch_polygons,
                        rendering::draw_sketch_preview,
                    ),
                )
                    .chain(),
            );
    }
}
