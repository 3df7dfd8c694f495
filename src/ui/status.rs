//! Bottom status bar: catalog state, marker count, cursor position

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::annotate::{CameraParams, MarkerStore, SketchMode, SketchState};
use crate::map::RegionCatalog;

pub fn status_ui(
    mut contexts: EguiContexts,
    catalog: Res<RegionCatalog>,
    markers: Res<MarkerStore>,
    sketch: Res<SketchState>,
    camera: CameraParams,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if catalog.is_ready() {
                ui.label(format!("{} regions", catalog.regions.len()));
            } else {
                ui.spinner();
                ui.label("Loading region data…");
            }

            ui.separator();
            ui.label(format!("{} markers", markers.len()));

            if sketch.mode != SketchMode::Idle {
                ui.separator();
                ui.label(format!("Sketch: {}", sketch.mode.display_name()));
            }

            if let Some(pos) = camera.cursor_geo_pos() {
                ui.separator();
                ui.label(format!("{:.5}, {:.5}", pos.lat, pos.lon));
            }
        });
    });

    Ok(())
}
