//! Top toolbar: category palette, per-category clear, sketch tool modes

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::annotate::{
    Category, ClearCategoryRequest, CurrentCategory, SketchMode, SketchModeRequest, SketchState,
};
use crate::map::MapViewSettings;

fn category_label(category: &Category) -> egui::RichText {
    match category {
        Category::Unit(side, kind) => egui::RichText::new(kind.symbol())
            .color(side.ui_color())
            .size(16.0),
        Category::Fill(color) => egui::RichText::new("■").color(color.ui_color()).size(16.0),
    }
}

pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut current: ResMut<CurrentCategory>,
    sketch: Res<SketchState>,
    mut view: ResMut<MapViewSettings>,
    mut clear_requests: MessageWriter<ClearCategoryRequest>,
    mut mode_requests: MessageWriter<SketchModeRequest>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        egui::ScrollArea::horizontal().show(ui, |ui| {
            ui.horizontal(|ui| {
                let mut fills_started = false;
                for category in Category::all() {
                    // The fill palette sits apart from the marker palette
                    if category.is_region_category() && !fills_started {
                        fills_started = true;
                        ui.separator();
                    }
                    let selected = current.category == category;
                    let response = ui
                        .add(egui::Button::new(category_label(&category)).selected(selected))
                        .on_hover_text(category.display_name());
                    if response.clicked() {
                        current.category = category;
                    }

                    let clear = ui
                        .small_button("✕")
                        .on_hover_text(format!("Clear {}", category.display_name()));
                    if clear.clicked() {
                        clear_requests.write(ClearCategoryRequest { category });
                    }

                    ui.add_space(4.0);
                }

                ui.separator();

                for mode in [SketchMode::Draw, SketchMode::Edit, SketchMode::Delete] {
                    let active = sketch.mode == mode;
                    if ui
                        .add(egui::Button::new(mode.display_name()).selected(active))
                        .clicked()
                    {
                        // Clicking the active mode again leaves the tool
                        let next = if active { SketchMode::Idle } else { mode };
                        mode_requests.write(SketchModeRequest { mode: next });
                    }
                }
                if sketch.mode != SketchMode::Idle && ui.button("Done").clicked() {
                    mode_requests.write(SketchModeRequest {
                        mode: SketchMode::Idle,
                    });
                }

                ui.separator();
                ui.checkbox(&mut view.graticule_visible, "Grid");
            });
        });
    });

    Ok(())
}
