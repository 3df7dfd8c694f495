//! Egui chrome around the map view

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

mod status;
mod toolbar;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            (toolbar::toolbar_ui, status::status_ui).chain(),
        );
    }
}
