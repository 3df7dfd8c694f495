//! Map click handling: the core annotation contract.
//!
//! A left click on the map (with no sketch operation in progress) does exactly
//! one of: remove the marker under the cursor, color the region under the
//! cursor (region-coloring categories), or place a new marker. All outcomes
//! are total; a miss is a no-op.

use bevy::prelude::*;
use bevy_egui::EguiContexts;
use uuid::Uuid;

use crate::common::GeoPos;
use crate::map::RegionCatalog;

use super::category::{Category, RegionColor};
use super::hit_testing;
use super::params::{CameraParams, is_cursor_over_ui};
use super::state::{CurrentCategory, MarkerStore, RegionColors, SketchGate};

/// What a click at a given position should do to the annotation state.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ClickAction {
    /// A sketch operation owns input
    Ignore,
    /// An existing marker sits under the cursor
    RemoveMarker(Uuid),
    /// A region-coloring category hit a region
    ColorRegion {
        region: String,
        color: RegionColor,
    },
    /// A point-marker category places a marker here
    PlaceMarker,
    /// Region-coloring category with no region hit (or catalog not loaded)
    NoOp,
}

/// Decide what a click does. Pure over the current state.
pub(crate) fn classify_click(
    markers: &MarkerStore,
    catalog: &RegionCatalog,
    gate_active: bool,
    category: Category,
    world_pos: Vec2,
) -> ClickAction {
    if gate_active {
        return ClickAction::Ignore;
    }

    if let Some(id) = hit_testing::marker_at(&markers.markers, world_pos) {
        return ClickAction::RemoveMarker(id);
    }

    if let Some(color) = category.fill_color() {
        // No marker is ever created for a region-coloring category. While the
        // dataset is unavailable these clicks are disabled entirely.
        if !catalog.is_ready() {
            return ClickAction::NoOp;
        }
        return match catalog.region_at(GeoPos::from_world(world_pos)) {
            Some(region) => ClickAction::ColorRegion {
                region: region.name.clone(),
                color,
            },
            None => ClickAction::NoOp,
        };
    }

    ClickAction::PlaceMarker
}

#[allow(clippy::too_many_arguments)]
pub fn handle_map_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    current: Res<CurrentCategory>,
    gate: Res<SketchGate>,
    catalog: Res<RegionCatalog>,
    mut markers: ResMut<MarkerStore>,
    mut colors: ResMut<RegionColors>,
    camera: CameraParams,
    mut contexts: EguiContexts,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };

    match classify_click(&markers, &catalog, gate.active, current.category, world_pos) {
        ClickAction::Ignore | ClickAction::NoOp => {}
        ClickAction::RemoveMarker(id) => {
            markers.remove(id);
            debug!("Removed marker {}", id);
        }
        ClickAction::ColorRegion { region, color } => {
            info!("Colored region {:?} {:?}", region, color);
            colors.assign(&region, color);
        }
        ClickAction::PlaceMarker => {
            let pos = GeoPos::from_world(world_pos);
            let id = markers.place(pos, current.category);
            debug!(
                "Placed {} marker {} at ({:.5}, {:.5})",
                current.category.id(),
                id,
                pos.lat,
                pos.lon
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::category::{Side, UnitKind};
    use crate::map::region::{CatalogState, square_region};

    fn ready_catalog() -> RegionCatalog {
        RegionCatalog {
            regions: vec![square_region("Alpha", (0.0, 0.0), (1.0, 1.0))],
            state: CatalogState::Ready,
        }
    }

    fn world(lat: f64, lon: f64) -> Vec2 {
        GeoPos::new(lat, lon).to_world()
    }

    #[test]
    fn test_gate_suppresses_everything() {
        let markers = MarkerStore::default();
        let catalog = ready_catalog();
        let action = classify_click(
            &markers,
            &catalog,
            true,
            Category::Unit(Side::Blue, UnitKind::Bomb),
            world(0.5, 0.5),
        );
        assert_eq!(action, ClickAction::Ignore);
    }

    #[test]
    fn test_marker_hit_takes_priority_over_placement() {
        let mut markers = MarkerStore::default();
        let id = markers.place(GeoPos::new(0.5, 0.5), Category::Unit(Side::Blue, UnitKind::Bomb));
        let catalog = ready_catalog();

        let action = classify_click(
            &markers,
            &catalog,
            false,
            Category::Unit(Side::Red, UnitKind::Gun),
            world(0.5, 0.5),
        );
        assert_eq!(action, ClickAction::RemoveMarker(id));
    }

    #[test]
    fn test_fill_category_inside_region() {
        let markers = MarkerStore::default();
        let catalog = ready_catalog();

        let action = classify_click(
            &markers,
            &catalog,
            false,
            Category::Fill(RegionColor::Red),
            world(0.5, 0.5),
        );
        assert_eq!(
            action,
            ClickAction::ColorRegion {
                region: "Alpha".to_string(),
                color: RegionColor::Red,
            }
        );
    }

    #[test]
    fn test_fill_category_outside_all_regions() {
        let markers = MarkerStore::default();
        let catalog = ready_catalog();

        let action = classify_click(
            &markers,
            &catalog,
            false,
            Category::Fill(RegionColor::Red),
            world(5.0, 5.0),
        );
        assert_eq!(action, ClickAction::NoOp);
    }

    #[test]
    fn test_fill_category_disabled_while_loading() {
        let markers = MarkerStore::default();
        let catalog = RegionCatalog::default();

        let action = classify_click(
            &markers,
            &catalog,
            false,
            Category::Fill(RegionColor::Green),
            world(0.5, 0.5),
        );
        assert_eq!(action, ClickAction::NoOp);
    }

    #[test]
    fn test_marker_placement_unaffected_by_missing_catalog() {
        let markers = MarkerStore::default();
        let catalog = RegionCatalog::default();

        let action = classify_click(
            &markers,
            &catalog,
            false,
            Category::Unit(Side::Blue, UnitKind::Drone),
            world(0.5, 0.5),
        );
        assert_eq!(action, ClickAction::PlaceMarker);
    }
}
