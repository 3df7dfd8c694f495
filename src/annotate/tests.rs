//! Scenario tests that drive the click contract and clear semantics across
//! several interactions, the way a session would.

use crate::common::GeoPos;
use crate::map::RegionCatalog;
use crate::map::region::{CatalogState, square_region};

use super::category::{Category, RegionColor, Side, UnitKind};
use super::click::{ClickAction, classify_click};
use super::state::{MarkerStore, RegionColors};

struct Session {
    markers: MarkerStore,
    colors: RegionColors,
    catalog: RegionCatalog,
}

impl Session {
    fn with_regions(regions: Vec<crate::map::Region>) -> Self {
        Self {
            markers: MarkerStore::default(),
            colors: RegionColors::default(),
            catalog: RegionCatalog {
                regions,
                state: CatalogState::Ready,
            },
        }
    }

    /// One click with the given category, applied the way the click handler
    /// applies it.
    fn click(&mut self, category: Category, lat: f64, lon: f64) -> ClickAction {
        let world = GeoPos::new(lat, lon).to_world();
        let action = classify_click(&self.markers, &self.catalog, false, category, world);
        match &action {
            ClickAction::Ignore | ClickAction::NoOp => {}
            ClickAction::RemoveMarker(id) => {
                self.markers.remove(*id);
            }
            ClickAction::ColorRegion { region, color } => {
                self.colors.assign(region, *color);
            }
            ClickAction::PlaceMarker => {
                self.markers.place(GeoPos::new(lat, lon), category);
            }
        }
        action
    }

    /// Clear one category, the way the clear system applies it.
    fn clear(&mut self, category: Category) {
        self.markers.clear_category(category);
        if let Some(color) = category.fill_color() {
            self.colors.clear_color(color);
        }
    }
}

fn bomb(side: Side) -> Category {
    Category::Unit(side, UnitKind::Bomb)
}

#[test]
fn test_coloring_session_against_one_region() {
    let mut session =
        Session::with_regions(vec![square_region("Alpha", (0.0, 0.0), (1.0, 1.0))]);

    // Coloring inside the region assigns, leaves no marker
    let action = session.click(Category::Fill(RegionColor::Red), 0.5, 0.5);
    assert!(matches!(action, ClickAction::ColorRegion { .. }));
    assert_eq!(session.colors.color_of("Alpha"), Some(RegionColor::Red));
    assert!(session.markers.is_empty());

    // Coloring outside every region changes nothing
    let action = session.click(Category::Fill(RegionColor::Red), 5.0, 5.0);
    assert_eq!(action, ClickAction::NoOp);
    assert_eq!(session.colors.len(), 1);

    // A marker category at the same spot places a marker and leaves the
    // assignment alone
    let action = session.click(bomb(Side::Blue), 0.5, 0.5);
    assert_eq!(action, ClickAction::PlaceMarker);
    assert_eq!(session.markers.len(), 1);
    assert_eq!(session.colors.color_of("Alpha"), Some(RegionColor::Red));
}

#[test]
fn test_click_on_marker_removes_it_regardless_of_selection() {
    let mut session = Session::with_regions(vec![]);

    session.click(bomb(Side::Blue), 10.0, 20.0);
    assert_eq!(session.markers.len(), 1);

    // Clicking the same spot with a different category selected removes the
    // existing marker instead of placing a new one
    let action = session.click(Category::Unit(Side::Red, UnitKind::Drone), 10.0, 20.0);
    assert!(matches!(action, ClickAction::RemoveMarker(_)));
    assert!(session.markers.is_empty());
}

#[test]
fn test_marker_count_is_placements_minus_removals() {
    let mut session = Session::with_regions(vec![]);

    // Spread out so no placement lands inside another marker's hit radius
    session.click(bomb(Side::Blue), 10.0, 10.0);
    session.click(bomb(Side::Blue), 20.0, 20.0);
    session.click(bomb(Side::Red), 30.0, 30.0);
    assert_eq!(session.markers.len(), 3);

    session.click(bomb(Side::Red), 20.0, 20.0); // removal
    assert_eq!(session.markers.len(), 2);

    session.click(bomb(Side::Red), 40.0, 40.0);
    assert_eq!(session.markers.len(), 3);
}

#[test]
fn test_clear_marker_category_leaves_others() {
    let mut session = Session::with_regions(vec![]);
    session.click(bomb(Side::Blue), 10.0, 10.0);
    session.click(bomb(Side::Blue), 20.0, 20.0);
    session.click(bomb(Side::Red), 30.0, 30.0);

    session.clear(bomb(Side::Blue));
    assert_eq!(session.markers.len(), 1);
    assert_eq!(session.markers.markers[0].category, bomb(Side::Red));
}

#[test]
fn test_clear_fill_category_clears_by_color_value() {
    let mut session = Session::with_regions(vec![
        square_region("Alpha", (0.0, 0.0), (1.0, 1.0)),
        square_region("Beta", (2.0, 2.0), (3.0, 3.0)),
        square_region("Gamma", (4.0, 4.0), (5.0, 5.0)),
    ]);

    session.click(Category::Fill(RegionColor::Red), 0.5, 0.5);
    session.click(Category::Fill(RegionColor::Red), 2.5, 2.5);
    session.click(Category::Fill(RegionColor::Green), 4.5, 4.5);

    // Clearing the red category removes every red assignment, even though
    // the assignments do not record which category set them
    session.clear(Category::Fill(RegionColor::Red));
    assert_eq!(session.colors.color_of("Alpha"), None);
    assert_eq!(session.colors.color_of("Beta"), None);
    assert_eq!(session.colors.color_of("Gamma"), Some(RegionColor::Green));
}

#[test]
fn test_recolor_overwrites_previous_assignment() {
    let mut session =
        Session::with_regions(vec![square_region("Alpha", (0.0, 0.0), (1.0, 1.0))]);

    session.click(Category::Fill(RegionColor::Red), 0.5, 0.5);
    session.click(Category::Fill(RegionColor::Blue), 0.5, 0.5);
    assert_eq!(session.colors.color_of("Alpha"), Some(RegionColor::Blue));
    assert_eq!(session.colors.len(), 1);
}
