//! Per-category "clear all" command.

use bevy::prelude::*;

use super::category::Category;
use super::state::{MarkerStore, RegionColors};

/// Message to remove every annotation made under a category.
#[derive(Message)]
pub struct ClearCategoryRequest {
    pub category: Category,
}

/// Removes all markers of the requested category. For region-coloring
/// categories, also removes every color assignment whose value equals that
/// category's color; assignments only store the color, not the category that
/// set it, so matching is by color value.
pub fn clear_category_system(
    mut events: MessageReader<ClearCategoryRequest>,
    mut markers: ResMut<MarkerStore>,
    mut colors: ResMut<RegionColors>,
) {
    for event in events.read() {
        let removed = markers.clear_category(event.category);

        if let Some(color) = event.category.fill_color() {
            let cleared = colors.clear_color(color);
            info!(
                "Cleared category {}: {} markers, {} region assignments",
                event.category.id(),
                removed,
                cleared
            );
        } else {
            info!("Cleared category {}: {} markers", event.category.id(), removed);
        }
    }
}
