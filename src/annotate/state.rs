//! State resources owned by the annotation systems.
//!
//! All mutations of these resources happen inside the systems in this module's
//! parent; the map and UI modules only read them for rendering.

use bevy::prelude::*;
use std::collections::HashMap;
use uuid::Uuid;

use crate::common::GeoPos;

use super::category::{Category, RegionColor, Side, UnitKind};

/// A user-placed point annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: Uuid,
    pub position: GeoPos,
    pub category: Category,
}

impl Marker {
    pub fn new(position: GeoPos, category: Category) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            category,
        }
    }
}

/// The marker collection, insertion order preserved for stable rendering.
#[derive(Resource, Default)]
pub struct MarkerStore {
    pub markers: Vec<Marker>,
}

impl MarkerStore {
    /// Append a new marker and return its generated id.
    pub fn place(&mut self, position: GeoPos, category: Category) -> Uuid {
        let marker = Marker::new(position, category);
        let id = marker.id;
        self.markers.push(marker);
        id
    }

    /// Remove the marker with the given id. Idempotent: removing an absent id
    /// leaves the collection unchanged and returns false.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.markers.len();
        self.markers.retain(|m| m.id != id);
        self.markers.len() != before
    }

    /// Remove every marker of the given category; returns how many went away.
    pub fn clear_category(&mut self, category: Category) -> usize {
        let before = self.markers.len();
        self.markers.retain(|m| m.category != category);
        before - self.markers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Region name → assigned fill color. Session-only, never persisted.
#[derive(Resource, Default)]
pub struct RegionColors {
    assigned: HashMap<String, RegionColor>,
}

impl RegionColors {
    /// Assign a color to a region. A region holds at most one color; a later
    /// assignment silently overwrites.
    pub fn assign(&mut self, region_name: &str, color: RegionColor) {
        self.assigned.insert(region_name.to_string(), color);
    }

    pub fn color_of(&self, region_name: &str) -> Option<RegionColor> {
        self.assigned.get(region_name).copied()
    }

    /// Remove every assignment whose value equals the given color, regardless
    /// of which category originally set it. Returns how many were removed.
    pub fn clear_color(&mut self, color: RegionColor) -> usize {
        let before = self.assigned.len();
        self.assigned.retain(|_, assigned| *assigned != color);
        before - self.assigned.len()
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }
}

/// Transient gate: while a sketch draw/edit operation is active, map clicks
/// are not annotation input. Only the sketch lifecycle adapter sets this.
#[derive(Resource, Default)]
pub struct SketchGate {
    pub active: bool,
}

/// The currently selected annotation category.
#[derive(Resource)]
pub struct CurrentCategory {
    pub category: Category,
}

impl Default for CurrentCategory {
    fn default() -> Self {
        Self {
            category: Category::Unit(Side::Blue, UnitKind::Bomb),
        }
    }
}
