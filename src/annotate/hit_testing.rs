//! Hit testing for clicks on markers and sketch polygons.

use bevy::prelude::*;
use uuid::Uuid;

use crate::constants::MARKER_HIT_RADIUS;

use super::state::Marker;

/// Find the marker under a world-space click, if any.
///
/// When glyphs overlap, the closest one wins so clicks remove what the user
/// sees on top visually.
pub fn marker_at(markers: &[Marker], world_pos: Vec2) -> Option<Uuid> {
    markers
        .iter()
        .map(|m| (m.id, m.position.to_world().distance(world_pos)))
        .filter(|(_, dist)| *dist <= MARKER_HIT_RADIUS)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(id, _)| id)
}

/// Index of the vertex nearest to a point, if within the grab radius.
pub fn nearest_vertex(points: &[Vec2], target: Vec2, radius: f32) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance(target)))
        .filter(|(_, dist)| *dist <= radius)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}

/// Whether a point lies inside a sketched polygon (world-space vertices).
pub fn point_in_sketch(points: &[Vec2], target: Vec2) -> bool {
    use geo::{Contains, LineString, Polygon, coord};

    if points.len() < 3 {
        return false;
    }

    let mut ring: Vec<geo::Coord<f64>> = points
        .iter()
        .map(|p| coord! { x: p.x as f64, y: p.y as f64 })
        .collect();
    ring.push(ring[0]);

    let polygon = Polygon::new(LineString::new(ring), vec![]);
    polygon.contains(&geo::Point::new(target.x as f64, target.y as f64))
}
