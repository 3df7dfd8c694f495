//! Immediate-mode drawing of markers and sketch overlays

use bevy::prelude::*;

use crate::constants::{MARKER_GLYPH_RADIUS, SKETCH_VERTEX_RADIUS};
use crate::theme;

use super::category::{Category, UnitKind};
use super::sketch::{SketchMode, SketchPolygon, SketchState};
use super::state::MarkerStore;

/// Draws one glyph per placed marker, colored by side.
///
/// Region-fill categories never produce markers, so only unit categories
/// are matched here.
pub fn draw_markers(mut gizmos: Gizmos, store: Res<MarkerStore>) {
    for marker in store.iter() {
        let Category::Unit(side, kind) = marker.category else {
            continue;
        };
        draw_unit_glyph(&mut gizmos, marker.position.to_world(), kind, side.glyph_color());
    }
}

fn draw_unit_glyph(gizmos: &mut Gizmos, pos: Vec2, kind: UnitKind, color: Color) {
    let r = MARKER_GLYPH_RADIUS;
    match kind {
        UnitKind::Bomb => {
            gizmos.circle_2d(pos, r, color);
        }
        UnitKind::Gun => {
            gizmos.rect_2d(pos, Vec2::new(r, r * 2.0), color);
        }
        UnitKind::Drone => {
            gizmos.line_2d(pos + Vec2::new(-r, -r), pos + Vec2::new(r, r), color);
            gizmos.line_2d(pos + Vec2::new(-r, r), pos + Vec2::new(r, -r), color);
        }
        UnitKind::Ship => {
            gizmos.linestrip_2d(
                [
                    pos + Vec2::new(0.0, r),
                    pos + Vec2::new(r, 0.0),
                    pos + Vec2::new(0.0, -r),
                    pos + Vec2::new(-r, 0.0),
                    pos + Vec2::new(0.0, r),
                ],
                color,
            );
        }
        UnitKind::Fire => {
            gizmos.linestrip_2d(
                [
                    pos + Vec2::new(-r, -r),
                    pos + Vec2::new(r, -r),
                    pos + Vec2::new(0.0, r),
                    pos + Vec2::new(-r, -r),
                ],
                color,
            );
        }
        UnitKind::Missile => {
            gizmos.arrow_2d(pos + Vec2::new(0.0, -r), pos + Vec2::new(0.0, r), color);
        }
        UnitKind::Fpv => {
            gizmos.line_2d(pos + Vec2::new(-r, 0.0), pos + Vec2::new(r, 0.0), color);
            gizmos.line_2d(pos + Vec2::new(0.0, -r), pos + Vec2::new(0.0, r), color);
        }
    }
}

/// Draws finished sketch polygons as closed outlines
pub fn draw_sketch_polygons(
    mut gizmos: Gizmos,
    state: Res<SketchState>,
    polygons: Query<&SketchPolygon>,
) {
    for polygon in polygons.iter() {
        if polygon.points.len() < 2 {
            continue;
        }
        let closed = polygon
            .points
            .iter()
            .copied()
            .chain(std::iter::once(polygon.points[0]));
        gizmos.linestrip_2d(closed, theme::SKETCH_COLOR);

        if state.mode == SketchMode::Edit {
            for point in &polygon.points {
                gizmos.circle_2d(*point, SKETCH_VERTEX_RADIUS, theme::SKETCH_VERTEX_COLOR);
            }
        }
    }
}

/// Draws the in-progress polygon while drawing
pub fn draw_sketch_preview(mut gizmos: Gizmos, state: Res<SketchState>) {
    if state.mode != SketchMode::Draw || state.pending.is_empty() {
        return;
    }

    if state.pending.len() >= 2 {
        gizmos.linestrip_2d(state.pending.iter().copied(), theme::SKETCH_PREVIEW_COLOR);
    }
    for point in &state.pending {
        gizmos.circle_2d(*point, SKETCH_VERTEX_RADIUS * 0.6, theme::SKETCH_PREVIEW_COLOR);
    }
}
