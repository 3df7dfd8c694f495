//! Polygon sketch tool and its lifecycle adapter.
//!
//! Sketches are session-only overlay polygons, independent of the region
//! catalog. The tool has three modes (draw, edit, delete) selected from the
//! toolbar. Mode transitions emit [`SketchLifecycle`] messages, and the
//! adapter system is the only place that sets [`SketchGate`]: while any mode
//! is active, map clicks are not annotation input.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::constants::{SKETCH_MIN_VERTICES, SKETCH_VERTEX_RADIUS};

use super::hit_testing;
use super::params::{CameraParams, is_cursor_over_ui};
use super::state::SketchGate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SketchMode {
    #[default]
    Idle,
    Draw,
    Edit,
    Delete,
}

impl SketchMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            SketchMode::Idle => "Off",
            SketchMode::Draw => "Draw",
            SketchMode::Edit => "Edit",
            SketchMode::Delete => "Delete",
        }
    }
}

/// Tool state: the active mode, the in-progress polygon, and the vertex
/// currently being dragged in edit mode.
#[derive(Resource, Default)]
pub struct SketchState {
    pub mode: SketchMode,
    pub pending: Vec<Vec2>,
    dragging: Option<(Entity, usize)>,
}

/// A finished sketch polygon (world-space vertices, implicitly closed)
#[derive(Component, Debug, Clone)]
pub struct SketchPolygon {
    pub points: Vec<Vec2>,
}

/// Message to switch the sketch tool mode (sent by the toolbar)
#[derive(Message)]
pub struct SketchModeRequest {
    pub mode: SketchMode,
}

/// Lifecycle events of the sketch tool. Edit and delete share the edit
/// start/end semantics.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchLifecycle {
    DrawStart,
    DrawEnd,
    EditStart,
    EditEnd,
}

/// Lifecycle message emitted when leaving a mode
pub(crate) fn lifecycle_on_exit(mode: SketchMode) -> Option<SketchLifecycle> {
    match mode {
        SketchMode::Idle => None,
        SketchMode::Draw => Some(SketchLifecycle::DrawEnd),
        SketchMode::Edit | SketchMode::Delete => Some(SketchLifecycle::EditEnd),
    }
}

/// Lifecycle message emitted when entering a mode
pub(crate) fn lifecycle_on_enter(mode: SketchMode) -> Option<SketchLifecycle> {
    match mode {
        SketchMode::Idle => None,
        SketchMode::Draw => Some(SketchLifecycle::DrawStart),
        SketchMode::Edit | SketchMode::Delete => Some(SketchLifecycle::EditStart),
    }
}

/// Applies mode switch requests and emits the lifecycle messages
pub fn apply_mode_requests(
    mut requests: MessageReader<SketchModeRequest>,
    mut state: ResMut<SketchState>,
    mut lifecycle: MessageWriter<SketchLifecycle>,
) {
    for request in requests.read() {
        if request.mode == state.mode {
            continue;
        }

        if let Some(event) = lifecycle_on_exit(state.mode) {
            lifecycle.write(event);
        }
        if let Some(event) = lifecycle_on_enter(request.mode) {
            lifecycle.write(event);
        }

        state.mode = request.mode;
        state.pending.clear();
        state.dragging = None;
        debug!("Sketch mode: {}", state.mode.display_name());
    }
}

/// Escape leaves the active mode and discards any in-progress polygon
pub fn handle_sketch_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<SketchState>,
    mut lifecycle: MessageWriter<SketchLifecycle>,
) {
    if state.mode == SketchMode::Idle || !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    if let Some(event) = lifecycle_on_exit(state.mode) {
        lifecycle.write(event);
    }
    state.mode = SketchMode::Idle;
    state.pending.clear();
    state.dragging = None;
}

/// The lifecycle adapter: the single owner of the sketch gate.
///
/// Any `-Start` asserts the gate, any `-End` clears it. Re-asserting while
/// already set is idempotent; this is best-effort mutual exclusion, not a
/// state machine with illegal-transition detection.
pub fn apply_sketch_gate(
    mut events: MessageReader<SketchLifecycle>,
    mut gate: ResMut<SketchGate>,
) {
    for event in events.read() {
        let active = matches!(
            event,
            SketchLifecycle::DrawStart | SketchLifecycle::EditStart
        );
        if gate.active != active {
            gate.active = active;
        }
    }
}

/// Draw mode: clicks append vertices, Enter finalizes, right click undoes the
/// last vertex. The tool stays armed after finishing a polygon.
pub fn handle_sketch_draw(
    mut commands: Commands,
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<SketchState>,
    camera: CameraParams,
    mut contexts: EguiContexts,
) {
    if state.mode != SketchMode::Draw {
        return;
    }

    if keyboard.just_pressed(KeyCode::Enter) {
        if state.pending.len() >= SKETCH_MIN_VERTICES {
            let points = std::mem::take(&mut state.pending);
            debug!("Sketch polygon finished with {} vertices", points.len());
            commands.spawn(SketchPolygon { points });
        }
        return;
    }

    if mouse_button.just_pressed(MouseButton::Right) {
        state.pending.pop();
        return;
    }

    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    if let Some(world_pos) = camera.cursor_world_pos() {
        state.pending.push(world_pos);
    }
}

/// Edit mode: drag the nearest vertex of any sketch polygon
pub fn handle_sketch_edit(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut state: ResMut<SketchState>,
    mut polygons: Query<(Entity, &mut SketchPolygon)>,
    camera: CameraParams,
    mut contexts: EguiContexts,
) {
    if state.mode != SketchMode::Edit {
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        if is_cursor_over_ui(&mut contexts) {
            return;
        }
        state.dragging = polygons.iter().find_map(|(entity, polygon)| {
            hit_testing::nearest_vertex(&polygon.points, world_pos, SKETCH_VERTEX_RADIUS)
                .map(|index| (entity, index))
        });
    } else if mouse_button.pressed(MouseButton::Left) {
        if let Some((entity, index)) = state.dragging
            && let Ok((_, mut polygon)) = polygons.get_mut(entity)
            && let Some(point) = polygon.points.get_mut(index)
        {
            *point = world_pos;
        }
    } else if mouse_button.just_released(MouseButton::Left) {
        state.dragging = None;
    }
}

/// Delete mode: click inside a sketch polygon to remove it
pub fn handle_sketch_delete(
    mut commands: Commands,
    mouse_button: Res<ButtonInput<MouseButton>>,
    state: Res<SketchState>,
    polygons: Query<(Entity, &SketchPolygon)>,
    camera: CameraParams,
    mut contexts: EguiContexts,
) {
    if state.mode != SketchMode::Delete {
        return;
    }

    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };

    for (entity, polygon) in polygons.iter() {
        if hit_testing::point_in_sketch(&polygon.points, world_pos) {
            commands.entity(entity).despawn();
            debug!("Deleted sketch polygon");
            break;
        }
    }
}
