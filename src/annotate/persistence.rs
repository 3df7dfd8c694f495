//! Marker slot persistence.
//!
//! The whole marker collection is written as one JSON document to a single
//! slot file. Loading is synchronous at startup; saving happens on a
//! background task whenever the collection changes, last write wins.

use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::common::GeoPos;
use crate::config::AppConfig;

use super::category::Category;
use super::state::{Marker, MarkerStore};

/// On-disk shape of a marker. Position is `[lat, lon]` in degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedMarker {
    pub id: Uuid,
    pub position: [f64; 2],
    pub category: Category,
}

impl From<&Marker> for SavedMarker {
    fn from(marker: &Marker) -> Self {
        Self {
            id: marker.id,
            position: [marker.position.lat, marker.position.lon],
            category: marker.category,
        }
    }
}

impl From<SavedMarker> for Marker {
    fn from(saved: SavedMarker) -> Self {
        Self {
            id: saved.id,
            position: GeoPos::new(saved.position[0], saved.position[1]),
            category: saved.category,
        }
    }
}

/// Bookkeeping for the save slot. `dirty` means the store changed since the
/// last write started; `saving` means a write task is in flight.
#[derive(Resource, Default)]
pub struct SlotState {
    pub dirty: bool,
    pub saving: bool,
}

/// In-flight background write of the marker slot
#[derive(Component)]
pub struct SaveSlotTask {
    pub task: Task<Result<(), String>>,
    pub path: PathBuf,
}

/// Reads the slot file into markers. An absent file is a normal first run;
/// a malformed one starts the session empty rather than refusing to run.
pub fn read_marker_slot(path: &Path) -> Vec<Marker> {
    if !path.exists() {
        debug!("No marker slot at {:?}, starting empty", path);
        return Vec::new();
    }

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to read marker slot {:?}: {}", path, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<SavedMarker>>(&json) {
        Ok(saved) => saved.into_iter().map(Marker::from).collect(),
        Err(e) => {
            warn!("Malformed marker slot {:?}, starting empty: {}", path, e);
            Vec::new()
        }
    }
}

fn serialize_markers(store: &MarkerStore) -> Result<String, serde_json::Error> {
    let saved: Vec<SavedMarker> = store.iter().map(SavedMarker::from).collect();
    serde_json::to_string_pretty(&saved)
}

/// Startup: populate the store from the configured slot
pub fn load_marker_slot(config: Res<AppConfig>, mut store: ResMut<MarkerStore>) {
    let path = config.marker_slot_path();
    let markers = read_marker_slot(&path);
    if !markers.is_empty() {
        info!("Loaded {} markers from {:?}", markers.len(), path);
        store.markers = markers;
    }
}

/// Flags the slot dirty whenever the marker store changes after startup
pub fn mark_slot_dirty(store: Res<MarkerStore>, mut slot: ResMut<SlotState>) {
    if store.is_changed() && !store.is_added() {
        slot.dirty = true;
    }
}

/// Starts a background write when the slot is dirty and no write is in
/// flight. Serialization happens here so the task owns only the string.
pub fn save_slot_on_change(
    mut commands: Commands,
    store: Res<MarkerStore>,
    config: Res<AppConfig>,
    mut slot: ResMut<SlotState>,
) {
    if !slot.dirty || slot.saving {
        return;
    }

    let json = match serialize_markers(&store) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize markers: {}", e);
            slot.dirty = false;
            return;
        }
    };

    let path = config.marker_slot_path();
    slot.dirty = false;
    slot.saving = true;

    let task_path = path.clone();
    let task = IoTaskPool::get().spawn(async move {
        std::fs::write(&task_path, json).map_err(|e| e.to_string())
    });

    commands.spawn(SaveSlotTask { task, path });
}

/// Polls in-flight slot writes. A failed write logs and drops the task; a
/// change made meanwhile is still dirty and triggers the next write.
pub fn poll_slot_saves(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut SaveSlotTask)>,
    mut slot: ResMut<SlotState>,
) {
    for (entity, mut save) in tasks.iter_mut() {
        let Some(result) = futures_lite::future::block_on(futures_lite::future::poll_once(
            &mut save.task,
        )) else {
            continue;
        };

        match result {
            Ok(()) => debug!("Marker slot saved to {:?}", save.path),
            Err(e) => error!("Failed to save marker slot {:?}: {}", save.path, e),
        }
        slot.saving = false;
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::category::{RegionColor, Side, UnitKind};

    fn sample_store() -> MarkerStore {
        let mut store = MarkerStore::default();
        store.place(
            GeoPos::new(48.3794, 31.1656),
            Category::Unit(Side::Blue, UnitKind::Bomb),
        );
        store.place(
            GeoPos::new(50.4501, 30.5234),
            Category::Unit(Side::Red, UnitKind::Fpv),
        );
        store.place(GeoPos::new(0.0, 0.0), Category::Fill(RegionColor::Green));
        store
    }

    #[test]
    fn test_saved_marker_wire_shape() {
        let marker = Marker::new(
            GeoPos::new(48.5, 31.25),
            Category::Unit(Side::Blue, UnitKind::Bomb),
        );
        let saved = SavedMarker::from(&marker);
        let json = serde_json::to_string(&saved).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], marker.id.to_string());
        assert_eq!(value["position"][0], 48.5);
        assert_eq!(value["position"][1], 31.25);
        assert_eq!(value["category"], "bomb_blue");
    }

    #[test]
    fn test_roundtrip_preserves_everything() {
        let store = sample_store();
        let json = serialize_markers(&store).unwrap();

        let saved: Vec<SavedMarker> = serde_json::from_str(&json).unwrap();
        let restored: Vec<Marker> = saved.into_iter().map(Marker::from).collect();

        assert_eq!(restored.len(), store.len());
        for (restored, original) in restored.iter().zip(store.iter()) {
            assert_eq!(restored.id, original.id);
            assert_eq!(restored.position, original.position);
            assert_eq!(restored.category, original.category);
        }
    }

    #[test]
    fn test_empty_store_serializes_to_empty_array() {
        let json = serialize_markers(&MarkerStore::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn test_read_absent_slot_is_empty() {
        let markers = read_marker_slot(Path::new("/nonexistent/terramark-markers.json"));
        assert!(markers.is_empty());
    }

    #[test]
    fn test_read_malformed_slot_is_empty() {
        let dir = std::env::temp_dir();
        let path = dir.join("terramark-test-malformed-slot.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(read_marker_slot(&path).is_empty());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_read_slot_with_unknown_category_is_empty() {
        let dir = std::env::temp_dir();
        let path = dir.join("terramark-test-unknown-category.json");
        let json = format!(
            r#"[{{"id":"{}","position":[1.0,2.0],"category":"laser_blue"}}]"#,
            Uuid::new_v4()
        );
        std::fs::write(&path, json).unwrap();
        assert!(read_marker_slot(&path).is_empty());
        let _ = std::fs::remove_file(&path);
    }
}
