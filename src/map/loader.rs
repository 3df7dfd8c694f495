//! Region dataset loading.
//!
//! The dataset is read once at startup on the IO task pool and parsed as a
//! GeoJSON FeatureCollection where each feature carries a `name` property.
//! A failed or malformed load is logged and leaves the catalog empty, which
//! keeps the loading indicator up and region coloring disabled.

use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task};
use futures_lite::future;
use geojson::GeoJson;
use std::path::PathBuf;

use crate::config::AppConfig;

use super::region::{CatalogState, Region, RegionCatalog};

/// Component for the dataset load task
#[derive(Component)]
pub struct CatalogLoadTask(Task<CatalogLoadResult>);

/// Result of the async dataset load
pub struct CatalogLoadResult {
    pub path: PathBuf,
    pub regions: Option<Vec<Region>>,
    pub error: Option<String>,
}

/// Parse a GeoJSON FeatureCollection into catalog regions.
///
/// Features without a `name` property or without area geometry are skipped;
/// the caller logs how many survived.
pub fn parse_region_dataset(json: &str) -> Result<Vec<Region>, String> {
    let geojson = json
        .parse::<GeoJson>()
        .map_err(|e| format!("Invalid GeoJSON: {}", e))?;

    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err("Expected a FeatureCollection document".to_string());
    };

    let mut regions = Vec::new();
    for feature in collection.features {
        let Some(name) = feature
            .properties
            .as_ref()
            .and_then(|props| props.get("name"))
            .and_then(|value| value.as_str())
        else {
            continue;
        };

        let Some(geometry) = feature.geometry.as_ref() else {
            continue;
        };

        let geometry = match geo::Geometry::<f64>::try_from(&geometry.value) {
            Ok(geo::Geometry::Polygon(polygon)) => geo::MultiPolygon::new(vec![polygon]),
            Ok(geo::Geometry::MultiPolygon(multi)) => multi,
            _ => continue,
        };

        regions.push(Region {
            name: name.to_string(),
            geometry,
        });
    }

    Ok(regions)
}

/// Starts the async dataset load (file I/O and parsing off the main thread)
pub fn start_catalog_load(mut commands: Commands, config: Res<AppConfig>) {
    let path = config.dataset_path();
    info!("Loading region dataset from {:?}", path);

    let task_pool = IoTaskPool::get();
    let task = task_pool.spawn(async move {
        let json = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                return CatalogLoadResult {
                    path,
                    regions: None,
                    error: Some(format!("Failed to read dataset: {}", e)),
                };
            }
        };

        match parse_region_dataset(&json) {
            Ok(regions) => CatalogLoadResult {
                path,
                regions: Some(regions),
                error: None,
            },
            Err(e) => CatalogLoadResult {
                path,
                regions: None,
                error: Some(e),
            },
        }
    });

    commands.spawn(CatalogLoadTask(task));
}

/// Polls the dataset load task and fills the catalog on completion
pub fn poll_catalog_load(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut CatalogLoadTask)>,
    mut catalog: ResMut<RegionCatalog>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(result) = future::block_on(future::poll_once(&mut task.0)) {
            if let Some(error) = result.error {
                // Catalog stays in Loading; the UI keeps the indicator up
                error!("Region dataset {:?} unavailable: {}", result.path, error);
            } else if let Some(regions) = result.regions {
                info!("Loaded {} regions from {:?}", regions.len(), result.path);
                catalog.regions = regions;
                catalog.state = CatalogState::Ready;
            }

            commands.entity(entity).despawn();
        }
    }
}
