//! The region catalog: named boundary polygons loaded from the dataset.

use bevy::prelude::*;
use geo::{Contains, MultiPolygon};

use crate::common::GeoPos;

/// A named boundary polygon from the region dataset. Never mutated after load;
/// only read for containment tests and color lookup.
#[derive(Debug, Clone)]
pub struct Region {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
}

/// Load state of the region catalog.
///
/// A failed load stays in `Loading`: the UI keeps showing the loading
/// indicator and region-coloring clicks stay disabled. There is no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready,
}

/// The static collection of regions, in dataset document order.
#[derive(Resource, Default)]
pub struct RegionCatalog {
    pub regions: Vec<Region>,
    pub state: CatalogState,
}

impl RegionCatalog {
    pub fn is_ready(&self) -> bool {
        self.state == CatalogState::Ready
    }

    /// Find the region containing the given position.
    ///
    /// Regions are tested in catalog order and the first hit wins. The dataset
    /// is assumed non-overlapping, so no tie-break beyond document order is
    /// applied.
    pub fn region_at(&self, pos: GeoPos) -> Option<&Region> {
        let point = pos.to_point();
        self.regions.iter().find(|r| r.geometry.contains(&point))
    }
}

#[cfg(test)]
pub(crate) fn square_region(name: &str, min: (f64, f64), max: (f64, f64)) -> Region {
    use geo::{LineString, Polygon, coord};

    let ring = LineString::new(vec![
        coord! { x: min.0, y: min.1 },
        coord! { x: max.0, y: min.1 },
        coord! { x: max.0, y: max.1 },
        coord! { x: min.0, y: max.1 },
        coord! { x: min.0, y: min.1 },
    ]);
    Region {
        name: name.to_string(),
        geometry: MultiPolygon::new(vec![Polygon::new(ring, vec![])]),
    }
}
