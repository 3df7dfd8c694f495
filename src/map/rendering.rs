//! Map rendering: region fill meshes, boundary outlines, and the graticule.
//!
//! Each region is tessellated once into a filled 2D mesh when the catalog
//! becomes ready; fills are recolored in place as color assignments change.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use geo::TriangulateEarcut;

use crate::annotate::RegionColors;
use crate::common::GeoPos;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, GRATICULE_SPACING_DEG, WORLD_UNITS_PER_DEGREE,
};
use crate::theme;

use super::camera::{CameraZoom, MapCamera};
use super::region::RegionCatalog;

/// Z position of region fill meshes (markers and sketches draw above)
const Z_REGIONS: f32 = 0.0;

/// Presentation toggles for the base map
#[derive(Resource)]
pub struct MapViewSettings {
    pub graticule_visible: bool,
}

impl Default for MapViewSettings {
    fn default() -> Self {
        Self {
            graticule_visible: true,
        }
    }
}

/// Component tagging a region's fill mesh entity.
///
/// `rings` holds the projected exterior rings for outline drawing so they are
/// not re-projected every frame.
#[derive(Component)]
pub struct RegionShape {
    pub name: String,
    pub rings: Vec<Vec<Vec2>>,
}

fn project(coord: geo::Coord<f64>) -> Vec2 {
    GeoPos::new(coord.y, coord.x).to_world()
}

/// Tessellate a region's multipolygon into a single triangle-list mesh
fn tessellate(geometry: &geo::MultiPolygon<f64>) -> Mesh {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for polygon in geometry.iter() {
        let base = positions.len() as u32;
        let triangulation = polygon.earcut_triangles_raw();

        for chunk in triangulation.vertices.chunks_exact(2) {
            let world = GeoPos::new(chunk[1], chunk[0]).to_world();
            positions.push([world.x, world.y, 0.0]);
        }
        indices.extend(
            triangulation
                .triangle_indices
                .iter()
                .map(|&i| base + i as u32),
        );
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Spawns one fill mesh per region once the catalog is loaded
pub fn spawn_region_shapes(
    mut commands: Commands,
    catalog: Res<RegionCatalog>,
    existing: Query<Entity, With<RegionShape>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !catalog.is_changed() || !catalog.is_ready() {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    for region in &catalog.regions {
        let rings: Vec<Vec<Vec2>> = region
            .geometry
            .iter()
            .map(|polygon| polygon.exterior().coords().map(|c| project(*c)).collect())
            .collect();

        commands.spawn((
            Mesh2d(meshes.add(tessellate(&region.geometry))),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(theme::REGION_DEFAULT_FILL))),
            Transform::from_translation(Vec3::new(0.0, 0.0, Z_REGIONS)),
            RegionShape {
                name: region.name.clone(),
                rings,
            },
        ));
    }
}

/// Recolors region fills from the color-assignment table.
///
/// Compares before writing so unchanged materials are not flagged as modified.
pub fn apply_region_colors(
    colors: Res<RegionColors>,
    shapes: Query<(&RegionShape, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (shape, material_handle) in shapes.iter() {
        let target = colors
            .color_of(&shape.name)
            .map(|c| c.fill_color().with_alpha(theme::REGION_FILL_ALPHA))
            .unwrap_or(theme::REGION_DEFAULT_FILL);

        let Some(material) = materials.get(&material_handle.0) else {
            continue;
        };
        if material.color != target
            && let Some(material) = materials.get_mut(&material_handle.0)
        {
            material.color = target;
        }
    }
}

/// Draws region boundary outlines
pub fn draw_region_outlines(mut gizmos: Gizmos, shapes: Query<&RegionShape>) {
    for shape in shapes.iter() {
        for ring in &shape.rings {
            if ring.len() < 2 {
                continue;
            }
            gizmos.linestrip_2d(ring.iter().copied(), theme::REGION_OUTLINE);
        }
    }
}

/// Draws the graticule over the visible viewport
pub fn draw_graticule(
    mut gizmos: Gizmos,
    settings: Res<MapViewSettings>,
    camera_query: Query<(&Transform, &CameraZoom), With<MapCamera>>,
) {
    if !settings.graticule_visible {
        return;
    }

    let Ok((camera_transform, zoom)) = camera_query.single() else {
        return;
    };

    let spacing = GRATICULE_SPACING_DEG * WORLD_UNITS_PER_DEGREE as f32;

    let view_width = DEFAULT_WINDOW_WIDTH * zoom.scale;
    let view_height = DEFAULT_WINDOW_HEIGHT * zoom.scale;

    let camera_pos = camera_transform.translation.truncate();

    let start_x = ((camera_pos.x - view_width / 2.0) / spacing).floor() as i32;
    let end_x = ((camera_pos.x + view_width / 2.0) / spacing).ceil() as i32;
    let start_y = ((camera_pos.y - view_height / 2.0) / spacing).floor() as i32;
    let end_y = ((camera_pos.y + view_height / 2.0) / spacing).ceil() as i32;

    for x in start_x..=end_x {
        let world_x = x as f32 * spacing;
        gizmos.line_2d(
            Vec2::new(world_x, camera_pos.y - view_height),
            Vec2::new(world_x, camera_pos.y + view_height),
            theme::GRID_COLOR,
        );
    }

    for y in start_y..=end_y {
        let world_y = y as f32 * spacing;
        gizmos.line_2d(
            Vec2::new(camera_pos.x - view_width, world_y),
            Vec2::new(camera_pos.x + view_width, world_y),
            theme::GRID_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::region::square_region;

    #[test]
    fn test_tessellate_square_produces_two_triangles() {
        let region = square_region("Alpha", (0.0, 0.0), (1.0, 1.0));
        let mesh = tessellate(&region.geometry);

        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        assert_eq!(indices.len(), 6);
    }

    #[test]
    fn test_tessellate_multipolygon_offsets_indices() {
        let a = square_region("A", (0.0, 0.0), (1.0, 1.0));
        let b = square_region("B", (2.0, 2.0), (3.0, 3.0));
        let multi = geo::MultiPolygon::new(
            a.geometry
                .into_iter()
                .chain(b.geometry.into_iter())
                .collect(),
        );

        let mesh = tessellate(&multi);
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        // Two squares, two triangles each
        assert_eq!(indices.len(), 12);
        // Indices from the second polygon must not collide with the first
        let vertex_count = mesh.count_vertices() as u32;
        assert!(indices.iter().all(|&i| i < vertex_count));
        assert!(indices.iter().any(|&i| i >= vertex_count / 2));
    }

    #[test]
    fn test_project_axis_order() {
        let world = project(geo::coord! { x: -98.0, y: 39.0 });
        assert_eq!(world.x, (-98.0 * WORLD_UNITS_PER_DEGREE) as f32);
        assert_eq!(world.y, (39.0 * WORLD_UNITS_PER_DEGREE) as f32);
    }
}
