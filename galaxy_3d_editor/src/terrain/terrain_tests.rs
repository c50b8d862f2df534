/// Unit tests for Terrain

use super::*;
use crate::camera::Ray;

fn flat(size: f32, resolution: u32) -> Terrain {
    Terrain::new(TerrainDesc {
        name: "flat".to_string(),
        position: Vec3::ZERO,
        size,
        resolution,
        heights: Vec::new(),
    })
    .unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_flat_terrain_defaults() {
    let terrain = flat(10.0, 11);
    assert_eq!(terrain.heights().len(), 121);
    assert_eq!(terrain.cell_size(), 1.0);
    assert_eq!(terrain.height_range(), (0.0, 0.0));
}

#[test]
fn test_invalid_descriptors() {
    let low_resolution = TerrainDesc { resolution: 1, ..TerrainDesc::default() };
    assert!(matches!(Terrain::new(low_resolution), Err(Error::InvalidResource(_))));

    let zero_size = TerrainDesc { size: 0.0, ..TerrainDesc::default() };
    assert!(Terrain::new(zero_size).is_err());

    let wrong_heights = TerrainDesc { resolution: 3, heights: vec![0.0; 4], ..TerrainDesc::default() };
    assert!(Terrain::new(wrong_heights).is_err());
}

// ============================================================================
// Vertices and sampling
// ============================================================================

#[test]
fn test_vertex_access() {
    let mut terrain = flat(10.0, 11);
    assert!(terrain.set_vertex_height(5, 5, 2.5));
    assert_eq!(terrain.vertex_height(5, 5), Some(2.5));
    assert_eq!(terrain.world_vertex_position(5, 5), Some(Vec3::new(5.0, 2.5, 5.0)));
    assert!(!terrain.set_vertex_height(11, 0, 1.0));
    assert_eq!(terrain.vertex_height(0, 11), None);
}

#[test]
fn test_height_at_is_bilinear() {
    let mut heights = vec![0.0; 9];
    heights[1] = 2.0; // vertex (1, 0)
    let terrain = Terrain::new(TerrainDesc {
        name: "bumpy".to_string(),
        position: Vec3::new(0.0, 1.0, 0.0),
        size: 2.0,
        resolution: 3,
        heights,
    })
    .unwrap();

    assert_eq!(terrain.height_at(1.0, 0.0), Some(3.0));
    assert_eq!(terrain.height_at(0.5, 0.0), Some(2.0));
    assert_eq!(terrain.height_at(1.0, 0.5), Some(2.0));
    assert_eq!(terrain.height_at(2.0, 2.0), Some(1.0));
    assert_eq!(terrain.height_at(-0.1, 0.0), None);
}

#[test]
fn test_contains_xz_uses_position() {
    let terrain = Terrain::new(TerrainDesc {
        position: Vec3::new(-5.0, 0.0, 10.0),
        size: 5.0,
        resolution: 6,
        ..TerrainDesc::default()
    })
    .unwrap();

    assert!(terrain.contains_xz(-2.5, 12.0));
    assert!(terrain.contains_xz(0.0, 15.0));
    assert!(!terrain.contains_xz(1.0, 12.0));
    assert!(!terrain.contains_xz(-2.5, 9.0));
}

// ============================================================================
// Ray intersection
// ============================================================================

#[test]
fn test_vertical_ray_hits_flat_terrain() {
    let terrain = flat(10.0, 11);
    let ray = Ray::new(Vec3::new(5.0, 10.0, 5.0), Vec3::NEG_Y);

    let hit = terrain.ray_intersection(&ray).unwrap();
    assert!((hit - Vec3::new(5.0, 0.0, 5.0)).length() < 1e-3);
}

#[test]
fn test_oblique_ray_hits_raised_plateau() {
    let terrain = Terrain::new(TerrainDesc {
        name: "plateau".to_string(),
        position: Vec3::new(0.0, 1.0, 0.0),
        size: 10.0,
        resolution: 11,
        heights: vec![3.0; 121],
    })
    .unwrap();
    let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(1.0, -1.0, 1.0));

    let hit = terrain.ray_intersection(&ray).unwrap();
    assert!((hit.y - 4.0).abs() < 1e-3);
    assert!((hit.x - 6.0).abs() < 1e-2);
    assert!((hit.z - 6.0).abs() < 1e-2);
}

#[test]
fn test_ray_hits_first_bump() {
    let mut terrain = flat(10.0, 11);
    for z in 0..11 {
        terrain.set_vertex_height(3, z, 5.0);
    }
    // Grazing ray along +X at height 1 meets the ridge around x = 2.2.
    let ray = Ray::new(Vec3::new(0.0, 1.0, 5.0), Vec3::X);

    let hit = terrain.ray_intersection(&ray).unwrap();
    assert!(hit.x > 2.0 && hit.x < 3.0);
    assert!((hit.y - 1.0).abs() < 1e-2);
}

#[test]
fn test_ray_misses() {
    let terrain = flat(10.0, 11);

    let outside = Ray::new(Vec3::new(20.0, 10.0, 20.0), Vec3::NEG_Y);
    assert_eq!(terrain.ray_intersection(&outside), None);

    let upward = Ray::new(Vec3::new(5.0, 1.0, 5.0), Vec3::Y);
    assert_eq!(terrain.ray_intersection(&upward), None);

    let parallel = Ray::new(Vec3::new(-5.0, 2.0, 5.0), Vec3::X);
    assert_eq!(terrain.ray_intersection(&parallel), None);

    let degenerate = Ray::new(Vec3::new(5.0, 2.0, 5.0), Vec3::ZERO);
    assert_eq!(terrain.ray_intersection(&degenerate), None);
}
