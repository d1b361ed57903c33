//! UV sphere construction
//!
//! Vertex layout: north pole, then `rings - 1` latitude rows of `segments`
//! vertices each (north to south), then the south pole. Poles are shared by
//! their triangle fans, so the resulting surface is closed.

use glam::Vec3;
use std::f32::consts::{PI, TAU};
use thiserror::Error;

/// Smallest longitude count that encloses a volume
pub const MIN_SEGMENTS: u32 = 3;
/// Smallest latitude band count that encloses a volume
pub const MIN_RINGS: u32 = 2;

/// Triangle mesh ready for export
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    /// Unit normals, one per position
    pub normals: Vec<[f32; 3]>,
    /// Triangle list, three indices per face
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    fn add_vertex(&mut self, position: Vec3, normal: Vec3) {
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SphereError {
    #[error("sphere needs at least 3 segments, got {0}")]
    TooFewSegments(u32),

    #[error("sphere needs at least 2 rings, got {0}")]
    TooFewRings(u32),

    #[error("{segments}x{rings} sphere exceeds the u32 vertex index range")]
    TooManyVertices { segments: u32, rings: u32 },
}

/// Number of vertices produced for a resolution
///
/// `None` when the count does not fit in a u32 index.
pub fn vertex_count(segments: u32, rings: u32) -> Option<u32> {
    rings
        .checked_sub(1)?
        .checked_mul(segments)?
        .checked_add(2)
}

/// Number of triangles produced for a resolution
pub fn triangle_count(segments: u32, rings: u32) -> u64 {
    2 * segments as u64 * (rings as u64).saturating_sub(1)
}

/// Generate a UV sphere centred on the origin with smooth normals
///
/// # Arguments
/// * `radius` - Sphere radius (not validated; see below)
/// * `segments` - Number of longitudinal divisions (min 3)
/// * `rings` - Number of latitudinal divisions (min 2)
///
/// # Returns
/// Mesh with `2 + (rings - 1) × segments` vertices and
/// `2 × segments × (rings - 1)` triangles, wound counter-clockwise when seen
/// from outside.
///
/// A negative radius reflects every vertex through the origin. Vertices still
/// lie at `|radius|`, but the normals point toward the centre and the winding
/// faces inward, which is the orientation a viewer placed inside the sphere
/// expects. A zero radius collapses every position onto the origin.
pub fn build_uv_sphere(radius: f32, segments: u32, rings: u32) -> Result<MeshData, SphereError> {
    if segments < MIN_SEGMENTS {
        return Err(SphereError::TooFewSegments(segments));
    }
    if rings < MIN_RINGS {
        return Err(SphereError::TooFewRings(rings));
    }
    let total_vertices =
        vertex_count(segments, rings).ok_or(SphereError::TooManyVertices { segments, rings })?;

    let index_count = usize::try_from(triangle_count(segments, rings) * 3)
        .map_err(|_| SphereError::TooManyVertices { segments, rings })?;
    let mut mesh = MeshData::with_capacity(total_vertices as usize, index_count);

    // The normal stays on the unit direction, which points toward the centre
    // once a negative radius has reflected the position
    let add_point = |mesh: &mut MeshData, unit: Vec3| {
        mesh.add_vertex(unit * radius, unit);
    };

    // Vertices
    add_point(&mut mesh, Vec3::Y);
    for ring in 1..rings {
        let phi = (ring as f32 / rings as f32) * PI; // 0 at north pole, PI at south
        let (sin_phi, cos_phi) = phi.sin_cos();

        for seg in 0..segments {
            let theta = (seg as f32 / segments as f32) * TAU;
            let (sin_theta, cos_theta) = theta.sin_cos();
            add_point(
                &mut mesh,
                Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta),
            );
        }
    }
    add_point(&mut mesh, Vec3::NEG_Y);

    // Indices
    let north = 0;
    let south = total_vertices - 1;
    let row_start = |ring: u32| 1 + (ring - 1) * segments;

    for seg in 0..segments {
        let next_seg = (seg + 1) % segments;
        let first = row_start(1);
        mesh.add_triangle(north, first + next_seg, first + seg);
    }

    for ring in 1..rings - 1 {
        let upper = row_start(ring);
        let lower = row_start(ring + 1);

        for seg in 0..segments {
            let next_seg = (seg + 1) % segments;

            let i0 = upper + seg;
            let i1 = upper + next_seg;
            let i2 = lower + seg;
            let i3 = lower + next_seg;

            // i0/i1 on the higher row, i2/i3 below; CCW from outside
            mesh.add_triangle(i0, i1, i3);
            mesh.add_triangle(i0, i3, i2);
        }
    }

    for seg in 0..segments {
        let next_seg = (seg + 1) % segments;
        let last = row_start(rings - 1);
        mesh.add_triangle(last + seg, last + next_seg, south);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn distance(p: [f32; 3]) -> f32 {
        Vec3::from_array(p).length()
    }

    fn corners(mesh: &MeshData, tri: &[u32]) -> [Vec3; 3] {
        [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(mesh.positions[i as usize]))
    }

    /// Count how many triangles use each directed edge
    fn directed_edges(mesh: &MeshData) -> HashMap<(u32, u32), usize> {
        let mut edges = HashMap::new();
        for tri in mesh.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                *edges.entry((a, b)).or_insert(0) += 1;
            }
        }
        edges
    }

    fn assert_closed(mesh: &MeshData) {
        let edges = directed_edges(mesh);
        for (&(a, b), &count) in &edges {
            assert_eq!(count, 1, "directed edge {a}->{b} used {count} times");
            assert_eq!(
                edges.get(&(b, a)),
                Some(&1),
                "edge {a}->{b} has no opposite half-edge (boundary)"
            );
        }
    }

    #[test]
    fn test_sphere_counts() {
        let mesh = build_uv_sphere(1.0, 16, 8).unwrap();
        assert_eq!(mesh.vertex_count(), 2 + 7 * 16);
        assert_eq!(mesh.triangle_count(), 2 * 16 * 7);
        assert_eq!(mesh.normals.len(), mesh.positions.len());
        assert_eq!(vertex_count(16, 8), Some(mesh.vertex_count() as u32));
        assert_eq!(triangle_count(16, 8), mesh.triangle_count() as u64);
    }

    #[test]
    fn test_default_resolution_counts() {
        let mesh = build_uv_sphere(10.0, 64, 64).unwrap();
        assert_eq!(mesh.vertex_count(), 4034);
        assert_eq!(mesh.triangle_count(), 8064);
    }

    #[test]
    fn test_counts_grow_with_resolution() {
        let coarse = build_uv_sphere(1.0, 8, 8).unwrap();
        let finer_segments = build_uv_sphere(1.0, 9, 8).unwrap();
        let finer_rings = build_uv_sphere(1.0, 8, 9).unwrap();

        assert!(finer_segments.vertex_count() > coarse.vertex_count());
        assert!(finer_segments.triangle_count() > coarse.triangle_count());
        assert!(finer_rings.vertex_count() > coarse.vertex_count());
        assert!(finer_rings.triangle_count() > coarse.triangle_count());
    }

    #[test]
    fn test_deterministic() {
        let a = build_uv_sphere(3.5, 24, 12).unwrap();
        let b = build_uv_sphere(3.5, 24, 12).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sphere_is_closed() {
        assert_closed(&build_uv_sphere(1.0, 3, 2).unwrap());
        assert_closed(&build_uv_sphere(1.0, 8, 8).unwrap());
        assert_closed(&build_uv_sphere(10.0, 64, 64).unwrap());
    }

    #[test]
    fn test_indices_in_range() {
        let mesh = build_uv_sphere(1.0, 12, 6).unwrap();
        let n = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn test_vertices_on_sphere() {
        for radius in [0.5, 1.0, 10.0, 250.0] {
            let mesh = build_uv_sphere(radius, 32, 16).unwrap();
            for p in &mesh.positions {
                let d = distance(*p);
                assert!(
                    (d - radius).abs() <= radius * 1e-5,
                    "vertex {p:?} at distance {d}, expected {radius}"
                );
            }
        }
    }

    #[test]
    fn test_poles() {
        let mesh = build_uv_sphere(2.0, 8, 4).unwrap();
        assert_eq!(mesh.positions[0], [0.0, 2.0, 0.0]);
        assert_eq!(*mesh.positions.last().unwrap(), [0.0, -2.0, 0.0]);
    }

    #[test]
    fn test_normals_are_unit_and_outward() {
        let mesh = build_uv_sphere(4.0, 16, 8).unwrap();
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            let n = Vec3::from_array(*n);
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!(n.dot(Vec3::from_array(*p)) > 0.0);
        }
    }

    #[test]
    fn test_triangles_face_outward() {
        let mesh = build_uv_sphere(1.0, 16, 8).unwrap();
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = corners(&mesh, tri);
            let face_normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(face_normal.dot(centroid) > 0.0, "triangle {tri:?} faces inward");
        }
    }

    #[test]
    fn test_negative_radius_is_inside_out() {
        let mesh = build_uv_sphere(-5.0, 16, 8).unwrap();
        let reference = build_uv_sphere(5.0, 16, 8).unwrap();

        assert_eq!(mesh.indices, reference.indices);
        assert_closed(&mesh);

        for (p, q) in mesh.positions.iter().zip(&reference.positions) {
            assert!((distance(*p) - 5.0).abs() <= 5e-5);
            assert_eq!(*p, q.map(|c| -c));
        }
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            assert!(Vec3::from_array(*n).dot(Vec3::from_array(*p)) < 0.0);
        }
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = corners(&mesh, tri);
            let centroid = (a + b + c) / 3.0;
            assert!((b - a).cross(c - a).dot(centroid) < 0.0);
        }
    }

    #[test]
    fn test_zero_radius_is_degenerate() {
        let mesh = build_uv_sphere(0.0, 8, 4).unwrap();
        assert!(mesh.positions.iter().all(|p| *p == [0.0; 3]));
        for n in &mesh.normals {
            assert!((Vec3::from_array(*n).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_rejects_open_resolutions() {
        assert_eq!(
            build_uv_sphere(1.0, 2, 8).unwrap_err(),
            SphereError::TooFewSegments(2)
        );
        assert_eq!(
            build_uv_sphere(1.0, 8, 1).unwrap_err(),
            SphereError::TooFewRings(1)
        );
        assert_eq!(
            build_uv_sphere(1.0, 0, 0).unwrap_err(),
            SphereError::TooFewSegments(0)
        );
    }

    #[test]
    fn test_rejects_vertex_overflow() {
        assert_eq!(vertex_count(u32::MAX, 3), None);
        assert_eq!(
            build_uv_sphere(1.0, u32::MAX, 3).unwrap_err(),
            SphereError::TooManyVertices {
                segments: u32::MAX,
                rings: 3
            }
        );
    }
}
