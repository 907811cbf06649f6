use std::f32::consts::{PI, TAU};

use crate::types::Vertex;

pub const SPHERE_RADIUS: f32 = 0.5;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 16;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 12;
pub const CYLINDER_RADIUS: f32 = 0.5;
pub const CYLINDER_HEIGHT: f32 = 1.0;
pub const CYLINDER_SEGMENTS: u32 = 12;
pub const PYRAMID_RADIUS: f32 = 0.7;
pub const PYRAMID_HEIGHT: f32 = 1.0;
pub const PYRAMID_SIDES: u32 = 4;

/// Shared unit primitives. Objects size them through their scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// Unit cube centred on the origin
    Box,
    Sphere,
    Cylinder,
    /// Four-sided cone
    Pyramid,
    /// Unit square in the XY plane facing +Z
    Plane,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 5] = [
        GeometryKind::Box,
        GeometryKind::Sphere,
        GeometryKind::Cylinder,
        GeometryKind::Pyramid,
        GeometryKind::Plane,
    ];

    /// Map an object `type` to a primitive, falling back to a box
    pub fn from_type_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return GeometryKind::Box;
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "box" => GeometryKind::Box,
            "sphere" => GeometryKind::Sphere,
            "cylinder" => GeometryKind::Cylinder,
            "pyramid" => GeometryKind::Pyramid,
            _ => {
                log::debug!("Unknown object type {:?}, using box", name);
                GeometryKind::Box
            }
        }
    }

    pub fn mesh(self) -> MeshData {
        match self {
            GeometryKind::Box => MeshData::cube(),
            GeometryKind::Sphere => {
                MeshData::sphere(SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS)
            }
            GeometryKind::Cylinder => MeshData::frustum(
                CYLINDER_RADIUS,
                CYLINDER_RADIUS,
                CYLINDER_HEIGHT,
                CYLINDER_SEGMENTS,
            ),
            GeometryKind::Pyramid => {
                MeshData::frustum(0.0, PYRAMID_RADIUS, PYRAMID_HEIGHT, PYRAMID_SIDES)
            }
            GeometryKind::Plane => MeshData::plane(),
        }
    }
}

/// Indexed triangle list on the CPU
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push(&mut self, position: [f32; 3], normal: [f32; 3]) -> u32 {
        self.vertices.push(Vertex::new(position, normal));
        (self.vertices.len() - 1) as u32
    }

    fn quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    /// Unit cube with one quad per face so each face keeps a flat normal
    pub fn cube() -> Self {
        const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            // normal, u axis, v axis
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ];

        let mut mesh = MeshData::default();
        for (n, u, v) in FACES {
            let corner = |su: f32, sv: f32| {
                [
                    0.5 * n[0] + 0.5 * (su * u[0] + sv * v[0]),
                    0.5 * n[1] + 0.5 * (su * u[1] + sv * v[1]),
                    0.5 * n[2] + 0.5 * (su * u[2] + sv * v[2]),
                ]
            };
            let a = mesh.push(corner(-1.0, -1.0), n);
            let b = mesh.push(corner(1.0, -1.0), n);
            let c = mesh.push(corner(1.0, 1.0), n);
            let d = mesh.push(corner(-1.0, 1.0), n);
            mesh.indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
        mesh
    }

    /// UV sphere; poles are single-triangle fans
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let mut mesh = MeshData::default();
        let mut grid = Vec::with_capacity((height_segments + 1) as usize);

        for iy in 0..=height_segments {
            let v = iy as f32 / height_segments as f32;
            let row: Vec<u32> = (0..=width_segments)
                .map(|ix| {
                    let u = ix as f32 / width_segments as f32;
                    let normal = [
                        -(u * TAU).cos() * (v * PI).sin(),
                        (v * PI).cos(),
                        (u * TAU).sin() * (v * PI).sin(),
                    ];
                    let position = normal.map(|c| c * radius);
                    mesh.push(position, normal)
                })
                .collect();
            grid.push(row);
        }

        for iy in 0..height_segments as usize {
            for ix in 0..width_segments as usize {
                let a = grid[iy][ix + 1];
                let b = grid[iy][ix];
                let c = grid[iy + 1][ix];
                let d = grid[iy + 1][ix + 1];
                if iy != 0 {
                    mesh.indices.extend_from_slice(&[a, b, d]);
                }
                if iy != height_segments as usize - 1 {
                    mesh.indices.extend_from_slice(&[b, c, d]);
                }
            }
        }
        mesh
    }

    /// Capped frustum along +Y centred on the origin. A zero top radius makes a cone.
    pub fn frustum(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> Self {
        let mut mesh = MeshData::default();
        let half = height / 2.0;
        let slope = (radius_bottom - radius_top) / height;

        let mut rings = [Vec::new(), Vec::new()];
        for (row, ring) in rings.iter_mut().enumerate() {
            let radius = if row == 0 { radius_top } else { radius_bottom };
            let y = if row == 0 { half } else { -half };
            for x in 0..=segments {
                let theta = x as f32 / segments as f32 * TAU;
                let (sin, cos) = theta.sin_cos();
                let normal = normalize([sin, slope, cos]);
                ring.push(mesh.push([radius * sin, y, radius * cos], normal));
            }
        }

        for x in 0..segments as usize {
            let a = rings[0][x];
            let b = rings[1][x];
            let c = rings[1][x + 1];
            let d = rings[0][x + 1];
            if radius_top > 0.0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            mesh.indices.extend_from_slice(&[b, c, d]);
        }

        if radius_top > 0.0 {
            mesh.cap(radius_top, half, segments, true);
        }
        if radius_bottom > 0.0 {
            mesh.cap(radius_bottom, -half, segments, false);
        }
        mesh
    }

    fn cap(&mut self, radius: f32, y: f32, segments: u32, top: bool) {
        let normal = [0.0, if top { 1.0 } else { -1.0 }, 0.0];
        let center = self.push([0.0, y, 0.0], normal);
        let ring: Vec<u32> = (0..=segments)
            .map(|x| {
                let theta = x as f32 / segments as f32 * TAU;
                let (sin, cos) = theta.sin_cos();
                self.push([radius * sin, y, radius * cos], normal)
            })
            .collect();

        for pair in ring.windows(2) {
            if top {
                self.indices.extend_from_slice(&[pair[0], pair[1], center]);
            } else {
                self.indices.extend_from_slice(&[pair[1], pair[0], center]);
            }
        }
    }

    /// Unit square in the XY plane
    pub fn plane() -> Self {
        let mut mesh = MeshData::default();
        let n = [0.0, 0.0, 1.0];
        let a = mesh.push([-0.5, -0.5, 0.0], n);
        let b = mesh.push([0.5, -0.5, 0.0], n);
        let c = mesh.push([0.5, 0.5, 0.0], n);
        let d = mesh.push([-0.5, 0.5, 0.0], n);
        mesh.quad(a, b, c, d);
        mesh
    }
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 0.0 {
        v.map(|c| c / len)
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(mesh: &MeshData) -> ([f32; 3], [f32; 3]) {
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for v in &mesh.vertices {
            for i in 0..3 {
                min[i] = min[i].min(v.position[i]);
                max[i] = max[i].max(v.position[i]);
            }
        }
        (min, max)
    }

    #[test]
    fn test_unknown_type_is_box() {
        assert_eq!(GeometryKind::from_type_name(Some("torus")), GeometryKind::Box);
        assert_eq!(GeometryKind::from_type_name(None), GeometryKind::Box);
        assert_eq!(GeometryKind::from_type_name(Some(" Sphere ")), GeometryKind::Sphere);
    }

    #[test]
    fn test_plane_is_not_an_object_type() {
        assert_eq!(GeometryKind::from_type_name(Some("plane")), GeometryKind::Box);
    }

    #[test]
    fn test_cube_is_unit() {
        let mesh = MeshData::cube();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(bounds(&mesh), ([-0.5; 3], [0.5; 3]));
    }

    #[test]
    fn test_sphere_counts() {
        let mesh = GeometryKind::Sphere.mesh();
        assert_eq!(mesh.vertices.len(), 17 * 13);
        // 16 triangles at each pole row, two per quad elsewhere
        assert_eq!(mesh.triangle_count(), 16 * 2 + 16 * 10 * 2);
        for v in &mesh.vertices {
            let r = v.position.iter().map(|c| c * c).sum::<f32>().sqrt();
            assert!((r - SPHERE_RADIUS).abs() < 1e-5);
        }
    }

    #[test]
    fn test_cylinder_extent() {
        let mesh = GeometryKind::Cylinder.mesh();
        let (min, max) = bounds(&mesh);
        assert!((min[1] + 0.5).abs() < 1e-5 && (max[1] - 0.5).abs() < 1e-5);
        assert!((max[0] - CYLINDER_RADIUS).abs() < 1e-3);
        // side quads plus both caps
        assert_eq!(mesh.triangle_count(), 12 * 2 + 12 * 2);
    }

    #[test]
    fn test_pyramid_has_four_sides_and_apex() {
        let mesh = GeometryKind::Pyramid.mesh();
        let (min, max) = bounds(&mesh);
        assert!((max[1] - 0.5).abs() < 1e-5);
        assert!((min[1] + 0.5).abs() < 1e-5);
        assert!((max[2] - PYRAMID_RADIUS).abs() < 1e-5);
        // four sides, four base triangles
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn test_indices_in_range() {
        for kind in GeometryKind::ALL {
            let mesh = kind.mesh();
            let count = mesh.vertices.len() as u32;
            assert!(mesh.indices.iter().all(|&i| i < count), "{:?}", kind);
            assert_eq!(mesh.indices.len() % 3, 0);
        }
    }
}
