use super::GeometryAccess;
use crate::math::{Point3, Ray, Transform};

/// Stores the geometry data of a triangle mesh.
///
/// Points are kept in object space; [`GeometryAccess::position_transform`]
/// brings them into world space when a shading point asks for it.
pub struct Mesh {
    object_to_world: Transform<f32>,
    /// Triangle vertex indices stored as triplets
    indices: Vec<usize>,
    /// Points in object space
    points: Vec<Point3<f32>>,
    /// Object-space points at the start and end of the shutter interval
    motion_points: Option<[Vec<Point3<f32>>; 2]>,
}

/// A ray intersection against a [`Mesh`].
#[derive(Copy, Clone, Debug)]
pub struct MeshHit {
    /// Index of the hit triangle
    pub prim: u32,
    /// World space distance to the hit
    pub t: f32,
    /// World space hit position
    pub p: Point3<f32>,
}

impl Mesh {
    /// Creates a new `Mesh`.
    /// Expects `indices` as triplets of offsets into `points`.
    pub fn new(
        object_to_world: &Transform<f32>,
        indices: Vec<usize>,
        points: Vec<Point3<f32>>,
    ) -> Self {
        debug_assert!(indices.len() % 3 == 0);

        Self {
            object_to_world: object_to_world.clone(),
            indices,
            points,
            motion_points: None,
        }
    }

    /// Attaches deformation motion to this `Mesh` as point sets at the start
    /// and end of the shutter interval. Both sets must match the rest
    /// positions in length.
    pub fn with_motion(mut self, start: Vec<Point3<f32>>, end: Vec<Point3<f32>>) -> Self {
        debug_assert!(start.len() == self.points.len());
        debug_assert!(end.len() == self.points.len());

        self.motion_points = Some([start, end]);
        self
    }

    /// Returns the number of triangles in this `Mesh`.
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// Checks if this `Mesh` deforms over the shutter interval.
    pub fn has_motion(&self) -> bool {
        self.motion_points.is_some()
    }

    fn vertices_from(&self, points: &[Point3<f32>], prim: u32) -> [Point3<f32>; 3] {
        let first = (prim as usize) * 3;
        [
            points[self.indices[first]],
            points[self.indices[first + 1]],
            points[self.indices[first + 2]],
        ]
    }

    /// Intersects a world space ray with this `Mesh`, returning the closest hit.
    ///
    /// The ray direction is intentionally not re-normalized in object space so
    /// hit distances stay valid in world space.
    pub fn intersect(&self, ray: Ray<f32>) -> Option<MeshHit> {
        let ray_o = &self.object_to_world.inverted() * ray;

        let mut closest: Option<(u32, f32)> = None;
        for prim in 0..self.triangle_count() {
            let [p0, p1, p2] = self.vertices_from(&self.points, prim);
            if let Some(t) = intersect_triangle(&ray_o, p0, p1, p2) {
                if closest.map_or(true, |(_, t_min)| t < t_min) {
                    closest = Some((prim, t));
                }
            }
        }

        closest.map(|(prim, t)| MeshHit {
            prim,
            t,
            p: ray.point(t),
        })
    }
}

// Möller-Trumbore ray/triangle test
// https://en.wikipedia.org/wiki/M%C3%B6ller%E2%80%93Trumbore_intersection_algorithm
fn intersect_triangle(
    ray: &Ray<f32>,
    p0: Point3<f32>,
    p1: Point3<f32>,
    p2: Point3<f32>,
) -> Option<f32> {
    let e1 = p1 - p0;
    let e2 = p2 - p0;

    let pv = ray.d.cross(e2);
    let det = e1.dot(pv);
    // Parallel or degenerate
    if det.abs() < 1e-10 {
        return None;
    }
    let inv_det = 1.0 / det;

    let tv = ray.o - p0;
    let u = tv.dot(pv) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qv = tv.cross(e1);
    let v = ray.d.dot(qv) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = e2.dot(qv) * inv_det;
    if t <= 1e-6 || t >= ray.t_max {
        return None;
    }

    Some(t)
}

impl GeometryAccess for Mesh {
    fn triangle_vertices(&self, prim: u32) -> [Point3<f32>; 3] {
        self.vertices_from(&self.points, prim)
    }

    fn motion_triangle_vertices(&self, _object: u32, prim: u32, time: f32) -> [Point3<f32>; 3] {
        debug_assert!(self.motion_points.is_some());

        match &self.motion_points {
            Some([start, end]) => {
                let s = self.vertices_from(start, prim);
                let e = self.vertices_from(end, prim);
                [
                    s[0] + (e[0] - s[0]) * time,
                    s[1] + (e[1] - s[1]) * time,
                    s[2] + (e[2] - s[2]) * time,
                ]
            }
            // A mesh without motion steps doesn't deform
            None => self.vertices_from(&self.points, prim),
        }
    }

    fn position_transform(&self, _object: u32, p: Point3<f32>) -> Point3<f32> {
        &self.object_to_world * p
    }
}
