mod mesh;

pub use mesh::{Mesh, MeshHit};

use crate::math::Point3;

/// Read-only access to scene geometry for shader evaluation.
///
/// Injected into nodes instead of reaching into renderer globals so synthetic
/// geometry can be supplied in tests. Lookups must not mutate anything; the
/// scene does not change during a render pass and implementations are shared
/// across worker threads.
pub trait GeometryAccess: Send + Sync {
    /// Returns the three vertices of a static triangle.
    fn triangle_vertices(&self, prim: u32) -> [Point3<f32>; 3];

    /// Returns the three vertices of a deforming triangle at `time`.
    fn motion_triangle_vertices(&self, object: u32, prim: u32, time: f32) -> [Point3<f32>; 3];

    /// Transforms an object-space position into the space shading happens in.
    fn position_transform(&self, object: u32, p: Point3<f32>) -> Point3<f32>;
}
