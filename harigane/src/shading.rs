use bitflags::bitflags;

use crate::math::{Point3, Vec3};

bitflags! {
    /// The kind of primitive a shading point lies on.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PrimitiveType: u32 {
        /// A plain triangle with static vertices.
        const TRIANGLE = 1 << 0;
        /// A deforming triangle with vertices interpolated by time.
        const MOTION_TRIANGLE = 1 << 1;
        /// A curve segment. Never contributes to edge coverage.
        const CURVE = 1 << 2;

        /// All primitive kinds that participate in edge computation.
        const ALL_TRIANGLE = Self::TRIANGLE.bits() | Self::MOTION_TRIANGLE.bits();
    }
}

bitflags! {
    /// Per-point state flags set up by the renderer.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct ShadingFlags: u32 {
        /// Set when primitive vertices are already in the same space as
        /// [`ShadingPoint::p`]. When unset, fetched vertices are in object
        /// space and must be transformed before any distance math.
        const TRANSFORM_APPLIED = 1 << 0;
    }
}

/// The state of one ray/surface intersection being shaded.
///
/// Constructed once per shading evaluation by the surrounding renderer and
/// valid only for its duration. Nodes never mutate it.
#[derive(Clone, Debug)]
pub struct ShadingPoint {
    /// The hit primitive, or `None` when the point is not on a primitive.
    pub prim: Option<u32>,
    /// Kind of the hit primitive.
    pub prim_type: PrimitiveType,
    /// The object the primitive belongs to.
    pub object: u32,
    /// Time of the hit, used to fetch deforming vertices.
    pub time: f32,
    /// Shading position.
    pub p: Point3<f32>,
    /// Change in `p` per unit screen-space step along the horizontal axis.
    pub dp_dx: Vec3<f32>,
    /// Change in `p` per unit screen-space step along the vertical axis.
    pub dp_dy: Vec3<f32>,
    /// Unit incident direction, from the surface toward the viewer.
    pub i: Vec3<f32>,
    pub flags: ShadingFlags,
}
