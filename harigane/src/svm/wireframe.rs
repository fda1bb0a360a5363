use std::sync::Arc;

use super::{decode_node_uchar4, BumpOffset, Stack, Uint4};
use crate::{
    geometry::GeometryAccess,
    math::{Point3, Vec3},
    shading::{PrimitiveType, ShadingFlags, ShadingPoint},
};

// Wireframe node
//
// Measures how close a shading point is to the edges of its enclosing
// triangle and produces a binary coverage mask. Antialiasing comes from the
// pixel-size mode which derives the edge width from the point's ray
// differentials.

/// Evaluates wireframe coverage against scene geometry.
///
/// Stateless apart from the injected geometry access; safe to call from any
/// number of worker threads at once.
pub struct WireframeEvaluator {
    geometry: Arc<dyn GeometryAccess>,
    curve_support: bool,
}

impl WireframeEvaluator {
    /// Creates a new `WireframeEvaluator`.
    ///
    /// `curve_support` tells the evaluator the scene may contain curve
    /// primitives, in which case primitive kinds are checked per point.
    /// Resolved here once instead of on every evaluation.
    pub fn new(geometry: Arc<dyn GeometryAccess>, curve_support: bool) -> Self {
        Self {
            geometry,
            curve_support,
        }
    }

    /// Returns the wireframe coverage of `sd` in `[0, 1]`.
    ///
    /// `size` is the edge thickness, in world units or in pixels when
    /// `use_pixel_size` is set.
    pub fn evaluate(&self, sd: &ShadingPoint, size: f32, use_pixel_size: bool) -> f32 {
        self.evaluate_at(sd, size, use_pixel_size, sd.p)
    }

    /// Returns the wireframe coverage of `sd` with its position replaced by
    /// `p`, keeping the triangle fetch and pixel width of the original point.
    /// Used for the bump offset evaluations.
    pub fn evaluate_at(
        &self,
        sd: &ShadingPoint,
        size: f32,
        use_pixel_size: bool,
        p: Point3<f32>,
    ) -> f32 {
        debug_assert!(size >= 0.0);

        let prim = match sd.prim {
            Some(prim) => prim,
            None => return 0.0,
        };
        // Points on curves are never on a triangle edge
        if self.curve_support && !sd.prim_type.intersects(PrimitiveType::ALL_TRIANGLE) {
            return 0.0;
        }

        let mut co = if sd.prim_type.contains(PrimitiveType::TRIANGLE) {
            self.geometry.triangle_vertices(prim)
        } else {
            self.geometry
                .motion_triangle_vertices(sd.object, prim, sd.time)
        };

        // Distances only make sense with both points and vertices in the
        // same space
        if !sd.flags.contains(ShadingFlags::TRANSFORM_APPLIED) {
            for v in &mut co {
                *v = self.geometry.position_transform(sd.object, *v);
            }
        }

        let mut pixel_width = 1.0;
        if use_pixel_size {
            // Project the position differentials onto the plane perpendicular
            // to the incident direction for a view-independent measure of how
            // big a pixel is at this point
            let pixel_width_x = (sd.dp_dx - sd.i * sd.dp_dx.dot(sd.i)).len();
            let pixel_width_y = (sd.dp_dy - sd.i * sd.dp_dy.dot(sd.i)).len();
            pixel_width = (pixel_width_x + pixel_width_y) * 0.5;
        }

        // Test against half the width as the neighboring face covers the
        // other half of a shared edge. Squared so the per-edge test needs no
        // square root.
        pixel_width *= 0.5 * size;
        pixel_width *= pixel_width;

        for i in 0..3 {
            let i2 = if i == 0 { 2 } else { i - 1 };
            let dir = p - co[i];
            let edge = co[i] - co[i2];
            let crs = edge.cross(dir);
            // dot(crs, crs) / dot(edge, edge) is the squared distance to the
            // infinite line through the edge; rearranged so a degenerate edge
            // fails the comparison instead of dividing by zero
            if crs.dot(crs) < edge.dot(edge) * pixel_width {
                return 1.0;
            }
        }
        0.0
    }
}

/// A decoded wireframe instruction bound to its stack slots.
#[derive(Copy, Clone, Debug)]
pub struct WireframeNode {
    in_size: u32,
    out_fac: u32,
    use_pixel_size: bool,
    bump_offset: BumpOffset,
}

impl WireframeNode {
    /// Decodes a `WireframeNode` from an instruction payload.
    ///
    /// `node.y` is the size input slot, `node.z` the factor output slot and
    /// `node.w` packs the pixel size flag with the bump offset axis.
    pub fn decode(node: Uint4) -> Self {
        let (use_pixel_size, bump_offset, _, _) = decode_node_uchar4(node.w);
        Self {
            in_size: node.y,
            out_fac: node.z,
            use_pixel_size: use_pixel_size != 0,
            // The compiler only emits the three known axis values
            bump_offset: BumpOffset::from_repr(bump_offset).unwrap_or(BumpOffset::None),
        }
    }

    /// Evaluates this node for `sd`, writing the coverage factor to the
    /// output slot unless the graph left it unconnected.
    pub fn eval(&self, evaluator: &WireframeEvaluator, stack: &mut Stack, sd: &ShadingPoint) {
        let size = stack.load_float(self.in_size);

        let mut f = evaluator.evaluate(sd, size, self.use_pixel_size);

        // Forward difference estimate of how coverage shifts under a bump
        // mapped perturbation along the requested screen axis
        match self.bump_offset {
            BumpOffset::None => {}
            BumpOffset::Dx => {
                f += self.axis_difference(evaluator, sd, size, f, sd.dp_dx);
            }
            BumpOffset::Dy => {
                f += self.axis_difference(evaluator, sd, size, f, sd.dp_dy);
            }
        }

        if Stack::valid(self.out_fac) {
            stack.store_float(self.out_fac, f);
        }
    }

    fn axis_difference(
        &self,
        evaluator: &WireframeEvaluator,
        sd: &ShadingPoint,
        size: f32,
        f: f32,
        dp: Vec3<f32>,
    ) -> f32 {
        let offset_p = sd.p - dp;
        (f - evaluator.evaluate_at(sd, size, self.use_pixel_size, offset_p)) / dp.len()
    }
}
