use std::{path::PathBuf, sync::Arc, time::Instant};

use rand::Rng;
use rand_pcg::Pcg32;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    camera::{Camera, CameraParameters},
    geometry::{GeometryAccess, Mesh},
    math::{Point2, Point3, Ray, Vec2, Vec3},
    shading::{PrimitiveType, ShadingFlags, ShadingPoint},
    svm::{encode_node_uchar4, BumpOffset, Stack, Uint4, WireframeEvaluator, WireframeNode},
};

/// Settings for one wireframe mask render.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSettings {
    pub resolution: [u32; 2],
    /// Jittered samples per pixel
    pub samples: u32,
    /// Edge thickness, in world units or pixels depending on `use_pixel_size`
    pub size: f32,
    pub use_pixel_size: bool,
    pub bump_offset: BumpOffset,
    /// Shutter time for deforming meshes, in `[0, 1]`
    pub time: f32,
    pub seed: u64,
    pub camera: CameraSettings,
    pub output: PathBuf,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_y: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            resolution: [640, 480],
            samples: 4,
            size: 1.5,
            use_pixel_size: true,
            bump_offset: BumpOffset::None,
            time: 0.0,
            seed: 0x73B9_642E_74AC_471C,
            camera: CameraSettings {
                position: [0.0, -2.2, 1.6],
                target: [0.0, 0.0, 0.0],
                up: [0.0, 0.0, 1.0],
                fov_y: 45.0,
            },
            output: PathBuf::from("wireframe.png"),
        }
    }
}

impl CameraSettings {
    fn parameters(&self) -> CameraParameters {
        CameraParameters {
            position: Point3::new(self.position[0], self.position[1], self.position[2]),
            target: Point3::new(self.target[0], self.target[1], self.target[2]),
            up: Vec3::new(self.up[0], self.up[1], self.up[2]),
            fov_y: self.fov_y,
        }
    }
}

/// Renders the wireframe coverage of `mesh` into a row-major float mask.
///
/// Coverage is evaluated through the shader stack exactly like a material
/// graph would, so bump offset results may fall outside `[0, 1]`.
pub fn render(mesh: &Arc<Mesh>, settings: &RenderSettings) -> Vec<f32> {
    let [width, height] = settings.resolution;
    let camera = Camera::new(&settings.camera.parameters(), Vec2::new(width, height));

    let geometry: Arc<dyn GeometryAccess> = Arc::<Mesh>::clone(mesh);
    let evaluator = WireframeEvaluator::new(geometry, false);

    // Size input in slot 0, factor output in slot 1
    let node = WireframeNode::decode(Uint4 {
        x: 0,
        y: 0,
        z: 1,
        w: encode_node_uchar4(
            u32::from(settings.use_pixel_size),
            settings.bump_offset as u32,
            0,
            0,
        ),
    });

    let prim_type = if mesh.has_motion() {
        PrimitiveType::MOTION_TRIANGLE
    } else {
        PrimitiveType::TRIANGLE
    };

    log::info!(
        "Wireframe size {} ({}), bump offset {}",
        settings.size,
        if settings.use_pixel_size {
            "pixels"
        } else {
            "world units"
        },
        settings.bump_offset
    );
    let render_start = Instant::now();

    let rows: Vec<Vec<f32>> = (0..height)
        .into_par_iter()
        .map(|y| {
            // Pcg streams are uncorrelated so one stream per row is enough
            let mut rng = Pcg32::new(settings.seed, u64::from(y));
            let mut stack = Stack::new();
            stack.store_float(0, settings.size);

            let mut row = Vec::with_capacity(width as usize);
            for x in 0..width {
                let mut fac = 0.0;
                for _ in 0..settings.samples.max(1) {
                    let (jx, jy) = if settings.samples > 1 {
                        (rng.gen::<f32>(), rng.gen::<f32>())
                    } else {
                        (0.5, 0.5)
                    };
                    let p_film = Point2::new(x as f32 + jx, y as f32 + jy);

                    if let Some(sd) =
                        shading_point(mesh, &camera, p_film, prim_type, settings.time)
                    {
                        node.eval(&evaluator, &mut stack, &sd);
                        fac += stack.load_float(1);
                    }
                }
                row.push(fac / settings.samples.max(1) as f32);
            }
            row
        })
        .collect();

    log::info!(
        "Rendered {}x{} mask in {:.2}s",
        width,
        height,
        render_start.elapsed().as_secs_f32()
    );

    rows.into_iter().flatten().collect()
}

/// Builds the shading point for the closest hit along the camera ray through
/// `p_film`, with differentials taken against the neighboring pixels.
fn shading_point(
    mesh: &Mesh,
    camera: &Camera,
    p_film: Point2<f32>,
    prim_type: PrimitiveType,
    time: f32,
) -> Option<ShadingPoint> {
    let ray = camera.ray(p_film);
    let hit = mesh.intersect(ray)?;

    // Differentials against the world space plane of the hit triangle
    let n = {
        let co = mesh.triangle_vertices(hit.prim);
        let c0 = mesh.position_transform(0, co[0]);
        let c1 = mesh.position_transform(0, co[1]);
        let c2 = mesh.position_transform(0, co[2]);
        let n = (c1 - c0).cross(c2 - c0);
        if n.len_sqr() == 0.0 {
            return None;
        }
        n.normalized()
    };
    let ray_x = camera.ray(Point2::new(p_film.x + 1.0, p_film.y));
    let ray_y = camera.ray(Point2::new(p_film.x, p_film.y + 1.0));
    let dp_dx = plane_point(&ray_x, hit.p, n).map_or(Vec3::zeros(), |p| p - hit.p);
    let dp_dy = plane_point(&ray_y, hit.p, n).map_or(Vec3::zeros(), |p| p - hit.p);

    Some(ShadingPoint {
        prim: Some(hit.prim),
        prim_type,
        object: 0,
        time,
        p: hit.p,
        dp_dx,
        dp_dy,
        i: -ray.d,
        // Mesh vertices are fetched in object space
        flags: ShadingFlags::empty(),
    })
}

fn plane_point(ray: &Ray<f32>, p: Point3<f32>, n: Vec3<f32>) -> Option<Point3<f32>> {
    let denom = ray.d.dot(n);
    if denom.abs() < 1e-8 {
        return None;
    }
    Some(ray.point((p - ray.o).dot(n) / denom))
}
