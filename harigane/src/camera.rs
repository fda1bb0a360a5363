use crate::math::{transforms::look_at, Point2, Point3, Ray, Transform, Vec2, Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Camera_Models.html

/// A simple pinhole camera.
#[derive(Clone)]
pub struct Camera {
    camera_to_world: Transform<f32>,
    tan_half_fov: f32,
    aspect: f32,
    res: Vec2<f32>,
}

#[derive(Copy, Clone)]
pub struct CameraParameters {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vec3<f32>,
    /// Vertical field of view in degrees
    pub fov_y: f32,
}

impl Camera {
    /// Creates a new `Camera` for a film of `res` pixels.
    pub fn new(params: &CameraParameters, res: Vec2<u32>) -> Self {
        let camera_to_world = look_at(params.position, params.target, params.up).inverted();

        let res = Vec2::new(res.x as f32, res.y as f32);
        Self {
            camera_to_world,
            tan_half_fov: (params.fov_y.to_radians() / 2.0).tan(),
            aspect: res.x / res.y,
            res,
        }
    }

    /// Creates a new [Ray] through the film position `p_film`, given in
    /// raster coordinates with y growing downward.
    pub fn ray(&self, p_film: Point2<f32>) -> Ray<f32> {
        let screen_x = (p_film.x / self.res.x) * 2.0 - 1.0;
        let screen_y = 1.0 - (p_film.y / self.res.y) * 2.0;

        // Camera space looks down +z
        let d = Vec3::new(
            screen_x * self.tan_half_fov * self.aspect,
            screen_y * self.tan_half_fov,
            1.0,
        );
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), d.normalized(), f32::INFINITY);

        &self.camera_to_world * ray
    }
}
