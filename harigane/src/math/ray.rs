use super::{common::FloatValueType, point::Point3, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays.html

/// A ray with an origin, a direction and a maximum travel distance.
#[derive(Copy, Clone, Debug)]
pub struct Ray<T>
where
    T: FloatValueType,
{
    /// The origin of the ray.
    pub o: Point3<T>,
    /// The direction of the ray.
    pub d: Vec3<T>,
    /// The maximum travel distance of the ray.
    pub t_max: T,
}

impl<T> Ray<T>
where
    T: FloatValueType,
{
    /// Creates a new `Ray`.
    pub fn new(o: Point3<T>, d: Vec3<T>, t_max: T) -> Self {
        debug_assert!(!o.has_nans());
        debug_assert!(!d.has_nans());

        Self { o, d, t_max }
    }

    /// Returns the point at distance `t` along this `Ray`.
    pub fn point(&self, t: T) -> Point3<T> {
        self.o + self.d * t
    }
}
