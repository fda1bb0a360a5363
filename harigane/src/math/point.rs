use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use super::{
    common::{FloatValueType, ValueType},
    vector::{Vec2, Vec3},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

/// A two-dimensional point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point2<T>
where
    T: ValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
}

/// A three-dimensional point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T>
where
    T: ValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
    /// The z component of the point.
    pub z: T,
}

impl<T> Point2<T>
where
    T: ValueType,
{
    /// Creates a new `Point2`.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        let p = Self { x, y };
        debug_assert!(!p.has_nans());
        p
    }

    /// Checks if any component is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        Vec2::new(self.x, self.y).has_nans()
    }
}

impl<T> Point3<T>
where
    T: ValueType,
{
    /// Creates a new `Point3`.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let p = Self { x, y, z };
        debug_assert!(!p.has_nans());
        p
    }

    /// Creates a new `Point3` filled with zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Checks if any component is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.to_f64().unwrap_or(f64::NAN).is_nan()
            || self.y.to_f64().unwrap_or(f64::NAN).is_nan()
            || self.z.to_f64().unwrap_or(f64::NAN).is_nan()
    }
}

impl<T> From<Vec3<T>> for Point3<T>
where
    T: FloatValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T> Sub for Point3<T>
where
    T: ValueType,
{
    type Output = Vec3<T>;

    fn sub(self, other: Self) -> Vec3<T> {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T> Add<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    type Output = Self;

    fn add(self, other: Vec3<T>) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T> Sub<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    type Output = Self;

    fn sub(self, other: Vec3<T>) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T> AddAssign<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    fn add_assign(&mut self, other: Vec3<T>) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl<T> SubAssign<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    fn sub_assign(&mut self, other: Vec3<T>) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl<T> Mul<T> for Point3<T>
where
    T: ValueType,
{
    type Output = Self;

    fn mul(self, other: T) -> Self {
        Self {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl<T> Div<T> for Point3<T>
where
    T: ValueType,
{
    type Output = Self;

    fn div(self, other: T) -> Self {
        debug_assert!(other != T::zero());

        Self {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl<T> AbsDiffEq for Point3<T>
where
    T: ValueType + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        T::abs_diff_eq(&self.x, &other.x, epsilon)
            && T::abs_diff_eq(&self.y, &other.y, epsilon)
            && T::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl<T> RelativeEq for Point3<T>
where
    T: ValueType + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && T::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}
