use num::{
    cast::{FromPrimitive, ToPrimitive},
    traits::{Float, Num},
};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Generic types the math containers can hold
pub trait ValueType:
    Num
    + Mini
    + Maxi
    + PartialOrd
    + ToPrimitive
    + FromPrimitive
    + Copy
    + Add
    + AddAssign
    + Div
    + DivAssign
    + Mul
    + MulAssign
    + Sub
    + SubAssign
{
}

pub trait FloatValueType: ValueType + Float {}

// Impls for all matching types
impl<T> ValueType for T where
    T: Num
        + Mini
        + Maxi
        + PartialOrd
        + ToPrimitive
        + FromPrimitive
        + Copy
        + Add
        + AddAssign
        + Div
        + DivAssign
        + Mul
        + MulAssign
        + Sub
        + SubAssign
{
}
impl<T> FloatValueType for T where T: ValueType + Float {}

/// Trait that maps to number types that implement `fn min(&self, other)`
pub trait Mini {
    /// Returns the smaller of self and other
    fn mini(&self, other: Self) -> Self;
}

/// Trait that maps to number types that implement `fn max(&self, other)`
pub trait Maxi {
    /// Returns the larger of self and other
    fn maxi(&self, other: Self) -> Self;
}

macro_rules! impl_mini_maxi_float {
    ( $( $t:ty ),+ ) => {
        $(
            impl Mini for $t {
                fn mini(&self, other: Self) -> Self {
                    self.min(other)
                }
            }

            impl Maxi for $t {
                fn maxi(&self, other: Self) -> Self {
                    self.max(other)
                }
            }
        )+
    };
}

macro_rules! impl_mini_maxi_int {
    ( $( $t:ty ),+ ) => {
        $(
            impl Mini for $t {
                fn mini(&self, other: Self) -> Self {
                    *std::cmp::Ord::min(self, &other)
                }
            }

            impl Maxi for $t {
                fn maxi(&self, other: Self) -> Self {
                    *std::cmp::Ord::max(self, &other)
                }
            }
        )+
    };
}

impl_mini_maxi_float!(f32, f64);
impl_mini_maxi_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);
