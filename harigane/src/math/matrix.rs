use std::ops::Mul;

use super::common::ValueType;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Utilities/Main_Include_File.html#Matrix4x4

/// A row-major 4x4 matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4<T>
where
    T: ValueType,
{
    pub m: [[T; 4]; 4],
}

impl<T> Matrix4x4<T>
where
    T: ValueType,
{
    /// Creates a new `Matrix4x4` from rows.
    pub fn new(m: [[T; 4]; 4]) -> Self {
        let m = Self { m };
        debug_assert!(!m.has_nans());
        m
    }

    /// Creates a new identity `Matrix4x4`.
    pub fn identity() -> Self {
        let zero = T::zero();
        let one = T::one();
        Self {
            m: [
                [one, zero, zero, zero],
                [zero, one, zero, zero],
                [zero, zero, one, zero],
                [zero, zero, zero, one],
            ],
        }
    }

    /// Checks if any element is NaN.
    pub fn has_nans(&self) -> bool {
        self.m
            .iter()
            .flatten()
            .any(|v| v.to_f64().unwrap_or(f64::NAN).is_nan())
    }

    /// Returns the transpose of this `Matrix4x4`.
    pub fn transposed(&self) -> Self {
        let m = &self.m;
        Self::new([
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        ])
    }
}

impl<'a, 'b, T> Mul<&'b Matrix4x4<T>> for &'a Matrix4x4<T>
where
    T: ValueType,
{
    type Output = Matrix4x4<T>;

    fn mul(self, other: &Matrix4x4<T>) -> Matrix4x4<T> {
        let mut m = [[T::zero(); 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }
        Matrix4x4 { m }
    }
}
