#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use harigane::math::{vec2, vec3, Point3, Vec2, Vec3};

    #[test]
    fn new() {
        let v = Vec2::new(0.0, 1.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 1.0);
        assert_eq!(vec2(0.0, 1.0), v);

        let v = Vec3::new(0.0, 1.0, 2.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 1.0);
        assert_eq!(v.z, 2.0);
        assert_eq!(vec3(0.0, 1.0, 2.0), v);
    }

    #[test]
    fn zeros_ones() {
        assert_eq!(Vec3::zeros(), Vec3::new(0, 0, 0));
        assert_eq!(Vec3::ones(), Vec3::new(1, 1, 1));
    }

    #[test]
    fn dot() {
        assert_eq!(
            Vec3::new(2, 3, 4).dot(Vec3::new(5, 6, 7)),
            2 * 5 + 3 * 6 + 4 * 7
        );
    }

    #[test]
    fn cross() {
        assert_eq!(
            Vec3::new(2.0, 3.0, 4.0).cross(Vec3::new(5.0, 6.0, -7.0)),
            Vec3::new(-45.0, 34.0, -3.0)
        );
        // Anticommutative
        assert_eq!(
            Vec3::new(5.0, 6.0, -7.0).cross(Vec3::new(2.0, 3.0, 4.0)),
            -Vec3::new(-45.0, 34.0, -3.0)
        );
    }

    #[test]
    fn len() {
        assert_eq!(Vec3::new(2, 3, 4).len_sqr(), 2 * 2 + 3 * 3 + 4 * 4);
        assert_abs_diff_eq!(Vec3::new(2.0, 0.0, 0.0).len(), 2.0);
        assert_relative_eq!(
            Vec3::new(1.0f32, 2.0, 3.0).len(),
            (14.0f32).sqrt(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn normalized() {
        assert_abs_diff_eq!(
            Vec3::new(0.0, 3.0, 0.0).normalized(),
            Vec3::new(0.0, 1.0, 0.0)
        );
        assert_relative_eq!(
            Vec3::new(1.0f32, -2.0, 2.0).normalized().len(),
            1.0,
            max_relative = 1e-6
        );
    }

    #[test]
    fn ops() {
        assert_eq!(Vec3::new(1, 2, 3) + Vec3::new(4, 5, 6), Vec3::new(5, 7, 9));
        assert_eq!(Vec3::new(4, 5, 6) - Vec3::new(1, 2, 3), Vec3::new(3, 3, 3));
        assert_eq!(Vec3::new(1, 2, 3) * 2, Vec3::new(2, 4, 6));
        assert_eq!(Vec3::new(2, 4, 6) / 2, Vec3::new(1, 2, 3));
        assert_eq!(-Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, -3.0));

        let mut v = Vec3::new(1, 2, 3);
        v += Vec3::new(1, 1, 1);
        assert_eq!(v, Vec3::new(2, 3, 4));
        v -= Vec3::new(2, 2, 2);
        assert_eq!(v, Vec3::new(0, 1, 2));
        v *= 3;
        assert_eq!(v, Vec3::new(0, 3, 6));
        v /= 3;
        assert_eq!(v, Vec3::new(0, 1, 2));
    }

    #[test]
    fn from_point() {
        assert_eq!(
            Vec3::from(Point3::new(1.0, 2.0, 3.0)),
            Vec3::new(1.0, 2.0, 3.0)
        );
    }
}
