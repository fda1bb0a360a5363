#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use harigane::math::{
        transforms::{look_at, rotation_x, rotation_y, rotation_z, scale, translation},
        Point3, Ray, Transform, Vec3,
    };

    #[test]
    fn identity() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(&t * p, p);
        assert_eq!(&t * v, v);
    }

    #[test]
    fn translation_moves_points_not_vectors() {
        let t = translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            &t * Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 3.0, 4.0)
        );
        assert_eq!(&t * Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn scaling() {
        let t = scale(2.0, 3.0, 4.0);
        assert_eq!(
            &t * Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 3.0, 4.0)
        );
        assert_eq!(
            &t * Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn rotations() {
        let half_pi = std::f32::consts::FRAC_PI_2;
        assert_abs_diff_eq!(
            &rotation_x(half_pi) * Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            &rotation_y(half_pi) * Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            &rotation_z(half_pi) * Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn inverted_roundtrips() {
        let t = &translation(Vec3::new(1.0, 2.0, 3.0)) * &rotation_z(0.3);
        let p = Point3::new(0.5, -0.25, 2.0);
        let back = &t.inverted() * (&t * p);
        assert_abs_diff_eq!(back, p, epsilon = 1e-6);
    }

    #[test]
    fn composition_applies_right_to_left() {
        let t = &translation(Vec3::new(1.0, 0.0, 0.0)) * &scale(2.0, 2.0, 2.0);
        assert_abs_diff_eq!(
            &t * Point3::new(1.0, 1.0, 1.0),
            Point3::new(3.0, 2.0, 2.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn look_at_camera_frame() {
        let pos = Point3::new(1.0, -2.0, 3.0);
        let target = Point3::new(0.0, 0.0, 0.0);
        let t = look_at(pos, target, Vec3::new(0.0, 0.0, 1.0));

        // The camera origin sits at the world position and camera +z is the
        // view direction
        assert_abs_diff_eq!(
            &t.inverted() * Point3::new(0.0, 0.0, 0.0),
            pos,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            &t.inverted() * Vec3::new(0.0, 0.0, 1.0),
            (target - pos).normalized(),
            epsilon = 1e-6
        );

        // The stored analytic inverse really inverts the transform
        let p = Point3::new(0.5, 0.25, -1.0);
        assert_abs_diff_eq!(&t.inverted() * (&t * p), p, epsilon = 1e-6);
    }

    #[test]
    fn ray_transform() {
        let t = translation(Vec3::new(0.0, 0.0, 1.0));
        let r = Ray::new(
            Point3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            f32::INFINITY,
        );
        let rt = &t * r;
        assert_eq!(rt.o, Point3::new(0.0, 0.0, 1.0));
        assert_eq!(rt.d, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(rt.point(2.0), Point3::new(0.0, 0.0, 3.0));
    }
}
