#[cfg(test)]
mod tests {
    use harigane::math::{Point3, Vec3};

    #[test]
    fn new() {
        let p = Point3::new(0.0, 1.0, 2.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 1.0);
        assert_eq!(p.z, 2.0);
        assert_eq!(Point3::<f32>::zeros(), Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn point_difference_is_vector() {
        assert_eq!(
            Point3::new(4, 5, 6) - Point3::new(1, 2, 3),
            Vec3::new(3, 3, 3)
        );
    }

    #[test]
    fn vector_offsets() {
        assert_eq!(
            Point3::new(1, 2, 3) + Vec3::new(4, 5, 6),
            Point3::new(5, 7, 9)
        );
        assert_eq!(
            Point3::new(4, 5, 6) - Vec3::new(1, 2, 3),
            Point3::new(3, 3, 3)
        );

        let mut p = Point3::new(1, 2, 3);
        p += Vec3::new(1, 1, 1);
        assert_eq!(p, Point3::new(2, 3, 4));
        p -= Vec3::new(2, 2, 2);
        assert_eq!(p, Point3::new(0, 1, 2));
    }

    #[test]
    fn scalar_ops() {
        assert_eq!(Point3::new(1, 2, 3) * 2, Point3::new(2, 4, 6));
        assert_eq!(Point3::new(2, 4, 6) / 2, Point3::new(1, 2, 3));
    }

    #[test]
    fn from_vector() {
        assert_eq!(
            Point3::from(Vec3::new(1.0, 2.0, 3.0)),
            Point3::new(1.0, 2.0, 3.0)
        );
    }
}
