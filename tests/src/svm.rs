#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use harigane::{
        geometry::Mesh,
        math::{Point3, Transform, Vec3},
        shading::{PrimitiveType, ShadingFlags, ShadingPoint},
        svm::{
            encode_node_uchar4, BumpOffset, Stack, Uint4, WireframeEvaluator, WireframeNode,
            SVM_STACK_INVALID,
        },
    };

    fn triangle_evaluator() -> WireframeEvaluator {
        let mesh = Arc::new(Mesh::new(
            &Transform::identity(),
            vec![0, 1, 2],
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.5, 0.866, 0.0),
            ],
        ));
        WireframeEvaluator::new(mesh, false)
    }

    fn shading_point(p: Point3<f32>) -> ShadingPoint {
        ShadingPoint {
            prim: Some(0),
            prim_type: PrimitiveType::TRIANGLE,
            object: 0,
            time: 0.0,
            p,
            dp_dx: Vec3::new(0.01, 0.0, 0.0),
            dp_dy: Vec3::new(0.0, 0.01, 0.0),
            i: Vec3::new(0.0, 0.0, 1.0),
            flags: ShadingFlags::TRANSFORM_APPLIED,
        }
    }

    #[test]
    fn node_reads_decoded_slots() {
        let eval = triangle_evaluator();
        let sd = shading_point(Point3::new(0.5, 0.01, 0.0));

        // Size input in slot 3, factor output in slot 7
        let node = WireframeNode::decode(Uint4 {
            x: 0,
            y: 3,
            z: 7,
            w: encode_node_uchar4(0, BumpOffset::None as u32, 0, 0),
        });

        let mut stack = Stack::new();
        stack.store_float(3, 0.1);
        node.eval(&eval, &mut stack, &sd);
        assert_eq!(stack.load_float(7), 1.0);
    }

    #[test]
    fn size_is_loaded_dynamically() {
        let eval = triangle_evaluator();
        let sd = shading_point(Point3::new(0.5, 0.04, 0.0));

        let node = WireframeNode::decode(Uint4 {
            x: 0,
            y: 0,
            z: 1,
            w: encode_node_uchar4(0, BumpOffset::None as u32, 0, 0),
        });

        let mut stack = Stack::new();
        // Upstream nodes may write a new size between evaluations
        stack.store_float(0, 0.1);
        node.eval(&eval, &mut stack, &sd);
        assert_eq!(stack.load_float(1), 1.0);

        stack.store_float(0, 0.01);
        node.eval(&eval, &mut stack, &sd);
        assert_eq!(stack.load_float(1), 0.0);
    }

    #[test]
    fn unconnected_output_is_not_written() {
        let eval = triangle_evaluator();
        let sd = shading_point(Point3::new(0.5, 0.01, 0.0));

        let node = WireframeNode::decode(Uint4 {
            x: 0,
            y: 0,
            z: SVM_STACK_INVALID,
            w: encode_node_uchar4(1, BumpOffset::None as u32, 0, 0),
        });

        let mut stack = Stack::new();
        stack.store_float(0, 0.1);
        node.eval(&eval, &mut stack, &sd);
        // Every other slot stays at its initial value
        for offset in 1..8 {
            assert_eq!(stack.load_float(offset), 0.0);
        }
    }
}
