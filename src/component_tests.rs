//! Component tests for KdTree - construction and query behavior method by method

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::collections::HashSet;

    fn sorted_points<T: Scalar>(tree: &KdTree<T>) -> Vec<Vec<T>> {
        let mut points: Vec<Vec<T>> = tree.points().map(<[T]>::to_vec).collect();
        points.sort_by(|a, b| a.partial_cmp(b).unwrap());
        points
    }

    // ============================================================================
    // CONSTRUCTION TESTS
    // ============================================================================

    #[test]
    fn test_single_point_tree() {
        let tree = KdTree::new(vec![vec![3.0, 4.0, 5.0]], 3, 0.0).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.root().is_root());
        assert!(tree.root().is_leaf());
        assert_eq!(tree.root().axis(), 0);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn test_empty_collection_fails() {
        let result = KdTree::<i32>::new(Vec::<Vec<i32>>::new(), 2, 0);
        assert_eq!(result.unwrap_err(), KdTreeError::EmptyInput);
    }

    #[test]
    fn test_dedup_property() {
        let tree = KdTree::new(vec![vec![1, 1], vec![1, 1], vec![2, 2]], 2, 0).unwrap();
        assert_eq!(tree.len(), 2, "duplicates must be stored once");
        assert_eq!(sorted_points(&tree), vec![vec![1, 1], vec![2, 2]]);
    }

    #[test]
    fn test_dedup_after_padding() {
        // [5] pads to [5, 0], which equals the explicit [5, 0].
        let tree = KdTree::new(vec![vec![5], vec![5, 0], vec![5, 0, 3]], 2, 0).unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_construction_determinism_under_reorder() {
        let points = vec![[3, 1], [9, 4], [2, 8], [7, 7], [5, 2], [1, 6], [8, 3], [4, 9]];
        let mut reversed = points.clone();
        reversed.reverse();

        let a = KdTree::from_points(points, 2).unwrap();
        let b = KdTree::from_points(reversed, 2).unwrap();

        assert_eq!(sorted_points(&a), sorted_points(&b), "same multiset of stored points");
        // Distinct coordinates on every axis, so the structure is identical too.
        let shape = |t: &KdTree<i32>| -> Vec<(Vec<i32>, usize, usize)> {
            t.nodes().map(|n| (n.value().to_vec(), n.axis(), n.depth())).collect()
        };
        assert_eq!(shape(&a), shape(&b));
    }

    #[test]
    fn test_partition_invariant() {
        let points: Vec<[i64; 3]> = (0..200).map(|i| [(i * 73) % 101, (i * 29) % 53, (i * 17) % 41]).collect();
        let tree = KdTree::from_points(points, 3).unwrap();

        for node in tree.nodes() {
            let axis = node.axis();
            let split = node[axis];
            let mut stack: Vec<_> = node.left().into_iter().collect();
            while let Some(n) = stack.pop() {
                assert!(n[axis] <= split, "left subtree must not exceed the split value");
                stack.extend(n.children());
            }
            let mut stack: Vec<_> = node.right().into_iter().collect();
            while let Some(n) = stack.pop() {
                assert!(n[axis] >= split, "right subtree must not fall below the split value");
                stack.extend(n.children());
            }
        }
    }

    #[test]
    fn test_partition_strict_without_ties() {
        // All coordinates distinct per axis: left is strictly less.
        let points: Vec<[i32; 2]> = (0..50).map(|i| [i, (i * 7) % 50]).collect();
        let tree = KdTree::from_points(points, 2).unwrap();
        for node in tree.nodes() {
            let axis = node.axis();
            if let Some(left) = node.left() {
                assert!(left[axis] < node[axis]);
            }
            if let Some(right) = node.right() {
                assert!(right[axis] > node[axis]);
            }
        }
    }

    #[test]
    fn test_every_point_stored_once() {
        let points: Vec<[u16; 2]> = (0..300_u16).map(|i| [i % 17, i / 17]).collect();
        let tree = KdTree::from_points(points.clone(), 2).unwrap();
        assert_eq!(tree.len(), points.len());
        let stored: HashSet<Vec<u16>> = tree.points().map(<[u16]>::to_vec).collect();
        assert_eq!(stored.len(), points.len());
    }

    #[test]
    fn test_balanced_height() {
        let points: Vec<[f64; 2]> = (0..1023).map(|i| [i as f64, (i * 3 % 1023) as f64]).collect();
        let tree = KdTree::from_points(points, 2).unwrap();
        assert_eq!(tree.depth(), 10, "1023 points fill a perfect tree of height 10");
    }

    #[test]
    fn test_builder_configuration() {
        let tree = KdTree::builder(4).fill(9_u8).build([vec![1_u8, 2]]).unwrap();
        assert_eq!(tree.root().value(), &[1, 2, 9, 9]);
    }

    // ============================================================================
    // QUERY TESTS
    // ============================================================================

    #[test]
    fn test_square_query() {
        let tree = KdTree::new(vec![vec![0, 0], vec![10, 0], vec![0, 10], vec![10, 10]], 2, 0).unwrap();
        assert_eq!(tree.nearest_recursive(&[1, 1]).unwrap().point(), &[0, 0]);
        assert_eq!(tree.nearest_iterative(&[1, 1]).unwrap().point(), &[0, 0]);
        assert_eq!(tree.nearest_recursive(&[9, 8]).unwrap().point(), &[10, 10]);
        assert_eq!(tree.nearest_iterative(&[9, 8]).unwrap().point(), &[10, 10]);
    }

    #[test]
    fn test_single_point_any_target() {
        for dims in 1..6 {
            let point: Vec<f64> = (0..dims).map(|d| d as f64 * 1.5).collect();
            let tree = KdTree::from_points(vec![point.clone()], dims).unwrap();
            for target in [vec![-100.0; dims], vec![0.0; dims], vec![1e9; dims]] {
                assert_eq!(tree.nearest_recursive(&target).unwrap().point(), point.as_slice());
                assert_eq!(tree.nearest_iterative(&target).unwrap().point(), point.as_slice());
            }
        }
    }

    #[test]
    fn test_query_dimension_mismatch() {
        let tree = KdTree::from_points([[1, 2, 3], [4, 5, 6]], 3).unwrap();
        let expected = KdTreeError::DimensionMismatch { expected: 3, found: 2 };
        assert_eq!(tree.nearest_recursive(&[1, 2]).unwrap_err(), expected);
        assert_eq!(tree.nearest_iterative(&[1, 2]).unwrap_err(), expected);
    }

    #[test]
    fn test_exact_hit() {
        let points: Vec<[i32; 3]> = (0..30).map(|i| [i, i * i % 31, 30 - i]).collect();
        let tree = KdTree::from_points(points.clone(), 3).unwrap();
        for p in &points {
            assert_eq!(tree.nearest_recursive(p).unwrap().squared_distance(), 0.0);
            assert_eq!(tree.nearest_iterative(p).unwrap().squared_distance(), 0.0);
        }
    }

    #[test]
    fn test_unsigned_coordinates() {
        let tree = KdTree::from_points([[0_u32, 0], [u32::MAX, u32::MAX], [100, 100]], 2).unwrap();
        assert_eq!(tree.nearest_recursive(&[90, 95]).unwrap().point(), &[100, 100]);
        assert_eq!(tree.nearest_iterative(&[1, 0]).unwrap().point(), &[0, 0]);
    }

    #[test]
    fn test_tie_keeps_first_found() {
        // Target equidistant from both points; whichever is found first wins
        // and a later equal candidate never replaces it.
        let tree = KdTree::from_points([[0, 0], [2, 0]], 2).unwrap();
        let mut trace = SearchTrace::new();
        let nearest = tree.nearest_recursive_with(&[1, 0], &mut trace).unwrap();
        let changes = trace
            .events()
            .iter()
            .filter(|e| matches!(e, SearchEvent::BestChanged { .. }))
            .count();
        assert_eq!(changes, 1, "an equal distance must not replace the best");
        assert_eq!(nearest.node().id(), tree.root().id(), "root is found first");
    }

    // ============================================================================
    // OBSERVER TESTS
    // ============================================================================

    #[derive(Default)]
    struct Radii {
        radii: Vec<f64>,
    }

    impl SearchObserver<f64> for Radii {
        fn branch_checked(&mut self, _target: &[f64], _pivot: NodeRef<'_, f64>, best: f64) {
            self.radii.push(best.sqrt());
        }
    }

    #[test]
    fn test_custom_observer_sees_shrinking_radius() {
        let points: Vec<[f64; 2]> = (0..100).map(|i| [(i % 10) as f64, (i / 10) as f64]).collect();
        let tree = KdTree::from_points(points, 2).unwrap();
        let mut radii = Radii::default();
        let _ = tree.nearest_recursive_with(&[4.4, 4.6], &mut radii).unwrap();
        assert!(
            radii.radii.windows(2).all(|w| w[1] <= w[0]),
            "best radius only shrinks during a search"
        );
    }

    #[test]
    fn test_observer_does_not_change_result() {
        let points: Vec<[i32; 2]> = (0..80).map(|i| [(i * 13) % 80, (i * 7) % 80]).collect();
        let tree = KdTree::from_points(points, 2).unwrap();
        let target = [33, 47];
        let plain = tree.nearest_iterative(&target).unwrap();
        let mut counter = VisitCounter::default();
        let observed = tree.nearest_iterative_with(&target, &mut counter).unwrap();
        assert_eq!(plain, observed);
        assert!(counter.visited >= 1);
    }

    #[test]
    fn test_visit_counts_bounded_by_tree_size() {
        let points: Vec<[i32; 2]> = (0..256).map(|i| [(i * 97) % 256, (i * 31) % 256]).collect();
        let tree = KdTree::from_points(points, 2).unwrap();
        for target in [[0, 0], [128, 128], [255, 3], [300, -40]] {
            let mut rec = VisitCounter::default();
            let mut it = VisitCounter::default();
            let _ = tree.nearest_recursive_with(&target, &mut rec).unwrap();
            let _ = tree.nearest_iterative_with(&target, &mut it).unwrap();
            assert!(rec.visited <= tree.len());
            assert!(it.visited <= tree.len());
        }
    }
}
