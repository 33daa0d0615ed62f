//! Build a tree from random 3D integer points and query it both ways.
use kdtree_nn::prelude::*;
use rand::Rng;

fn main() -> Result<(), KdTreeError> {
    let mut rng = rand::rng();
    let points: Vec<Vec<i32>> = (0..10)
        .map(|_| vec![rng.random_range(0..100), rng.random_range(0..100), rng.random_range(0..100)])
        .collect();

    let tree = KdTree::new(points, 3, 0)?;
    println!("Built tree with {} points, height {}", tree.len(), tree.depth());
    for node in tree.nodes() {
        println!("{:indent$}{} (axis {})", "", node, node.axis(), indent = node.depth() * 2);
    }

    let target = [rng.random_range(0..100), rng.random_range(0..100), rng.random_range(0..100)];
    let recursive = tree.nearest_recursive(&target)?;
    let iterative = tree.nearest_iterative(&target)?;
    println!("\nTarget {:?}", target);
    println!("Recursive: {} at distance {:.3}", recursive.node(), recursive.distance());
    println!("Iterative: {} at distance {:.3}", iterative.node(), iterative.distance());
    Ok(())
}
