//! Print the event trace of both searches, as a visualizer would consume it.
use kdtree_nn::prelude::*;

fn print_trace(tree: &KdTree<f64>, trace: &SearchTrace<f64>) {
    for event in trace.events() {
        let node = tree.node(event.node()).map(|n| n.to_string()).unwrap_or_default();
        match event {
            SearchEvent::NodeVisited(_) => println!("  visit   {node}"),
            SearchEvent::BestChanged { .. } => {
                println!("  best    {node} (radius {:.3})", event.radius().unwrap_or(f64::INFINITY));
            }
            SearchEvent::BranchChecked { .. } => {
                println!("  switch  across {node} (radius {:.3})", event.radius().unwrap_or(f64::INFINITY));
            }
            _ => println!("  event   {node}"),
        }
    }
}

fn main() -> Result<(), KdTreeError> {
    let points = vec![
        vec![2.0, 3.0],
        vec![5.0, 4.0],
        vec![9.0, 6.0],
        vec![4.0, 7.0],
        vec![8.0, 1.0],
        vec![7.0, 2.0],
        vec![6.0, 9.0],
        vec![1.0, 8.0],
    ];
    let tree = KdTree::from_points(points, 2)?;
    let target = [8.6, 6.8];

    let mut trace = SearchTrace::new();
    let nearest = tree.nearest_recursive_with(&target, &mut trace)?;
    println!("Recursive search for {:?} -> {}", target, nearest.node());
    print_trace(&tree, &trace);

    trace.clear();
    let nearest = tree.nearest_iterative_with(&target, &mut trace)?;
    println!("Iterative search for {:?} -> {}", target, nearest.node());
    print_trace(&tree, &trace);
    Ok(())
}
