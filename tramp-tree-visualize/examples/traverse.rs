use tramp_tree::BinaryTree;
use tramp_tree_visualize::visualize::traverse_v;

fn main() -> std::io::Result<()> {
    let mut tree = BinaryTree::new();
    for v in [2, 1, 0, 3, 4] {
        tree.insert(v);
    }

    let (sorted, viz) = traverse_v(&tree, |v| *v);
    assert_eq!(sorted, vec![0, 1, 2, 3, 4]);

    viz.label("Traverse".to_string(), "insert 2, 1, 0, 3, 4".to_string())
        .write("traverse.html")?;

    let chain: BinaryTree<u32> = (0..6).collect();
    let (squares, viz) = traverse_v(&chain, |v| v * v);
    assert_eq!(squares, vec![0, 1, 4, 9, 16, 25]);

    viz.label("Traverse Chain".to_string(), "a right-only chain, squared".to_string())
        .write("traverse_chain.html")?;

    Ok(())
}
