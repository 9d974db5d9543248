use avl_dict::{AvlTreeMap, InsertStrategy};

fn main() {
    let mut map = AvlTreeMap::new();
    let mut rotations = 0;
    for key in 1..=10 {
        rotations += map.insert(key, key.to_string(), InsertStrategy::FromMax);
    }
    println!("{}", map.shape());
    println!(
        "size {}, height {}, rebalancing operations {rotations}, balance quality {:.2}",
        map.size(),
        map.height(),
        map.balance_quality()
    );

    if let Some(root) = map.root() {
        let operations = map.delete(root);
        println!("\nafter deleting the root ({operations} rebalancing operations):");
        println!("{}", map.shape());
    }
}
