extern crate randomized_bst;

use rand::{Rng, SeedableRng, XorShiftRng};
use randomized_bst::bst::RandomizedBst;

const NUM_OF_KEYS: u32 = 10;
const NUM_OF_SORTED_KEYS: u32 = 10_000_000;

fn shuffled_keys(rng: &mut XorShiftRng) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..NUM_OF_KEYS).collect();
    rng.shuffle(&mut keys);
    keys
}

fn print_inorder(tree: &RandomizedBst<u32>) {
    for key in tree {
        println!("{}", key);
    }
}

fn main() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = RandomizedBst::from_seed([2, 2, 2, 2]);

    for key in shuffled_keys(&mut rng) {
        tree.insert(key);
    }
    println!("\nTesting insert and inorder (should be 0..9):");
    print_inorder(&tree);
    println!("Size (should be 10): {}", tree.len());

    println!("\nTesting select (should be no output):");
    for rank in 0..NUM_OF_KEYS {
        if *tree.select(rank as usize) != rank {
            println!("Select test failed for select({})!", rank);
        }
    }

    println!("\nTesting find (should be 0..9 found, 10 not found):");
    for key in 0..=NUM_OF_KEYS {
        if tree.find(&key).is_some() {
            println!("{} found", key);
        } else {
            println!("{} not found", key);
        }
    }

    println!("\nTesting split");
    let (left, right) = tree.split(&2);
    println!("Contents of left tree after split (should be 0..2):");
    print_inorder(&left);
    println!("Size of left tree (should be 3): {}", left.len());
    println!("Contents of right tree after split (should be 3..9):");
    print_inorder(&right);
    println!("Size of right tree (should be 7): {}", right.len());

    let mut tree = left.join(right);
    println!("\nTesting join");
    println!("Contents of re-joined tree (should be 0..9):");
    print_inorder(&tree);
    println!("Size (should be 10): {}", tree.len());

    println!("\nTesting remove");
    let keys = shuffled_keys(&mut rng);
    for (i, key) in keys.iter().enumerate() {
        tree.remove(key);
        println!("Contents of tree after removing {}:", key);
        print_inorder(&tree);
        if i < 2 {
            println!("Size of tree after this removal (should be 1 less than before): {}", tree.len());
        }
    }
    println!("Size (should be 0): {}", tree.len());

    for key in keys {
        tree.insert_balanced(key);
    }
    println!("\nTesting insert_balanced (should be 0..9):");
    print_inorder(&tree);
    println!("Size (should be 10): {}", tree.len());

    println!(
        "\nInserting {} keys in order; this should be very fast if insert_balanced is working...",
        NUM_OF_SORTED_KEYS,
    );
    for key in 0..NUM_OF_SORTED_KEYS {
        tree.insert_balanced(key);
        if (key + 1) % 1_000_000 == 0 {
            println!("Inserted {} sorted keys", key + 1);
        }
    }
    println!("Done");
    println!("Size (should be {}): {}", NUM_OF_SORTED_KEYS + NUM_OF_KEYS, tree.len());
    println!("Height: {}", tree.height());
}
