use classic_algos::search::{binary_search, first_index};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn first_index_matches_position(xs: Vec<u8>, target: u8) -> bool {
    first_index(&target, &xs) == xs.iter().position(|&x| x == target)
}

#[quickcheck]
fn binary_search_agrees_with_contains(xs: Vec<i8>, target: i8) -> bool {
    let mut xs = xs;
    xs.sort();
    xs.dedup();

    match binary_search(&target, &xs) {
        Some(i) => xs[i] == target,
        None => !xs.contains(&target),
    }
}
