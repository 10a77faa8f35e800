use classic_algos::sort::{bubble_sort, merge_sort, quicksort};
use quickcheck_macros::quickcheck;

fn std_sorted(xs: &[i16]) -> Vec<i16> {
    let mut sorted = xs.to_vec();
    sorted.sort();
    sorted
}

#[quickcheck]
fn bubble_sort_matches_std(xs: Vec<i16>) -> bool {
    let mut sorted = xs.clone();
    bubble_sort(&mut sorted);

    sorted == std_sorted(&xs)
}

#[quickcheck]
fn merge_sort_matches_std(xs: Vec<i16>) -> bool {
    merge_sort(&xs) == std_sorted(&xs)
}

#[quickcheck]
fn quicksort_matches_std(xs: Vec<i16>) -> bool {
    let mut sorted = xs.clone();
    quicksort(&mut sorted);

    sorted == std_sorted(&xs)
}

#[quickcheck]
fn merge_sort_is_stable(xs: Vec<u8>) -> bool {
    // Compares by the key only. The second field records the input position,
    // so a stable sort keeps it ascending among equal keys.
    #[derive(Clone, Debug)]
    struct ByKey(u8, usize);
    impl PartialEq for ByKey {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl PartialOrd for ByKey {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    let keyed: Vec<_> = xs
        .iter()
        .enumerate()
        .map(|(i, &key)| ByKey(key % 4, i))
        .collect();
    let sorted = merge_sort(&keyed);

    sorted
        .windows(2)
        .all(|w| w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1))
}
