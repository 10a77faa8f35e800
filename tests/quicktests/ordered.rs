use classic_algos::ordered::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

fn tree_of(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn iterates_like_btreeset(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    let mut set: BTreeSet<_> = xs.into_iter().collect();
    for delete in &deletes {
        tree.remove(delete);
        set.remove(delete);
    }

    tree.len() == set.len() && tree.iter().eq(set.iter()) && tree.into_iter().eq(set)
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    let before = tree.to_string();
    for x in &xs {
        tree.insert(*x);
    }

    tree.to_string() == before
}

#[quickcheck]
fn remove_absent_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = tree_of(&xs);
    tree.remove(&x);
    let before: Vec<_> = tree.iter().copied().collect();
    tree.remove(&x);

    tree.iter().copied().eq(before)
}

#[quickcheck]
fn rendering_matches_joined_values(xs: Vec<u16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let expected: String = tree.iter().map(|x| format!("{} ", x)).collect();

    tree.to_string() == expected
}
