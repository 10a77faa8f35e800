//! Finding the index of a value in a slice.
//!
//! [`first_index`] works on any slice in `O(n)`. [`binary_search`] needs the slice to be sorted
//! ascending and takes `O(lg n)`.

use std::cmp::Ordering;
use std::ops::Range;

use log::trace;

/// Returns the index of the first value in `items` equal to `target` by checking every value in
/// order. The slice doesn't need to be sorted.
///
/// # Examples
///
/// ```
/// use classic_algos::search::first_index;
///
/// let recipe = ["nori", "tuna", "soy sauce", "sushi rice"];
///
/// assert_eq!(first_index(&"tuna", &recipe), Some(1));
/// assert_eq!(first_index(&"wasabi", &recipe), None);
/// ```
pub fn first_index<T>(target: &T, items: &[T]) -> Option<usize>
where
    T: PartialEq,
{
    items.iter().position(|item| item == target)
}

/// Returns the index of a value in the ascending `items` equal to `key`. If `items` holds several
/// equal values, any one of their indices may be returned.
///
/// The result is meaningless if `items` isn't sorted.
///
/// # Examples
///
/// ```
/// use classic_algos::search::binary_search;
///
/// let data = [1, 14, 23, 33, 56, 100, 110, 125, 140];
///
/// assert_eq!(binary_search(&23, &data), Some(2));
/// assert_eq!(binary_search(&24, &data), None);
/// ```
pub fn binary_search<T>(key: &T, items: &[T]) -> Option<usize>
where
    T: Ord,
{
    binary_search_in(key, items, 0..items.len())
}

/// Like [`binary_search`] but only looks at the indices in the half-open `range`. The returned
/// index is relative to the start of `items`, not of `range`.
///
/// Every step compares `key` to the middle of the range and keeps only the half that could still
/// hold it. An empty range holds nothing.
///
/// # Panics
///
/// Panics if `range.end` is larger than `items.len()` and the search reaches past the end.
///
/// # Examples
///
/// ```
/// use classic_algos::search::binary_search_in;
///
/// let data = [1, 14, 23, 33, 56, 100, 110, 125, 140];
///
/// assert_eq!(binary_search_in(&110, &data, 4..9), Some(6));
/// assert_eq!(binary_search_in(&23, &data, 4..9), None);
/// assert_eq!(binary_search_in(&23, &data, 2..2), None);
/// ```
pub fn binary_search_in<T>(key: &T, items: &[T], mut range: Range<usize>) -> Option<usize>
where
    T: Ord,
{
    while range.start < range.end {
        trace!(target: "search", "binary search narrowed to {:?}", range);
        let mid = range.start + (range.end - range.start) / 2;
        match items[mid].cmp(key) {
            Ordering::Less => range.start = mid + 1,
            Ordering::Equal => return Some(mid),
            Ordering::Greater => range.end = mid,
        }
    }

    trace!(target: "search", "binary search ran out of values");
    None
}
