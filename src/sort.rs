//! Classic comparison sorts over slices. Every sort orders its input ascending.
//!
//! | Sort           | In place | Stable | Best         | Worst        |
//! |----------------|----------|--------|--------------|--------------|
//! | [`bubble_sort`]| yes      | yes    | `O(n)`       | `O(n^2)`     |
//! | [`merge_sort`] | no       | yes    | `O(n lg n)`  | `O(n lg n)`  |
//! | [`quicksort`]  | yes      | no     | `O(n lg n)`  | `O(n^2)`     |

use std::ops::RangeInclusive;

use log::trace;

/// Sorts `items` in place by repeatedly swapping adjacent values that are out of order.
///
/// Every pass moves the largest unsorted value to the end of the unsorted prefix so each pass
/// looks at one fewer value than the last. A pass that swaps nothing means the slice is sorted
/// and ends the sort early, which makes sorted input `O(n)`. Equal values are never swapped so the
/// sort is stable.
///
/// # Examples
///
/// ```
/// use classic_algos::sort::bubble_sort;
///
/// let mut count_backwards = [10, 8, 3, 1, -5];
/// bubble_sort(&mut count_backwards);
///
/// assert_eq!(count_backwards, [-5, 1, 3, 8, 10]);
/// ```
pub fn bubble_sort<T>(items: &mut [T])
where
    T: PartialOrd,
{
    let mut unsorted = items.len();
    while unsorted > 1 {
        let mut swapped = false;
        for i in 1..unsorted {
            if items[i] < items[i - 1] {
                items.swap(i - 1, i);
                swapped = true;
            }
        }

        if !swapped {
            trace!(target: "sort", "bubble sort pass made no swaps, stopping early");
            break;
        }
        unsorted -= 1;
        trace!(target: "sort", "bubble sort pass done, {} values left unsorted", unsorted);
    }
}

/// Returns a sorted copy of `items`, leaving `items` untouched.
///
/// The slice is split in half, each half is sorted recursively and the two sorted halves are
/// merged by repeatedly taking the smaller of their first values. Ties are taken from the left
/// half so the sort is stable. Needs `O(n)` extra space.
///
/// # Examples
///
/// ```
/// use classic_algos::sort::merge_sort;
///
/// let count_backwards = [10, 8, 3, 1, -5];
///
/// assert_eq!(merge_sort(&count_backwards), [-5, 1, 3, 8, 10]);
/// assert_eq!(count_backwards, [10, 8, 3, 1, -5]);
/// ```
pub fn merge_sort<T>(items: &[T]) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let (left, right) = items.split_at(items.len() / 2);
    merge(merge_sort(left), merge_sort(right))
}

/// Merges two sorted vectors into one sorted vector.
fn merge<T>(left: Vec<T>, right: Vec<T>) -> Vec<T>
where
    T: PartialOrd,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r < l,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    // At most one of these still has values, all larger than anything merged so far.
    merged.extend(left);
    merged.extend(right);
    merged
}

/// Sorts `items` in place by partitioning around a pivot and sorting both sides.
///
/// The last value of each partition is its pivot (Lomuto partitioning). That makes already sorted
/// and reverse sorted input the worst case at `O(n^2)`.
///
/// # Examples
///
/// ```
/// use classic_algos::sort::quicksort;
///
/// let mut items = [10, 8, 3, 1, -5, 3];
/// quicksort(&mut items);
///
/// assert_eq!(items, [-5, 1, 3, 3, 8, 10]);
/// ```
pub fn quicksort<T>(items: &mut [T])
where
    T: PartialOrd,
{
    if items.len() <= 1 {
        return;
    }

    let pivot = partition(items);
    let (smaller, rest) = items.split_at_mut(pivot);
    quicksort(smaller);
    quicksort(&mut rest[1..]);
}

/// Sorts only the values of `items` at the indices in `range`, leaving the rest in place. A range
/// holding at most one index, including a reversed one like `3..=1`, leaves `items` unchanged.
///
/// # Panics
///
/// Panics if a range of two or more indices is out of bounds for `items`.
///
/// # Examples
///
/// ```
/// use classic_algos::sort::quicksort_range;
///
/// let mut items = [9, 4, 3, 2, 1, 0];
/// quicksort_range(&mut items, 1..=4);
///
/// assert_eq!(items, [9, 1, 2, 3, 4, 0]);
/// ```
pub fn quicksort_range<T>(items: &mut [T], range: RangeInclusive<usize>)
where
    T: PartialOrd,
{
    if range.start() >= range.end() {
        return;
    }
    quicksort(&mut items[range]);
}

/// Moves every value no larger than the pivot (the last value) in front of it and returns the
/// pivot's final index.
fn partition<T>(items: &mut [T]) -> usize
where
    T: PartialOrd,
{
    let end = items.len() - 1;
    let mut boundary = 0;
    for i in 0..end {
        if items[i] <= items[end] {
            items.swap(boundary, i);
            boundary += 1;
        }
    }
    items.swap(boundary, end);

    trace!(target: "sort", "partitioned {} values around index {}", items.len(), boundary);
    boundary
}
