//! Merge sort and binary search used by the record store
//!
//! Both are generic over the element type and take a comparator, so the store
//! can drive them with any [`SortKey`](super::SortKey).

use std::cmp::Ordering;

/// Stable top-down merge sort
///
/// Splits at the midpoint, sorts each half recursively, then merges by
/// repeatedly taking the lesser head. On ties the left head wins, so equal
/// elements keep their relative order.
///
/// Takes the vector by value and returns the sorted vector; each merge level
/// allocates one output buffer of the combined length.
pub fn merge_sort_by<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mid = items.len() / 2;
    let right = items.split_off(mid);

    let left = merge_sort_by(items, compare);
    let right = merge_sort_by(right, compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Strictly-less on the right keeps ties on the left
        let next = if compare(r, l) == Ordering::Less {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

/// Binary search over a sorted slice
///
/// `probe` compares an element against the target: `Less` when the element
/// sorts before it, `Greater` when after. Narrows a half-open `low..high`
/// window and stops on the first equal midpoint, so with duplicates any one of the
/// matching elements may be returned.
///
/// # Returns
/// The matching element, or `None` once the bounds cross
pub fn binary_search_by<T, F>(items: &[T], probe: F) -> Option<&T>
where
    F: Fn(&T) -> Ordering,
{
    let mut low = 0;
    // Exclusive upper bound avoids underflow on an empty slice
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let candidate = &items[mid];
        match probe(candidate) {
            Ordering::Equal => return Some(candidate),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}
