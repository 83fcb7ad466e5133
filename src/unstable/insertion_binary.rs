//! Binary insertion sort.
//!
//! Insertion sort that locates the insertion point with a binary search over
//! the sorted prefix, cutting comparisons per insertion from O(i) to
//! O(log i). Shifting stays O(i). Probing an element equal to the key
//! returns the slot right after it, so equal elements can trade places and
//! the sort is not stable.

use core::cmp::Ordering;
use core::mem;

use sort_test_tools::Sort;

pub struct SortImpl;

impl Sort for SortImpl {
    fn name() -> String {
        "insertion_binary".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        self::sort(arr);
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self::sort_by(arr, compare);
    }
}

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    binary_insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    binary_insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn binary_insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        return;
    }

    for i in 1..v.len() {
        let (prefix, rest) = v.split_at(i);
        let j = insertion_point(prefix, &rest[0], is_less);
        v[j..=i].rotate_right(1);
    }
}

/// Returns an index into the sorted slice `v` at which `key` can be inserted
/// so `v` stays sorted. If the search probes an element equal to `key`, the
/// slot right after it is returned.
pub(crate) fn insertion_point<T, F>(v: &[T], key: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut lo = 0;
    let mut hi = v.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if is_less(&v[mid], key) {
            lo = mid + 1;
        } else if is_less(key, &v[mid]) {
            hi = mid;
        } else {
            return mid + 1;
        }
    }

    lo
}
