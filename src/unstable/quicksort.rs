//! Quick sort with Lomuto partitioning.
//!
//! Pivot policy: last element of the range. Elements <= pivot are swapped to
//! the front, the pivot lands on the partition boundary, and both sides are
//! sorted, recursing on the left and iterating on the right. Not stable, and
//! O(n^2) on inputs that keep picking an extreme pivot.

use core::cmp::Ordering;
use core::mem;

use sort_test_tools::Sort;

pub struct SortImpl;

impl Sort for SortImpl {
    fn name() -> String {
        "quicksort_lomuto".into()
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
    unstable_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn unstable_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        return;
    }

    quicksort(v, is_less);
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() <= 1 {
            return;
        }

        let pivot_pos = partition(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(pivot_pos);

        // Recurse into the left side and continue with the right.
        quicksort(left, is_less);
        v = &mut right[1..];
    }
}

/// Lomuto partition around the last element. Returns the pivot's final
/// position; everything before it is <= the pivot, everything after it is
/// greater.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let pivot = v.len() - 1;
    let mut boundary = 0;

    for j in 0..pivot {
        if !is_less(&v[pivot], &v[j]) {
            v.swap(boundary, j);
            boundary += 1;
        }
    }

    v.swap(boundary, pivot);
    boundary
}
