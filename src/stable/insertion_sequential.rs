//! Sequential insertion sort.
//!
//! The textbook algorithm: grow a sorted prefix one element at a time,
//! scanning it linearly from the right for the insertion point.

use core::cmp::Ordering;
use core::mem;

use sort_test_tools::Sort;

pub struct SortImpl;

impl Sort for SortImpl {
    fn name() -> String {
        "insertion_sequential".into()
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
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        return;
    }

    for i in 1..v.len() {
        // Scan the sorted prefix from the right past every element greater
        // than the key, then rotate the key into the opened slot. Stopping at
        // the first element not greater than the key keeps equal elements in
        // their original order.
        let mut j = i;
        while j > 0 && is_less(&v[i], &v[j - 1]) {
            j -= 1;
        }
        v[j..=i].rotate_right(1);
    }
}
