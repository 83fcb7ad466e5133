//! Rahmani's insertion sort variant.
//!
//! Binary insertion sort with two shortcuts:
//!
//! - an element already >= its predecessor is skipped outright, since the
//!   prefix is sorted it is >= the whole prefix;
//! - a key <= the element in slot 1 is inserted at index 1 without a search,
//!   and the general binary search only covers `[1, i)`.
//!
//! The published routine never moves or searches before index 1, which
//! mis-sorts any input whose minimum shows up after slot 0 (already `[2, 1]`
//! comes out wrong). One extra guard routes keys less than the first element
//! to index 0, keeping both shortcuts intact while making the routine
//! correct on all inputs. Same tie-break as the binary insertion sort, so
//! not stable.

use core::cmp::Ordering;
use core::mem;

use sort_test_tools::Sort;

use super::insertion_binary::insertion_point;

pub struct SortImpl;

impl Sort for SortImpl {
    fn name() -> String {
        "insertion_rahmani".into()
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
    rahmani_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    rahmani_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn rahmani_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        return;
    }

    for i in 1..v.len() {
        // Early-skip: the prefix is sorted, so an element >= its predecessor
        // is >= the whole prefix and already in place.
        if !is_less(&v[i], &v[i - 1]) {
            continue;
        }

        let j = if is_less(&v[i], &v[0]) {
            // New minimum, goes before the first element.
            0
        } else if !is_less(&v[1], &v[i]) {
            // Fast path: key <= v[1] lands right after slot 0.
            1
        } else {
            let (prefix, rest) = v.split_at(i);
            insertion_point(&prefix[1..], &rest[0], is_less) + 1
        };

        v[j..=i].rotate_right(1);
    }
}
