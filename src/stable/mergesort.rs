//! Top-down merge sort.
//!
//! Recursively sorts both halves of the slice, then merges them with an
//! auxiliary buffer that holds a shallow copy of the shorter run. The merge
//! routine follows the scheme of the pre-2022 std library merge: a hole
//! struct tracks the buffered run so a panicking comparator leaves the slice
//! holding every element exactly once.

use core::cmp::Ordering;
use core::mem;
use core::ptr;

use sort_test_tools::Sort;

pub struct SortImpl;

impl Sort for SortImpl {
    fn name() -> String {
        "mergesort_top_down".into()
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
    stable_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn stable_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // Scratch memory for the merges. The length stays 0 so only shallow
    // copies of the contents of `v` live here and no dtor ever runs on them.
    // Each merge buffers the shorter run, which is at most `len / 2` long.
    let mut buf = Vec::with_capacity(len / 2);

    merge_sort(v, buf.as_mut_ptr(), is_less);
}

fn merge_sort<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut v[..mid], buf, is_less);
    merge_sort(&mut v[mid..], buf, is_less);

    // SAFETY: 0 < mid < len, and buf has capacity for min(mid, len - mid)
    // elements, see stable_sort.
    unsafe {
        merge(v, mid, buf, is_less);
    }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` into one sorted whole,
/// using `buf` as temporary storage for the shorter run.
///
/// SAFETY: The two runs must be non-empty and `mid` must be in bounds. `buf`
/// must point to a buffer long enough to hold a copy of the shorter run.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let v_base = v.as_mut_ptr();
    let (v_mid, v_end) = unsafe { (v_base.add(mid), v_base.add(len)) };

    // `hole` tracks the part of the buffered run that has not been merged
    // back yet. If `is_less` panics, its Drop impl copies that part into the
    // hole in `v`, so `v` again holds every original element exactly once.
    let mut hole;

    if mid <= len - mid {
        // The left run is shorter. Copy it into `buf` and merge forwards.
        unsafe {
            ptr::copy_nonoverlapping(v_base, buf, mid);
            hole = MergeHole {
                start: buf,
                end: buf.add(mid),
                dest: v_base,
            };
        }

        let left = &mut hole.start;
        let mut right = v_mid;
        let out = &mut hole.dest;

        while *left < hole.end && right < v_end {
            // Consume the lesser side, the left run on ties. That keeps the
            // merge stable.
            unsafe {
                let to_copy = if is_less(&*right, &**left) {
                    get_and_increment(&mut right)
                } else {
                    get_and_increment(left)
                };
                ptr::copy_nonoverlapping(to_copy, get_and_increment(out), 1);
            }
        }
    } else {
        // The right run is shorter. Copy it into `buf` and merge backwards.
        unsafe {
            ptr::copy_nonoverlapping(v_mid, buf, len - mid);
            hole = MergeHole {
                start: buf,
                end: buf.add(len - mid),
                dest: v_mid,
            };
        }

        // These pointers point one past the end of their runs.
        let left = &mut hole.dest;
        let right = &mut hole.end;
        let mut out = v_end;

        while v_base < *left && buf < *right {
            // Consume the greater side, the right run on ties.
            unsafe {
                let to_copy = if is_less(&*right.sub(1), &*left.sub(1)) {
                    decrement_and_get(left)
                } else {
                    decrement_and_get(right)
                };
                ptr::copy_nonoverlapping(to_copy, decrement_and_get(&mut out), 1);
            }
        }
    }
    // `hole` is dropped here, copying whatever remains of the buffered run
    // into the remaining hole in `v`.

    unsafe fn get_and_increment<T>(ptr: &mut *mut T) -> *mut T {
        let old = *ptr;
        unsafe {
            *ptr = old.add(1);
        }
        old
    }

    unsafe fn decrement_and_get<T>(ptr: &mut *mut T) -> *mut T {
        unsafe {
            *ptr = ptr.sub(1);
        }
        *ptr
    }

    struct MergeHole<T> {
        start: *mut T,
        end: *mut T,
        dest: *mut T,
    }

    impl<T> Drop for MergeHole<T> {
        fn drop(&mut self) {
            // Copy the remaining part of the buffered run back into `v`.
            unsafe {
                let len = self.end.offset_from(self.start) as usize;
                ptr::copy_nonoverlapping(self.start, self.dest, len);
            }
        }
    }
}
