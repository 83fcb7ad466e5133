pub mod patterns;

// Re-exported for the macros below.
pub use paste;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

/// Instantiates the generic correctness battery from [`tests`] as `#[test]`
/// functions for one sort implementation. Call at most once per module.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            $sort_impl => basic, fixed, random, random_uniform, random_zipf,
            ascending, descending, all_equal, saw_mixed, pipe_organ,
            idempotent, comparator_reverse,
        );
    };
    ($sort_impl:ty => $($test_fn:ident),+ $(,)?) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [<test_ $test_fn>]() {
                    $crate::tests::$test_fn::<$sort_impl>();
                }
            )+
        }
    };
}

/// Same as [`instantiate_sort_tests`] plus the stability checks. Only for
/// sorts that guarantee stability.
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!($sort_impl);
        $crate::instantiate_sort_tests!($sort_impl => stability);
    };
}
