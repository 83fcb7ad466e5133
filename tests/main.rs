mod insertion_rahmani {
    use sort_test_tools::Sort;

    type TestSort = sort_bench_rs::unstable::rahmani::SortImpl;

    sort_test_tools::instantiate_sort_tests!(TestSort);

    // The published variant never touched index 0 and mis-sorted inputs
    // whose minimum arrives after the first slot. Pin the corrected
    // behavior.
    #[test]
    fn new_minimum_displaces_first_element() {
        let mut v = vec![2, 1];
        TestSort::sort(&mut v);
        assert_eq!(v, [1, 2]);

        let mut v = vec![3, 2, 1];
        TestSort::sort(&mut v);
        assert_eq!(v, [1, 2, 3]);

        let mut v = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
        TestSort::sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn early_skip_keeps_sorted_runs() {
        let mut v = vec![1, 2, 3, 4, 5, 0];
        TestSort::sort(&mut v);
        assert_eq!(v, [0, 1, 2, 3, 4, 5]);
    }
}

mod insertion_sequential {
    type TestSort = sort_bench_rs::stable::insertion_sequential::SortImpl;

    sort_test_tools::instantiate_stable_sort_tests!(TestSort);
}

mod insertion_binary {
    type TestSort = sort_bench_rs::unstable::insertion_binary::SortImpl;

    sort_test_tools::instantiate_sort_tests!(TestSort);
}

mod mergesort {
    type TestSort = sort_bench_rs::stable::mergesort::SortImpl;

    sort_test_tools::instantiate_stable_sort_tests!(TestSort);
}

mod quicksort {
    use sort_test_tools::Sort;

    type TestSort = sort_bench_rs::unstable::quicksort::SortImpl;

    sort_test_tools::instantiate_sort_tests!(TestSort);

    // Descending input keeps picking the minimum as pivot, the worst case of
    // the last-element policy. Output must still be sorted.
    #[test]
    fn descending_worst_case_pivot() {
        let mut v: Vec<i32> = (0..500).rev().collect();
        TestSort::sort(&mut v);
        let expected: Vec<i32> = (0..500).collect();
        assert_eq!(v, expected);
    }
}

mod dataset {
    use sort_bench_rs::dataset::{self, DatasetError};

    #[test]
    fn parses_one_dataset_per_line() {
        let input = "5 3 8 3 1\n2 1\n";
        let datasets = dataset::from_reader(input.as_bytes()).unwrap();
        assert_eq!(datasets, vec![vec![5, 3, 8, 3, 1], vec![2, 1]]);
    }

    #[test]
    fn handles_negative_values_and_extra_whitespace() {
        let input = "  -4\t7   0 \n";
        let datasets = dataset::from_reader(input.as_bytes()).unwrap();
        assert_eq!(datasets, vec![vec![-4, 7, 0]]);
    }

    #[test]
    fn blank_line_yields_empty_dataset() {
        let input = "1 2\n\n3\n";
        let datasets = dataset::from_reader(input.as_bytes()).unwrap();
        assert_eq!(datasets, vec![vec![1, 2], vec![], vec![3]]);
    }

    #[test]
    fn bad_token_fails_with_line_and_token() {
        let input = "1 2\n3 x 4\n";
        let err = dataset::from_reader(input.as_bytes()).unwrap_err();
        match err {
            DatasetError::Parse { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = dataset::load_file("does-not-exist.txt").unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
