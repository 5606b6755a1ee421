use dsa_algorithms::sorting::{bubble_sort, bubble_sort_desc};
use proptest::prelude::*;

proptest! {
    #[test]
    fn matches_std_sort(mut values in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut expected = values.clone();
        expected.sort();
        bubble_sort(&mut values);
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn descending_is_reverse_of_ascending(mut values in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut expected = values.clone();
        expected.sort();
        expected.reverse();
        bubble_sort_desc(&mut values);
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn sorting_is_idempotent(mut values in prop::collection::vec(any::<i64>(), 0..64)) {
        bubble_sort(&mut values);
        let once = values.clone();
        bubble_sort(&mut values);
        prop_assert_eq!(values, once);
    }
}
