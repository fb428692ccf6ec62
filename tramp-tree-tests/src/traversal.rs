use proptest::prelude::*;

use crate::inputs::{arb_values, build_in_place, build_persistent, sorted};

// build trees from arbitrary inputs and check every traversal against a sorted copy
proptest! {
    #[test]
    fn every_strategy_sorts(values in arb_values()) {
        let tree = build_persistent(&values);
        let expected = sorted(&values);

        for strategy in tramp_tree::Strategy::ALL {
            prop_assert_eq!(&tree.traverse_with(strategy, |v| *v), &expected, "{}", strategy);
        }
        prop_assert_eq!(&tree.traverse_explicit_stack(|v| *v), &expected);
        prop_assert_eq!(tree.len(), values.len());
    }

    #[test]
    fn strategies_agree_under_map(values in arb_values()) {
        let tree = build_in_place(&values);
        let map = |v: &i64| format!("<{}>", v);
        let reference = tree.traverse_with(tramp_tree::Strategy::Naive, map);

        for strategy in tramp_tree::Strategy::ALL {
            prop_assert_eq!(&tree.traverse_with(strategy, map), &reference);
        }
        prop_assert_eq!(&tree.traverse_explicit_stack(map), &reference);
    }

    #[test]
    fn insertion_forms_agree(values in arb_values()) {
        let persistent = build_persistent(&values);
        let in_place = build_in_place(&values);

        prop_assert_eq!(persistent.root(), in_place.root());
        prop_assert_eq!(persistent.depth(), in_place.depth());
    }

    #[test]
    fn snapshots_are_stable(values in arb_values(), extra in arb_values()) {
        let mut tree = build_in_place(&values);
        let snapshot = tree.snapshot();

        for (i, v) in extra.iter().enumerate() {
            if i % 2 == 0 {
                tree.insert(*v);
            } else {
                tree.insert_in_place(*v);
            }
        }

        prop_assert_eq!(snapshot.to_vec(), sorted(&values));
        let all: Vec<i64> = values.iter().chain(extra.iter()).copied().collect();
        prop_assert_eq!(tree.to_vec(), sorted(&all));
    }

    #[test]
    fn unknown_names_are_rejected(name in "[a-z]{0,10}") {
        let tree = build_persistent(&[2, 1, 3]);
        let known = tramp_tree::Strategy::ALL.iter().any(|s| s.name() == name);

        match tree.traverse_by_name(&name, |v| *v) {
            Ok(out) => {
                prop_assert!(known);
                prop_assert_eq!(out, vec![1, 2, 3]);
            }
            Err(tramp_tree::Error::InvalidStrategy(rejected)) => {
                prop_assert!(!known);
                prop_assert_eq!(rejected, name);
            }
        }
    }
}
