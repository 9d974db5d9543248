use crate::{AvlTreeMap, InsertStrategy, Link};

use proptest::prelude::*;
use std::collections::BTreeMap;

fn validate_tree(t: &AvlTreeMap<u16, u64>) {
    t.check_consistency();

    let zero_balanced = t
        .iter()
        .filter(|(k, _)| {
            let id = t.search(k).unwrap();
            t.balance_factor(id) == Some(0)
        })
        .count();
    let expected = if t.is_empty() {
        0.0
    } else {
        zero_balanced as f64 / t.size() as f64
    };
    assert_eq!(t.balance_quality(), expected);
    assert_eq!(t.root().is_some(), t.size() > 0);
}

#[derive(Clone, Debug)]
enum Op {
    Insert(u16, u64, InsertStrategy),
    Delete(u16),
    Get(u16),
}

fn insert_strategy() -> impl Strategy<Value = InsertStrategy> {
    prop_oneof![Just(InsertStrategy::FromRoot), Just(InsertStrategy::FromMax)]
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // Narrow key range so deletes and lookups hit existing keys often
    let key = 0u16..512;
    let op = prop_oneof![
        50 => (key.clone(), any::<u64>(), insert_strategy())
            .prop_map(|(k, v, s)| Op::Insert(k, v, s)),
        30 => key.clone().prop_map(Op::Delete),
        20 => key.prop_map(Op::Get),
    ];
    prop::collection::vec(op, 0..=400)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: AvlTreeMap<u16, u64> = AvlTreeMap::new();
        let mut m: BTreeMap<u16, u64> = BTreeMap::new();
        let mut inserts = 0usize;
        let mut deletes = 0usize;

        for op in ops {
            match op {
                Op::Insert(key, value, strategy) => {
                    // Keys must be unique
                    if !m.contains_key(&key) {
                        t.insert(key, value, strategy);
                        m.insert(key, value);
                        inserts += 1;
                    }
                }
                Op::Delete(key) => {
                    let found = t.search(&key);
                    prop_assert_eq!(found.is_some(), m.contains_key(&key));
                    if let Some(node) = found {
                        t.delete(node);
                        m.remove(&key);
                        deletes += 1;
                    }
                }
                Op::Get(key) => {
                    prop_assert_eq!(t.get(&key), m.get(&key));
                }
            }

            validate_tree(&t);
            prop_assert_eq!(t.size(), m.len());
            prop_assert_eq!(t.size(), inserts - deletes);
        }

        let got: Vec<(u16, u64)> = t.to_sorted_vec().into_iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<(u16, u64)> = m.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(t.max().and_then(|id| t.key(id)), m.keys().next_back());
    }

    #[test]
    fn prop_neighbours_round_trip(keys in prop::collection::btree_set(any::<i32>(), 1..300)) {
        let mut t = AvlTreeMap::new();
        for key in &keys {
            t.insert(*key, (), InsertStrategy::FromRoot);
        }

        for key in &keys {
            let x = Link::Node(t.search(key).unwrap());
            if let Some(Link::Node(s)) = t.successor(x) {
                prop_assert_eq!(t.predecessor(Link::Node(s)), Some(x));
            }
            if let Some(Link::Node(p)) = t.predecessor(x) {
                prop_assert_eq!(t.successor(Link::Node(p)), Some(x));
            }
        }
    }

    #[test]
    fn prop_strategies_agree(keys in prop::collection::vec(any::<i16>(), 0..300)) {
        let mut from_root = AvlTreeMap::new();
        let mut from_max = AvlTreeMap::new();
        for key in keys {
            if from_root.contains_key(&key) {
                continue;
            }
            let a = from_root.insert(key, (), InsertStrategy::FromRoot);
            let b = from_max.insert(key, (), InsertStrategy::FromMax);
            prop_assert_eq!(a, b);
        }
        prop_assert_eq!(from_root.shape().to_string(), from_max.shape().to_string());
    }
}
