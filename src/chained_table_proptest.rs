#![cfg(test)]

// Property tests for ChainedHashTable kept inside the crate so they can
// inspect chain layout through crate-private helpers.

use crate::chained_table::test_hashers::ConstBuildHasher;
use crate::chained_table::{ChainedHashTable, BUCKETS};
use crate::error::TableError;
use core::hash::BuildHasher;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations so shrinking moves toward earlier keys and
// shorter op lists.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    PutAbsentKey(i32),
    PutAbsentData(usize),
    Get(usize),
    Remove(usize),
    RemoveAbsent,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,4}", 1..=10).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            1 => any::<i32>().prop_map(OpI::PutAbsentKey),
            1 => idx.clone().prop_map(OpI::PutAbsentData),
            3 => idx.clone().prop_map(OpI::Get),
            3 => idx.clone().prop_map(OpI::Remove),
            1 => Just(OpI::RemoveAbsent),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Drives `sut` and a first-write-wins `HashMap` model through the same ops,
// checking after each step:
// - `put` never overwrites; `get` agrees with the model.
// - `remove` returns the stored value or `KeyNotFound` exactly when absent.
// - `None` arguments are rejected with `InvalidArgument`.
// - every key sits in the chain named by `bucket_of`, once, and the chain
//   lengths sum to `size()`.
fn run_against_model<S>(
    mut sut: ChainedHashTable<String, i32, S>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError>
where
    S: BuildHasher,
{
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Put(i, v) => {
                let k = pool[i].clone();
                let before = sut.size();
                let already = model.contains_key(&k);
                prop_assert!(sut.put(k.clone(), v).is_ok());
                model.entry(k).or_insert(v);
                let grew = if already { 0 } else { 1 };
                prop_assert_eq!(sut.size(), before + grew);
            }
            OpI::PutAbsentKey(v) => {
                let r = sut.put(None, v);
                prop_assert!(matches!(r, Err(TableError::InvalidArgument(_))));
            }
            OpI::PutAbsentData(i) => {
                let r = sut.put(pool[i].clone(), None);
                prop_assert!(matches!(r, Err(TableError::InvalidArgument(_))));
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k).unwrap(), model.get(k));
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                match (sut.remove(k), model.remove(k)) {
                    (Ok(v), Some(mv)) => {
                        prop_assert_eq!(v, mv);
                    }
                    (Err(TableError::KeyNotFound), None) => {}
                    (got, want) => {
                        prop_assert!(false, "remove mismatch: {:?} vs {:?}", got, want);
                    }
                }
            }
            OpI::RemoveAbsent => {
                let r = sut.remove(None);
                prop_assert!(matches!(r, Err(TableError::InvalidArgument(_))));
            }
        }

        prop_assert_eq!(sut.size(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        let mut reachable = 0;
        for b in 0..BUCKETS {
            let keys = sut.chain_keys(b);
            for k in &keys {
                prop_assert_eq!(sut.bucket_of(*k), b);
                prop_assert!(model.contains_key(*k));
            }
            reachable += keys.len();
        }
        prop_assert_eq!(reachable, sut.size());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_against_model(ChainedHashTable::new(), &pool, ops)?;
    }
}

// Same invariants with every key in a single chain, which exercises
// unlinking at the head, middle, and tail.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_against_model(ChainedHashTable::with_hasher(ConstBuildHasher), &pool, ops)?;
    }
}

// Insertion order of distinct keys is the reverse of chain order.
proptest! {
    #[test]
    fn prop_chain_reverses_insertion_order(keys in proptest::collection::btree_set("[a-z]{1,6}", 0..20)) {
        let mut sut: ChainedHashTable<String, usize, ConstBuildHasher> =
            ChainedHashTable::with_hasher(ConstBuildHasher);
        let keys: Vec<String> = keys.into_iter().collect();
        for (i, k) in keys.iter().enumerate() {
            sut.put(k.clone(), i).unwrap();
        }
        let chain: Vec<&String> = sut.chain_keys(0);
        let expected: Vec<&String> = keys.iter().rev().collect();
        prop_assert_eq!(chain, expected);
    }
}
