// ChainedHashTable integration tests.
//
// Each test drives the public API only. The invariants exercised:
// - Size: grows by one per new key, shrinks by one per removal.
// - First write wins: a put of a present key keeps the stored value.
// - Lookup asymmetry: `get` misses are `Ok(None)`, `remove` misses are
//   `KeyNotFound`.
// - Absent arguments: `None` is rejected with `InvalidArgument` and the
//   table is left as it was.
use chained_table::{ChainedHashTable, TableError, BUCKETS};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Test: put/get/size walk-through.
// Verifies: sizes after each put, lookups of present and missing keys, and
// rejection of absent key/data without state change.
#[test]
fn put_and_get() {
    init_logging();
    let mut st: ChainedHashTable<&str, i32> = ChainedHashTable::new();
    assert_eq!(st.size(), 0);

    st.put("A", 0).unwrap();
    assert_eq!(st.size(), 1);
    assert_eq!(st.get(&"A").unwrap(), Some(&0));
    st.put("B", 1).unwrap();
    assert_eq!(st.size(), 2);
    assert_eq!(st.get(&"B").unwrap(), Some(&1));

    // missing key is not an error
    assert_eq!(st.get(&"C").unwrap(), None);

    match st.get(None) {
        Err(TableError::InvalidArgument(msg)) => {
            assert_eq!(msg, "cannot search for an absent key")
        }
        other => panic!("unexpected result: {:?}", other),
    }

    match st.put(None, 5) {
        Err(TableError::InvalidArgument(msg)) => {
            assert_eq!(msg, "key and/or data may not be absent")
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(st.size(), 2);
    assert_eq!(st.get(&"A").unwrap(), Some(&0));
    assert_eq!(st.get(&"B").unwrap(), Some(&1));

    match st.put("C", None) {
        Err(TableError::InvalidArgument(msg)) => {
            assert_eq!(msg, "key and/or data may not be absent")
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(st.size(), 2);
    assert_eq!(st.get(&"C").unwrap(), None);
}

// Test: remove walk-through.
// Verifies: removed values are returned, size shrinks, and failed removals
// leave the remaining entries reachable.
#[test]
fn remove() {
    init_logging();
    let mut st: ChainedHashTable<&str, i32> = ChainedHashTable::new();
    st.put("A", 0).unwrap();
    st.put("B", 1).unwrap();
    st.put("C", 2).unwrap();
    st.put("AA", 3).unwrap();
    assert_eq!(st.size(), 4);

    assert_eq!(st.remove(&"C").unwrap(), 2);
    assert_eq!(st.size(), 3);
    assert_eq!(st.get(&"C").unwrap(), None);

    assert_eq!(st.remove(&"A").unwrap(), 0);
    assert_eq!(st.size(), 2);
    assert_eq!(st.get(&"A").unwrap(), None);

    match st.remove(None) {
        Err(TableError::InvalidArgument(msg)) => {
            assert_eq!(msg, "cannot remove an absent key")
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(st.size(), 2);
    assert_eq!(st.get(&"B").unwrap(), Some(&1));
    assert_eq!(st.get(&"AA").unwrap(), Some(&3));

    assert_eq!(st.remove(&"G"), Err(TableError::KeyNotFound));
    assert_eq!(st.size(), 2);
    assert_eq!(st.get(&"B").unwrap(), Some(&1));
    assert_eq!(st.get(&"AA").unwrap(), Some(&3));
}

// Test: unique keys policy.
// Verifies: the second put is accepted but ignored.
#[test]
fn duplicate_put_is_ignored() {
    let mut st: ChainedHashTable<String, &str> = ChainedHashTable::new();
    st.put("k".to_string(), "first").unwrap();
    st.put("k".to_string(), "second").unwrap();
    assert_eq!(st.size(), 1);
    assert_eq!(st.get("k").unwrap(), Some(&"first"));
}

// Test: String keys queried through &str.
// Verifies: get/remove/contains_key accept a borrowed form of the key, and
// None is still rejected as an absent key.
#[test]
fn string_keys_looked_up_by_str() {
    let mut st: ChainedHashTable<String, i32> = ChainedHashTable::new();
    st.put("A".to_string(), 0).unwrap();
    st.put("B".to_string(), 1).unwrap();

    assert_eq!(st.get("A").unwrap(), Some(&0));
    assert_eq!(st.get("C").unwrap(), None);
    assert!(st.contains_key("B"));
    assert!(matches!(st.get(None), Err(TableError::InvalidArgument(_))));

    assert_eq!(st.remove("A"), Ok(0));
    assert_eq!(st.remove("A"), Err(TableError::KeyNotFound));
    assert!(matches!(st.remove(None), Err(TableError::InvalidArgument(_))));
    assert_eq!(st.size(), 1);
}

// Test: removing the same key twice.
// Verifies: the second attempt is KeyNotFound and size is unaffected.
#[test]
fn double_remove_is_key_not_found() {
    let mut st: ChainedHashTable<u32, u32> = ChainedHashTable::default();
    st.put(1, 10).unwrap();
    st.put(2, 20).unwrap();
    assert_eq!(st.remove(&1), Ok(10));
    assert_eq!(st.remove(&1), Err(TableError::KeyNotFound));
    assert_eq!(st.size(), 1);
    assert!(st.contains_key(&2));
}

// Test: remove on a never-used table.
// Verifies: every bucket is empty, so any key is KeyNotFound.
#[test]
fn remove_from_empty_table() {
    let mut st: ChainedHashTable<String, i32> = ChainedHashTable::new();
    for i in 0..10 {
        assert_eq!(
            st.remove(&format!("k{}", i)),
            Err(TableError::KeyNotFound)
        );
    }
    assert!(st.is_empty());
}

// Test: many more keys than buckets.
// Verifies: chains grow without resizing and every key stays retrievable;
// draining in a different order empties the table.
#[test]
fn many_keys_share_few_buckets() {
    init_logging();
    let mut st: ChainedHashTable<String, usize> = ChainedHashTable::new();
    let n = BUCKETS * 40;
    for i in 0..n {
        st.put(format!("key-{}", i), i).unwrap();
    }
    assert_eq!(st.size(), n);
    for i in 0..n {
        let k = format!("key-{}", i);
        assert!(st.bucket_of(&k) < BUCKETS);
        assert_eq!(st.get(&k).unwrap(), Some(&i));
    }

    for i in (0..n).step_by(2).chain((1..n).step_by(2)) {
        assert_eq!(st.remove(&format!("key-{}", i)), Ok(i));
    }
    assert!(st.is_empty());
}
