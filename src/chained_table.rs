//! ChainedHashTable: fixed bucket array with separately chained entries.

use crate::error::{Result, TableError};
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use log::{debug, trace};
use slotmap::{DefaultKey, SlotMap};
use std::collections::hash_map::RandomState;

/// Number of chains. Fixed for the lifetime of every table.
pub const BUCKETS: usize = 5;

const PUT_ABSENT: &str = "key and/or data may not be absent";
const GET_ABSENT: &str = "cannot search for an absent key";
const REMOVE_ABSENT: &str = "cannot remove an absent key";

/// Key argument accepted by `get` and `remove`.
///
/// Any `&Q` with `K: Borrow<Q>` names a key (so a `String`-keyed table can
/// be queried with `&str`), and `None` names an absent key. Nothing else
/// converts: `&Option<T>` is a borrowed `Option`, not an absent key.
pub trait LookupKey<'q, K> {
    type Query: ?Sized + Hash + Eq + 'q;

    fn into_query(self) -> Option<&'q Self::Query>;
}

impl<'q, K, Q> LookupKey<'q, K> for &'q Q
where
    K: Borrow<Q>,
    Q: ?Sized + Hash + Eq,
{
    type Query = Q;

    #[inline]
    fn into_query(self) -> Option<&'q Q> {
        Some(self)
    }
}

impl<'q, K> LookupKey<'q, K> for Option<&'q K>
where
    K: Hash + Eq,
{
    type Query = K;

    #[inline]
    fn into_query(self) -> Option<&'q K> {
        self
    }
}

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    next: Option<DefaultKey>,
}

/// Hash table with `BUCKETS` singly linked chains.
///
/// Entries live in a generational arena; each bucket slot names the head of
/// its chain and every entry names its successor. New keys are linked at
/// the head, so a chain reads newest-first.
pub struct ChainedHashTable<K, V, S = RandomState> {
    hasher: S,
    heads: [Option<DefaultKey>; BUCKETS],
    slots: SlotMap<DefaultKey, Entry<K, V>>, // one slot per reachable entry
}

/// Walks one chain from head to tail.
struct Chain<'a, K, V> {
    slots: &'a SlotMap<DefaultKey, Entry<K, V>>,
    cur: Option<DefaultKey>,
}

impl<'a, K, V> Iterator for Chain<'a, K, V> {
    type Item = (DefaultKey, &'a Entry<K, V>);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cur?;
        let entry = self.slots.get(slot)?;
        self.cur = entry.next;
        Some((slot, entry))
    }
}

impl<K, V> ChainedHashTable<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V> Default for ChainedHashTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ChainedHashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            heads: [None; BUCKETS],
            slots: SlotMap::with_key(),
        }
    }

    /// Bucket index in `[0, BUCKETS)` for `key`. Equal keys share a bucket,
    /// and a borrowed form hashes to the same bucket as its owner.
    pub fn bucket_of<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash,
    {
        (self.hasher.hash_one(key) % BUCKETS as u64) as usize
    }

    fn chain(&self, bucket: usize) -> Chain<'_, K, V> {
        Chain {
            slots: &self.slots,
            cur: self.heads[bucket],
        }
    }

    /// Number of stored entries.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Same as `size`.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maps `key` to `data` unless `key` is already present, in which case
    /// the stored value is kept and nothing changes.
    ///
    /// Either argument may be `None`, which is rejected with
    /// `TableError::InvalidArgument` before the table is touched.
    pub fn put(&mut self, key: impl Into<Option<K>>, data: impl Into<Option<V>>) -> Result<()> {
        let (key, value) = match (key.into(), data.into()) {
            (Some(key), Some(value)) => (key, value),
            _ => return Err(TableError::InvalidArgument(PUT_ABSENT)),
        };
        let bucket = self.bucket_of(&key);
        if self.chain(bucket).any(|(_, e)| e.key == key) {
            debug!("put ignored: key already present in bucket {}", bucket);
            return Ok(());
        }

        let next = self.heads[bucket];
        let slot = self.slots.insert(Entry { key, value, next });
        self.heads[bucket] = Some(slot);
        trace!(
            "linked entry at head of bucket {} (size {})",
            bucket,
            self.slots.len()
        );
        Ok(())
    }

    /// Looks up the value stored for `key`. A missing key is `Ok(None)`;
    /// only an absent (`None`) key is an error.
    pub fn get<'q, A>(&self, key: A) -> Result<Option<&V>>
    where
        A: LookupKey<'q, K>,
        K: Borrow<A::Query>,
    {
        let q = key
            .into_query()
            .ok_or(TableError::InvalidArgument(GET_ABSENT))?;
        let bucket = self.bucket_of(q);
        Ok(self
            .chain(bucket)
            .find(|(_, e)| e.key.borrow() == q)
            .map(|(_, e)| &e.value))
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let bucket = self.bucket_of(q);
        self.chain(bucket).any(|(_, e)| e.key.borrow() == q)
    }

    /// Unlinks the entry for `key` and returns its value.
    ///
    /// Fails with `TableError::KeyNotFound` when no entry matches, leaving
    /// every chain as it was.
    pub fn remove<'q, A>(&mut self, key: A) -> Result<V>
    where
        A: LookupKey<'q, K>,
        K: Borrow<A::Query>,
    {
        let q = key
            .into_query()
            .ok_or(TableError::InvalidArgument(REMOVE_ABSENT))?;
        let bucket = self.bucket_of(q);

        let mut prev = None;
        let mut target = None;
        for (slot, entry) in self.chain(bucket) {
            if entry.key.borrow() == q {
                target = Some(slot);
                break;
            }
            prev = Some(slot);
        }
        let entry = target
            .and_then(|slot| self.slots.remove(slot))
            .ok_or(TableError::KeyNotFound)?;

        // The entry is out of the arena; relinking below cannot fail. `prev`
        // came from the same chain walk, so its slot is still occupied.
        match prev {
            None => self.heads[bucket] = entry.next,
            Some(p) => {
                if let Some(pred) = self.slots.get_mut(p) {
                    pred.next = entry.next;
                }
            }
        }
        trace!(
            "unlinked entry from bucket {} (size {})",
            bucket,
            self.slots.len()
        );
        Ok(entry.value)
    }

    /// Keys of one chain, head first.
    #[cfg(test)]
    pub(crate) fn chain_keys(&self, bucket: usize) -> Vec<&K> {
        self.chain(bucket).map(|(_, e)| &e.key).collect()
    }
}
