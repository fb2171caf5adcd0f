//! chained-table: a single-threaded hash table with a fixed number of
//! buckets, resolving collisions by separate chaining.
//!
//! Internal Design:
//!
//! Summary
//! - `ChainedHashTable<K, V, S>` owns `BUCKETS` (= 5) chain heads and an
//!   arena of entries. Each entry holds its key, its value, and the arena
//!   key of the next entry in the same chain.
//! - `put` links new keys at the head of their chain; `remove` unlinks by
//!   rewriting either the bucket head or the predecessor's link.
//!
//! Constraints
//! - Bucket count is fixed; the table never resizes or rehashes, so chains
//!   grow linearly with the number of entries per bucket.
//! - Unique keys. A `put` for a key that is already present keeps the old
//!   value and reports success.
//! - An entry for key `k` is reachable only from bucket `hash(k) % BUCKETS`,
//!   and `size()` always equals the number of reachable entries.
//!
//! Absent arguments
//! - `put`, `get` and `remove` accept `None` in place of a key (and `put`
//!   in place of the data) and reject it with `TableError::InvalidArgument`
//!   before touching the table.
//! - `get` reports a missing key as `Ok(None)`; `remove` reports it as
//!   `TableError::KeyNotFound`.
//!
//! Notes and non-goals
//! - Single-threaded: mutation takes `&mut self`; sharing across threads is
//!   left to the caller.
//! - No iteration API, no load-factor tracking.
//! - Chain maintenance is logged through the `log` facade at `trace`
//!   level; errors are returned, not logged.

mod chained_table;
mod chained_table_proptest;
pub mod error;

// Public surface
pub use chained_table::{ChainedHashTable, LookupKey, BUCKETS};
pub use error::{Result, TableError};
