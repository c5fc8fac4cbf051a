//! A sorted dictionary built on a skip list over a stable-index arena.
//!
//! Skip lists give O(log n) expected lookup, insertion, and removal without
//! any rebalancing: node heights are drawn from a geometric distribution at
//! insertion time, and taller nodes act as express lanes over the sorted
//! level-0 chain.
//!
//! # Design Philosophy
//!
//! Pointer-based skip lists carry dangling-reference hazards on every erase.
//! This crate stores nodes in an arena with stable indices instead:
//!
//! ```text
//! Arena (slab)  - owns the nodes, hands out stable slot indices
//! SkipList      - links slot indices into one chain per level
//! ```
//!
//! The list exclusively owns its arena. Callers receive value references
//! only, never node handles, so no external aliasing of node identity is
//! possible. Arena slots 0 and 1 are permanently reserved for the two
//! sentinels: the header, which spans every level, and the tail, which
//! terminates every chain and carries the reserved upper-bound key.
//!
//! # The Key Domain Contract
//!
//! Construction takes a `large_key`: an exclusive upper bound on legal keys,
//! stored in the tail sentinel and never itself storable. Operations on keys
//! at or above it are silent no-ops by design — `insert` drops the pair,
//! `erase` does nothing, `find` reports absent. See [`SkipList`] for the
//! full contract.
//!
//! # Randomness
//!
//! The level generator is injected at construction as any
//! [`rand_core::RngCore`], not read from ambient process state. Seed it
//! (e.g. with `rand::rngs::SmallRng`) and the entire structure is
//! reproducible, which the test suite leans on heavily.
//!
//! # Quick Start
//!
//! ```
//! use skipdict::SkipList;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! // Keys must be strictly below 1_000; expect around 100 pairs; promote
//! // a node one level with probability 0.5.
//! let rng = SmallRng::seed_from_u64(42);
//! let mut map: SkipList<u64, String, _> = SkipList::new(1_000, 100, 0.5, rng);
//!
//! map.insert(5, "five".into());
//! map.insert(3, "three".into());
//! assert_eq!(map.insert(5, "FIVE".into()), Some("five".into())); // overwrite
//!
//! assert_eq!(map.find(&5), Some(&"FIVE".to_string()));
//! assert_eq!(map.erase(&3), Some("three".into()));
//! assert_eq!(map.len(), 1);
//!
//! // Out of domain: dropped, not stored.
//! map.insert(1_000, "bound".into());
//! assert_eq!(map.len(), 1);
//! ```
//!
//! # Concurrency
//!
//! None. Mutation goes through `&mut self` (the descent reuses a scratch
//! buffer owned by the instance), and `find` takes `&self`, so the borrow
//! checker already enforces the only safe discipline: exclusive mutation,
//! shared reads. Wrap the list in a lock if threads must share it.

#![warn(missing_docs)]

pub mod arena;
pub mod index;
pub mod skiplist;

pub use arena::Arena;
pub use index::Index;
pub use skiplist::SkipList;
