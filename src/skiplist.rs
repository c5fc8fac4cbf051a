//! Skip list - a probabilistic sorted dictionary over an index arena.
//!
//! A skip list provides O(log n) expected time for insert, lookup, and
//! removal with no rebalancing: each node is assigned a random height at
//! insertion, and taller nodes form express lanes over the level-0 chain.
//!
//! # Design
//!
//! Two sentinel slots bound every chain. The header occupies arena slot 0
//! and spans all levels; the tail occupies slot 1, has no outgoing links,
//! and carries the reserved upper-bound key supplied at construction. Every
//! level's chain runs from the header to the tail, so the descent loop can
//! compare successor keys unconditionally: the tail's key is greater than
//! any legal key and stops the walk.
//!
//! ```text
//! Level 2:  HEAD ──────────────────► 50 ─────────────────► TAIL
//!             │                       │
//! Level 1:  HEAD ──────► 20 ─────────► 50 ──────► 60 ─────► TAIL
//!             │           │            │           │
//! Level 0:  HEAD ─► 10 ──► 20 ─► 30 ──► 50 ─► 55 ─► 60 ────► TAIL
//! ```
//!
//! # Example
//!
//! ```rust
//! use skipdict::SkipList;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let rng = SmallRng::seed_from_u64(12345);
//! let mut map: SkipList<u64, &str, _> = SkipList::new(1_000, 100, 0.5, rng);
//!
//! map.insert(50, "fifty");
//! map.insert(20, "twenty");
//!
//! assert_eq!(map.find(&50), Some(&"fifty"));
//! assert_eq!(map.find(&99), None);
//! assert_eq!(map.erase(&20), Some("twenty"));
//! ```

use rand_core::RngCore;

use crate::arena::Arena;
use crate::index::Index;

// ============================================================================
// SkipNode
// ============================================================================

/// One arena slot: a key, its value, and the forward links.
///
/// `forward[i]` is the arena index of the next node on level `i`; a node
/// with `L` links participates in levels `0..L`. The two sentinel slots
/// carry the reserved tail key and no value: the header so it has a key at
/// all (it is never compared), the tail so the descent loop terminates on
/// it without a bounds check.
#[derive(Debug)]
struct SkipNode<K, V, Idx: Index> {
    key: K,
    value: Option<V>,
    forward: Box<[Idx]>,
}

impl<K, V, Idx: Index> SkipNode<K, V, Idx> {
    /// Creates a node with `links` forward slots, all initially unset.
    #[inline]
    fn new(key: K, value: Option<V>, links: usize) -> Self {
        Self {
            key,
            value,
            forward: vec![Idx::NONE; links].into_boxed_slice(),
        }
    }
}

// ============================================================================
// SkipList
// ============================================================================

/// A probabilistic sorted map with a reserved upper-bound sentinel key.
///
/// Keys live in the half-open domain strictly below the `large_key` given at
/// construction; `large_key` itself is the tail sentinel's key and can never
/// be stored. Operations on keys at or above it are silent no-ops: `insert`
/// drops the pair, `erase` does nothing, `find` reports absent. This is the
/// container's documented out-of-domain policy, not an error.
///
/// The level structure is sized once from `max_pairs` (a capacity hint, not
/// an enforced cap) and `prob` (the per-level promotion probability), and
/// never changes afterward. Node heights come from the injected random
/// generator, so a seeded generator makes the whole structure reproducible.
///
/// # Type Parameters
///
/// - `K`: key type, must implement `Ord`
/// - `V`: value type
/// - `R`: random generator implementing [`RngCore`]
/// - `Idx`: arena index type, defaults to `u32`
#[derive(Debug)]
pub struct SkipList<K, V, R, Idx = u32>
where
    K: Ord,
    Idx: Index,
{
    /// Owns every node; slots 0 and 1 are the header and tail sentinels.
    arena: Arena<SkipNode<K, V, Idx>, Idx>,
    /// Header slot index. Spans all of `0..=max_level` for the list's lifetime.
    head: Idx,
    /// Tail slot index. No outgoing links; its key bounds the legal domain.
    tail: Idx,
    /// Highest level currently holding a real node.
    level: usize,
    /// Highest level any node may ever reach. Fixed at construction.
    max_level: usize,
    /// Number of stored pairs.
    len: usize,
    /// Promotion threshold: a draw below this grants one more level.
    cut_off: u32,
    /// Injected generator for level assignment.
    rng: R,
    /// Predecessor scratch, one slot per level. Valid only immediately
    /// after a locate on this instance; never persisted state.
    update: Box<[Idx]>,
}

impl<K, V, R, Idx> SkipList<K, V, R, Idx>
where
    K: Ord,
    R: RngCore,
    Idx: Index,
{
    /// Creates an empty list accepting keys strictly below `large_key`.
    ///
    /// `max_pairs` sizes the level structure: the cap on node heights is
    /// `ceil(ln(max_pairs) / ln(1/prob)) - 1`, clamped to at least zero.
    /// It also pre-sizes the arena, but insertion past it simply grows the
    /// storage. Higher `prob` means taller nodes on average: faster
    /// expected search, more link memory per node.
    ///
    /// # Panics
    ///
    /// Panics if `prob` is outside `(0, 1)` or `max_pairs` is zero.
    pub fn new(large_key: K, max_pairs: usize, prob: f64, rng: R) -> Self
    where
        K: Clone,
    {
        assert!(0.0 < prob && prob < 1.0, "prob must be in (0, 1)");
        assert!(max_pairs > 0, "max_pairs must be > 0");

        let max_level = level_cap(max_pairs, prob);

        // Sentinels first, so they land in slots 0 and 1 and stay there.
        let mut arena = Arena::with_capacity(max_pairs + 2);
        let head: Idx = arena.insert(SkipNode::new(large_key.clone(), None, max_level + 1));
        let tail = arena.insert(SkipNode::new(large_key, None, 0));
        debug_assert_eq!(head.as_usize(), 0);
        debug_assert_eq!(tail.as_usize(), 1);

        // Empty-list state: every level's chain is header -> tail.
        for slot in arena.get_mut(head).expect("header slot").forward.iter_mut() {
            *slot = tail;
        }

        Self {
            arena,
            head,
            tail,
            level: 0,
            max_level,
            len: 0,
            cut_off: (prob * u32::MAX as f64) as u32,
            rng,
            update: vec![Idx::NONE; max_level + 1].into_boxed_slice(),
        }
    }

    /// Returns the number of stored pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the highest level any node may reach. Fixed for the
    /// list's lifetime.
    #[inline]
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Returns the reserved upper-bound key.
    ///
    /// Legal keys are strictly below this; the bound itself can never be
    /// stored or found.
    #[inline]
    pub fn large_key(&self) -> &K {
        self.tail_key()
    }

    /// Returns `true` if the list contains `key`.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Returns a reference to the value for `key`, or `None` if absent
    /// or out of domain.
    pub fn find(&self, key: &K) -> Option<&V> {
        if key >= self.tail_key() {
            return None;
        }

        let landing = self.descend(key);
        let node = self.arena.get(landing).expect("landing slot");
        if node.key == *key {
            node.value.as_ref()
        } else {
            None
        }
    }

    /// Returns a mutable reference to the value for `key`, or `None` if
    /// absent or out of domain.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        if key >= self.tail_key() {
            return None;
        }

        let landing = self.descend(key);
        let node = self.arena.get_mut(landing).expect("landing slot");
        if node.key == *key {
            node.value.as_mut()
        } else {
            None
        }
    }

    /// Inserts a pair, overwriting the value if `key` is already present.
    ///
    /// Returns the previous value on overwrite. Keys at or above the
    /// reserved bound cannot be represented: the pair is silently dropped
    /// and `None` is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if &key >= self.tail_key() {
            return None;
        }

        let candidate = self.locate(&key);
        let node = self.arena.get_mut(candidate).expect("candidate slot");
        if node.key == key {
            return node.value.replace(value);
        }

        let new_level = self.random_level();
        if new_level > self.level {
            // Nothing real exists up there yet, so the header is the
            // predecessor at every newly opened level.
            for slot in &mut self.update[self.level + 1..=new_level] {
                *slot = self.head;
            }
            self.level = new_level;
        }

        // Take over each predecessor's successor before touching the
        // chains, then splice in one pass.
        let mut node = SkipNode::new(key, Some(value), new_level + 1);
        for (i, slot) in node.forward.iter_mut().enumerate() {
            *slot = self
                .arena
                .get(self.update[i])
                .expect("predecessor slot")
                .forward[i];
        }
        let idx = self.arena.insert(node);
        for i in 0..=new_level {
            self.arena
                .get_mut(self.update[i])
                .expect("predecessor slot")
                .forward[i] = idx;
        }

        self.len += 1;
        None
    }

    /// Removes the pair for `key` and returns its value.
    ///
    /// Absent and out-of-domain keys are no-ops returning `None`; erasing
    /// the same key twice is safe.
    pub fn erase(&mut self, key: &K) -> Option<V> {
        if key >= self.tail_key() {
            return None;
        }

        let candidate = self.locate(key);
        if self.arena.get(candidate).expect("candidate slot").key != *key {
            return None;
        }

        // Unlink from the bottom up, stopping at the first level where the
        // candidate is no longer the immediate successor: by the subset
        // invariant it cannot be linked above that point.
        let mut i = 0;
        while i <= self.level
            && self
                .arena
                .get(self.update[i])
                .expect("predecessor slot")
                .forward[i]
                == candidate
        {
            let next = self.arena.get(candidate).expect("candidate slot").forward[i];
            self.arena
                .get_mut(self.update[i])
                .expect("predecessor slot")
                .forward[i] = next;
            i += 1;
        }

        // Drop levels whose chain is back to header -> tail.
        while self.level > 0
            && self.arena.get(self.head).expect("header slot").forward[self.level] == self.tail
        {
            self.level -= 1;
        }

        self.len -= 1;
        let node = self.arena.remove(candidate).expect("candidate slot");
        node.value
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    #[inline]
    fn tail_key(&self) -> &K {
        &self.arena.get(self.tail).expect("tail slot").key
    }

    /// Read-only descent: returns the first node (possibly the tail) whose
    /// key is `>= key`. Requires `key` strictly below the tail key.
    fn descend(&self, key: &K) -> Idx {
        let mut before = self.head;
        for i in (0..=self.level).rev() {
            // Safety: live forward links only ever hold occupied slots, and
            // the tail key bound guarantees the walk stops at or before the
            // tail without indexing its (empty) link array.
            let mut next = unsafe { self.arena.get_unchecked(before) }.forward[i];
            while unsafe { self.arena.get_unchecked(next) }.key < *key {
                before = next;
                next = unsafe { self.arena.get_unchecked(before) }.forward[i];
            }
        }

        unsafe { self.arena.get_unchecked(before) }.forward[0]
    }

    /// Mutating-path descent: additionally records, per level, the rightmost
    /// node with a key below `key` into the scratch buffer. Requires `key`
    /// strictly below the tail key.
    fn locate(&mut self, key: &K) -> Idx {
        let mut before = self.head;
        for i in (0..=self.level).rev() {
            // Safety: as in `descend`.
            let mut next = unsafe { self.arena.get_unchecked(before) }.forward[i];
            while unsafe { self.arena.get_unchecked(next) }.key < *key {
                before = next;
                next = unsafe { self.arena.get_unchecked(before) }.forward[i];
            }
            self.update[i] = before;
        }

        unsafe { self.arena.get_unchecked(self.update[0]) }.forward[0]
    }

    /// Draws a level in `[0, max_level]`: a truncated geometric where each
    /// extra level is granted while a uniform draw falls below the cutoff.
    fn random_level(&mut self) -> usize {
        let mut level = 0;
        while level < self.max_level && self.rng.next_u32() < self.cut_off {
            level += 1;
        }
        level
    }
}

/// Derives the level cap from the capacity hint and promotion probability,
/// clamped to zero for degenerate combinations (e.g. `max_pairs == 1`).
fn level_cap(max_pairs: usize, prob: f64) -> usize {
    let raw = ((max_pairs as f64).ln() / (1.0 / prob).ln()).ceil() as isize - 1;
    raw.max(0) as usize
}
