//! Sentinel-based index trait for arena slots.
//!
//! Forward links in skip list nodes are stored as plain integers rather than
//! `Option<Idx>`, with one reserved value (`NONE`) standing in for "unset".
//! This keeps a node's link array at one word per level and lets the index
//! type shrink to `u32` or `u16` when the arena is known to stay small.

/// A copyable arena-slot index with a reserved "unset" value.
///
/// Live links always refer to an occupied arena slot; `NONE` only ever
/// appears in forward slots that have not been spliced yet.
///
/// # Example
///
/// ```
/// use skipdict::Index;
///
/// let slot: u32 = 7;
/// assert!(slot.is_some());
/// assert!(u32::NONE.is_none());
/// ```
pub trait Index: Copy + Eq {
    /// Reserved value representing an unset slot.
    ///
    /// For the provided integer impls this is the type's `MAX`, which the
    /// arena never hands out as a real index.
    const NONE: Self;

    /// Returns `true` if this is the reserved unset value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this refers to a real slot.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the index as a `usize`, for slot lookup.
    fn as_usize(self) -> usize;

    /// Creates an index from a `usize` assigned by the arena.
    fn from_usize(val: usize) -> Self;
}

macro_rules! impl_index_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }
            }
        )*
    };
}

impl_index_for_unsigned!(u16, u32, u64, usize);
