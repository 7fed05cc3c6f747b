// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistent stacking order.

use alloc::vec::Vec;
use core::fmt;

/// Error returned when building a [`ZOrder`] from keys that repeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DuplicateKeyError {
    /// Index of the second occurrence.
    pub index: usize,
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "z-order key at index {} is a duplicate", self.index)
    }
}

impl core::error::Error for DuplicateKeyError {}

/// Back-to-front sequence of unique shape keys.
///
/// The `moved_*` methods leave `self` untouched and return a new ordering,
/// so a caller can keep the previous ordering for undo or for diffing. A move
/// that changes nothing (an absent key, or a key already at the requested
/// place) returns an equal ordering with the same revision.
///
/// The revision counter is local to one lineage of orderings: every
/// ordering derived from another by a real change has a revision one
/// higher than its source.
///
/// ```rust
/// use easel_layers::ZOrder;
///
/// let order = ZOrder::try_from(vec!['a', 'b', 'c']).unwrap();
/// let raised = order.moved_to_front(&'a');
///
/// assert_eq!(order.as_slice(), &['a', 'b', 'c']);
/// assert_eq!(raised.as_slice(), &['b', 'c', 'a']);
/// assert_eq!(raised.revision(), order.revision() + 1);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "Vec<K>",
        into = "Vec<K>",
        bound(
            serialize = "K: Clone + serde::Serialize",
            deserialize = "K: PartialEq + serde::Deserialize<'de>"
        )
    )
)]
pub struct ZOrder<K> {
    keys: Vec<K>,
    revision: u64,
}

impl<K> Default for ZOrder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ZOrder<K> {
    /// Creates an empty ordering.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            revision: 0,
        }
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The keys, back to front.
    #[must_use]
    pub fn as_slice(&self) -> &[K] {
        &self.keys
    }

    /// Iterates back to front, the order to paint in.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.keys.iter()
    }

    /// Iterates front to back, the order to hit test in.
    pub fn iter_front_to_back(&self) -> core::iter::Rev<core::slice::Iter<'_, K>> {
        self.keys.iter().rev()
    }

    /// The frontmost key.
    #[must_use]
    pub fn front(&self) -> Option<&K> {
        self.keys.last()
    }

    /// The backmost key.
    #[must_use]
    pub fn back(&self) -> Option<&K> {
        self.keys.first()
    }

    /// Returns the change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K: PartialEq> ZOrder<K> {
    /// Index of `key` counted from the back, if present.
    #[must_use]
    pub fn position(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Returns `true` if `key` is in the ordering.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Places `key` in front of everything else.
    ///
    /// Returns `false`, leaving the ordering unchanged, if `key` is already present.
    pub fn push(&mut self, key: K) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.keys.push(key);
        self.bump_revision();
        true
    }

    /// Removes `key`, returning `true` if it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.position(key) {
            Some(idx) => {
                self.keys.remove(idx);
                self.bump_revision();
                true
            }
            None => false,
        }
    }
}

impl<K: Clone + PartialEq> ZOrder<K> {
    /// A new ordering with `key` in front of everything else.
    #[must_use]
    pub fn moved_to_front(&self, key: &K) -> Self {
        self.moved(key, |_, len| len - 1)
    }

    /// A new ordering with `key` behind everything else.
    #[must_use]
    pub fn moved_to_back(&self, key: &K) -> Self {
        self.moved(key, |_, _| 0)
    }

    /// A new ordering with `key` swapped with its neighbor in front.
    #[must_use]
    pub fn moved_up(&self, key: &K) -> Self {
        self.moved(key, |idx, len| (idx + 1).min(len - 1))
    }

    /// A new ordering with `key` swapped with its neighbor behind.
    #[must_use]
    pub fn moved_down(&self, key: &K) -> Self {
        self.moved(key, |idx, _| idx.saturating_sub(1))
    }

    /// `target` maps `(index, len)` to the destination index; `len` is at least 1.
    fn moved(&self, key: &K, target: impl FnOnce(usize, usize) -> usize) -> Self {
        let Some(idx) = self.position(key) else {
            return self.clone();
        };
        let to = target(idx, self.keys.len());
        if to == idx {
            return self.clone();
        }
        let mut next = self.clone();
        let moving = next.keys.remove(idx);
        next.keys.insert(to, moving);
        next.bump_revision();
        next
    }
}

/// Orderings are equal when they hold the same keys in the same order;
/// revisions are not compared.
impl<K: PartialEq> PartialEq for ZOrder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl<K: Eq> Eq for ZOrder<K> {}

impl<K: PartialEq> TryFrom<Vec<K>> for ZOrder<K> {
    type Error = DuplicateKeyError;

    /// Builds an ordering from keys listed back to front.
    fn try_from(keys: Vec<K>) -> Result<Self, Self::Error> {
        for (index, key) in keys.iter().enumerate() {
            if keys[..index].contains(key) {
                return Err(DuplicateKeyError { index });
            }
        }
        Ok(Self { keys, revision: 0 })
    }
}

impl<K> From<ZOrder<K>> for Vec<K> {
    fn from(order: ZOrder<K>) -> Self {
        order.keys
    }
}

impl<'a, K> IntoIterator for &'a ZOrder<K> {
    type Item = &'a K;
    type IntoIter = core::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
