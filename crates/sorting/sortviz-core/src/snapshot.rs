//! Value-semantic snapshots of the array being sorted.

use serde::{Deserialize, Serialize};

/// An ordered sequence of integers captured at one moment of a sort.
///
/// Snapshots are plain values: cloning yields storage independent of the
/// original, so recorded steps never alias the working array. Serializes as
/// a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArraySnapshot(Vec<i32>);

impl ArraySnapshot {
    /// Create a snapshot from explicit values.
    #[inline]
    pub fn new(values: Vec<i32>) -> Self {
        Self(values)
    }

    /// Snapshot with no elements.
    #[inline]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying values.
    #[inline]
    pub fn values(&self) -> &[i32] {
        &self.0
    }

    /// Value at `index`, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.0.get(index).copied()
    }

    /// Append a value.
    #[inline]
    pub fn push(&mut self, value: i32) {
        self.0.push(value);
    }

    /// Exchange the values at `i` and `j`.
    ///
    /// Panics when either index is out of range.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Largest value, or `None` for an empty snapshot.
    #[inline]
    pub fn max_value(&self) -> Option<i32> {
        self.0.iter().copied().max()
    }

    /// Whether the values are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Whether `other` holds the same values with the same multiplicities.
    pub fn is_permutation_of(&self, other: &ArraySnapshot) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        let mut lhs = self.0.clone();
        let mut rhs = other.0.clone();
        lhs.sort_unstable();
        rhs.sort_unstable();
        lhs == rhs
    }
}

impl From<Vec<i32>> for ArraySnapshot {
    fn from(values: Vec<i32>) -> Self {
        Self(values)
    }
}

impl From<&[i32]> for ArraySnapshot {
    fn from(values: &[i32]) -> Self {
        Self(values.to_vec())
    }
}

impl From<ArraySnapshot> for Vec<i32> {
    fn from(snapshot: ArraySnapshot) -> Self {
        snapshot.0
    }
}

impl std::ops::Index<usize> for ArraySnapshot {
    type Output = i32;

    #[inline]
    fn index(&self, index: usize) -> &i32 {
        &self.0[index]
    }
}

impl std::ops::IndexMut<usize> for ArraySnapshot {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        &mut self.0[index]
    }
}
