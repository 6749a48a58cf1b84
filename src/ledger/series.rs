//! Sparse month-keyed series with carry-forward lookup.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::month::Month;

/// A sparse mapping from [`Month`] to a value, ordered by the month total
/// order so predecessor-or-equal lookup stays logarithmic.
///
/// An entry written at month `M` is treated as in effect for every month
/// `>= M` until superseded by a later entry ("carry-forward").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Series<T>(BTreeMap<Month, T>);

impl<T> Series<T> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, month: Month, value: T) {
        self.0.insert(month, value);
    }

    pub fn remove(&mut self, month: Month) -> Option<T> {
        self.0.remove(&month)
    }

    /// The exact entry recorded at `month`, if any.
    pub fn get(&self, month: Month) -> Option<&T> {
        self.0.get(&month)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The entry in effect at `month`: the exact entry if present,
    /// otherwise the closest strictly earlier one. Months that predate
    /// every recorded entry have no value in effect and return `None`.
    pub fn latest_at(&self, month: Month) -> Option<&T> {
        self.0.range(..=month).next_back().map(|(_, value)| value)
    }

    /// Entries recorded at or before `month`, oldest first.
    pub fn up_to(&self, month: Month) -> impl Iterator<Item = (&Month, &T)> {
        self.0.range(..=month)
    }
}

impl<T> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for Series<T> {
    type Item = (Month, T);
    type IntoIter = btree_map::IntoIter<Month, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T> FromIterator<(Month, T)> for Series<T> {
    fn from_iter<I: IntoIterator<Item = (Month, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
