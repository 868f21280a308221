//! The caller-supplied feature set of interest

use std::collections::HashSet;

use crate::annotations::FeatureId;

/// The subset of genome features whose enrichment is being tested
///
/// A `FeatureSet` typically holds the identifiers of e.g. differentially
/// expressed genes. It is supplied by the caller with every invocation of
/// the pipeline; features that are not part of the genome's universe are
/// ignored for counting purposes.
#[derive(Debug, Default, Clone)]
pub struct FeatureSet {
    inner: HashSet<FeatureId>,
}

impl FeatureSet {
    /// Constructs a new, empty `FeatureSet`
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a feature identifier to the set
    ///
    /// Returns whether the identifier was newly inserted.
    pub fn insert(&mut self, feature: FeatureId) -> bool {
        self.inner.insert(feature)
    }

    /// Returns the number of features in the set
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no features
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the set contains the given feature
    pub fn contains(&self, feature: &FeatureId) -> bool {
        self.inner.contains(feature)
    }

    /// Returns an iterator over the feature identifiers in the set
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, FeatureId> {
        self.inner.iter()
    }
}

impl FromIterator<FeatureId> for FeatureSet {
    fn from_iter<T: IntoIterator<Item = FeatureId>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for FeatureSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().map(FeatureId::from).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FeatureSet {
    type Item = &'a FeatureId;
    type IntoIter = std::collections::hash_set::Iter<'a, FeatureId>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
