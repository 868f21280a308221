use std::collections::HashSet;

use smallvec::SmallVec;

use crate::term::GoTermId;

/// A set of [`GoTermId`]s
///
/// Each term can occur only once in the group. The group is kept sorted,
/// so iteration yields ascending term ids. Most features carry only a
/// handful of GO annotations, so the ids are stored inline.
#[derive(Debug, Default, Clone)]
pub struct GoGroup {
    ids: SmallVec<[GoTermId; 8]>,
}

impl GoGroup {
    /// Constructs a new, empty [`GoGroup`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the group contains no [`GoTermId`]s
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the number of [`GoTermId`]s in the group
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Adds a new [`GoTermId`] to the group
    ///
    /// Returns whether the `GoTermId` was newly inserted. That is:
    ///
    /// - If the group did not previously contain this `GoTermId`, true is returned.
    /// - If the group already contained this `GoTermId`, false is returned.
    ///
    pub fn insert(&mut self, id: GoTermId) -> bool {
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(idx) => {
                self.ids.insert(idx, id);
                true
            }
        }
    }

    /// Returns `true` if the group contains the [`GoTermId`]
    pub fn contains(&self, id: &GoTermId) -> bool {
        self.ids.binary_search(id).is_ok()
    }

    /// Returns an iterator of the [`GoTermId`]s inside the group
    pub fn iter(&self) -> std::slice::Iter<'_, GoTermId> {
        self.ids.iter()
    }
}

impl From<HashSet<GoTermId>> for GoGroup {
    fn from(s: HashSet<GoTermId>) -> Self {
        let mut group = GoGroup::new();
        for id in s {
            group.insert(id);
        }
        group
    }
}

impl FromIterator<GoTermId> for GoGroup {
    fn from_iter<T: IntoIterator<Item = GoTermId>>(iter: T) -> Self {
        let mut group = GoGroup::new();
        for id in iter {
            group.insert(id);
        }
        group
    }
}

impl<'a> IntoIterator for &'a GoGroup {
    type Item = &'a GoTermId;
    type IntoIter = std::slice::Iter<'a, GoTermId>;
    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_deduplicates() {
        let mut group = GoGroup::new();
        assert!(group.insert(GoTermId::from(1)));
        assert!(group.insert(GoTermId::from(2)));
        assert!(!group.insert(GoTermId::from(1)));
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn iteration_is_sorted() {
        let mut group = GoGroup::new();
        group.insert(GoTermId::from(300));
        group.insert(GoTermId::from(1));
        group.insert(GoTermId::from(42));
        let ids: Vec<u32> = group.iter().map(GoTermId::as_u32).collect();
        assert_eq!(ids, vec![1, 42, 300]);
    }

    #[test]
    fn contains() {
        let group: GoGroup = [GoTermId::from(7)].into_iter().collect();
        assert!(group.contains(&GoTermId::from(7)));
        assert!(!group.contains(&GoTermId::from(8)));
        assert!(!group.is_empty());
    }
}
