//! Row selection keyed by row identity.

use std::collections::HashSet;
use std::hash::Hash;

/// The set of selected row identities.
///
/// Identities are mapped to display positions only when rendering or
/// reporting, so a selection stays attached to its rows when the table is
/// re-sorted.
#[derive(Debug, Clone)]
pub struct Selection<Id> {
    selected: HashSet<Id>,
}

impl<Id: Clone + Eq + Hash> Selection<Id> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }

    /// Check if a row is selected.
    pub fn contains(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    /// Flip membership of a row.
    ///
    /// Returns true if the row is selected afterwards.
    pub fn toggle(&mut self, id: Id) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Replace the selection with exactly the given rows.
    pub fn select_only<I: IntoIterator<Item = Id>>(&mut self, ids: I) {
        self.selected = ids.into_iter().collect();
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop identities that are not in `present`.
    ///
    /// Returns the number of identities removed.
    pub fn retain_present(&mut self, present: &HashSet<Id>) -> usize {
        let before = self.selected.len();
        self.selected.retain(|id| present.contains(id));
        before - self.selected.len()
    }

    /// Check if every given row is selected and there is at least one.
    pub fn covers<'a, I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = &'a Id>,
        Id: 'a,
    {
        let mut any = false;
        for id in ids {
            if !self.selected.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Get the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl<Id: Clone + Eq + Hash> Default for Selection<Id> {
    fn default() -> Self {
        Self::new()
    }
}
