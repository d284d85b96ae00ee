//! Insertion-ordered multi-selection of resources.
//!
//! The order of a [`Selection`] is the order in which ids were first added
//! (first click first), not the order of the catalog list. Clipboard and drag
//! output follow this order.

use crate::resource::Resource;

/// An insertion-ordered set of selected resource ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` at the end if absent, or remove it if present.
    ///
    /// Returns `true` when the id is selected after the call.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        match self.ids.iter().position(|existing| *existing == id) {
            Some(pos) => {
                self.ids.remove(pos);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        }
    }

    /// Check whether `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Look up the selected resources in selection order.
    ///
    /// Ids with no matching resource in `resources` are skipped.
    pub fn resolve<'a>(&self, resources: &'a [Resource]) -> Vec<&'a Resource> {
        self.ids
            .iter()
            .filter_map(|id| resources.iter().find(|r| &r.id == id))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    /// Toggle each id in turn, so repeated ids cancel out.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            selection.toggle(id);
        }
        selection
    }
}
