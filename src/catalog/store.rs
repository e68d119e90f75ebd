//! src/catalog/store.rs
//! ============================================================================
//! # Catalog: Pending Entries and the Selection Set
//!
//! Holds the session's mutable set of pending files, keyed by id with stable
//! insertion order (the transfer workflow walks entries in *catalog* order,
//! not display order), plus the set of selected ids.
//!
//! Invariant: the selection set is always a subset of the catalog's ids.
//! Removal drops an id from both collections in the same call.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::warn;

use crate::catalog::entry::FileEntry;

#[derive(Debug, Default, Clone)]
pub struct Catalog {
    entries: IndexMap<String, FileEntry>,
    selected: HashSet<String>,
}

impl Catalog {
    /// Build a catalog from seed entries. Duplicate ids are rejected with a
    /// warning; the first occurrence wins.
    pub fn from_entries(seed: Vec<FileEntry>) -> Self {
        let mut entries: IndexMap<String, FileEntry> = IndexMap::with_capacity(seed.len());
        for entry in seed {
            if entries.contains_key(&entry.id) {
                warn!("duplicate catalog id {:?}, keeping first", entry.id);
                continue;
            }
            entries.insert(entry.id.clone(), entry);
        }
        Self {
            entries,
            selected: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FileEntry> {
        self.entries.get(id)
    }

    /// Entries in catalog (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.values()
    }

    /// Remove an entry and, atomically, its selection mark.
    pub fn remove(&mut self, id: &str) -> Option<FileEntry> {
        self.selected.remove(id);
        // shift_remove keeps the relative order of the remaining entries.
        self.entries.shift_remove(id)
    }

    // --- Selection coordinator ---------------------------------------- //

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Flip selection membership for `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        if !self.entries.contains_key(id) {
            return;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.to_owned());
        }
    }

    /// Toggle selection over the currently visible view: if every visible id
    /// is already selected, deselect them all; otherwise select them all.
    /// Selections outside `visible` are preserved either way.
    pub fn toggle_select_all<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        let all_selected = self.all_selected(visible.clone());
        for id in visible {
            if all_selected {
                self.selected.remove(id);
            } else if self.entries.contains_key(id) {
                self.selected.insert(id.to_owned());
            }
        }
    }

    /// True when the view is non-empty and every visible entry is selected.
    pub fn all_selected<'a, I>(&self, visible: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut any = false;
        for id in visible {
            any = true;
            if !self.selected.contains(id) {
                return false;
            }
        }
        any
    }

    /// True when some, but not all, visible entries are selected.
    pub fn indeterminate<'a, I>(&self, visible: I) -> bool
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        !self.all_selected(visible.clone())
            && visible.into_iter().any(|id| self.selected.contains(id))
    }

    /// Selected ids in catalog iteration order (the order the transfer
    /// workflow processes them in).
    pub fn selected_in_order(&self) -> Vec<String> {
        self.entries
            .keys()
            .filter(|id| self.selected.contains(*id))
            .cloned()
            .collect()
    }

    /// Total byte count of the current selection. Malformed size literals
    /// contribute zero, matching the size codec's silent-failure policy.
    pub fn selected_bytes(&self) -> u64 {
        self.entries
            .values()
            .filter(|entry| self.selected.contains(&entry.id))
            .map(FileEntry::size_bytes)
            .sum()
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

// ------------------------------------------------------------------------- //
// Tests
// ------------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::{FileCategory, seed_entries};
    use crate::catalog::size::parse_size;

    fn catalog() -> Catalog {
        Catalog::from_entries(seed_entries())
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let mut seed = seed_entries();
        let mut dupe = seed[0].clone();
        dupe.name = "impostor.bin".to_owned();
        seed.push(dupe);

        let cat = Catalog::from_entries(seed);
        assert_eq!(cat.len(), 7);
        assert_eq!(cat.get("1").map(|e| e.category), Some(FileCategory::Video));
    }

    #[test]
    fn toggle_flips_membership_and_ignores_unknown() {
        let mut cat = catalog();
        cat.toggle("2");
        assert!(cat.is_selected("2"));
        cat.toggle("2");
        assert!(!cat.is_selected("2"));

        cat.toggle("no-such-id");
        assert_eq!(cat.selected_count(), 0);
    }

    #[test]
    fn remove_drops_selection_atomically() {
        let mut cat = catalog();
        cat.toggle("3");
        assert!(cat.has_selection());

        let removed = cat.remove("3").expect("entry exists");
        assert_eq!(removed.id, "3");
        assert!(!cat.has_selection());
        assert!(cat.get("3").is_none());
    }

    #[test]
    fn select_all_is_a_toggle_over_the_view_only() {
        let mut cat = catalog();
        // A selection outside the view must survive both directions.
        cat.toggle("5");

        let view = ["1", "7"];
        cat.toggle_select_all(view.into_iter());
        assert!(cat.is_selected("1") && cat.is_selected("7") && cat.is_selected("5"));
        assert!(cat.all_selected(view.into_iter()));

        cat.toggle_select_all(view.into_iter());
        assert!(!cat.is_selected("1") && !cat.is_selected("7"));
        assert!(cat.is_selected("5"));
    }

    #[test]
    fn select_all_from_partial_selects_everything_visible() {
        let mut cat = catalog();
        let view = ["1", "2", "3"];
        cat.toggle("2");
        assert!(cat.indeterminate(view.into_iter()));

        cat.toggle_select_all(view.into_iter());
        assert!(cat.all_selected(view.into_iter()));
        assert!(!cat.indeterminate(view.into_iter()));
    }

    #[test]
    fn empty_view_is_never_all_selected() {
        let cat = catalog();
        assert!(!cat.all_selected(std::iter::empty()));
        assert!(!cat.indeterminate(std::iter::empty()));
    }

    #[test]
    fn selected_bytes_sums_only_the_selection() {
        let mut cat = catalog();
        assert_eq!(cat.selected_bytes(), 0);

        // Seed entry 2 is "2.1 GB", entry 4 is "145 MB".
        cat.toggle("2");
        cat.toggle("4");
        let expected = parse_size("2.1 GB") + parse_size("145 MB");
        assert_eq!(cat.selected_bytes(), expected);

        cat.remove("2");
        assert_eq!(cat.selected_bytes(), parse_size("145 MB"));
    }

    #[test]
    fn selected_in_order_follows_catalog_order() {
        let mut cat = catalog();
        cat.toggle("7");
        cat.toggle("2");
        cat.toggle("4");
        assert_eq!(cat.selected_in_order(), vec!["2", "4", "7"]);
    }
}
