//! src/model/view_state.rs
//! ============================================================================
//! # ViewState: Search, Filter, and Sort Configuration + View Pipeline
//!
//! Pure derivation of the displayed list: filter by search query and type,
//! then stable-sort by the active key. The dataset is a few hundred entries
//! at most, so the whole view is recomputed on every state change.

use std::cmp::Ordering;

use crate::catalog::entry::{FileCategory, FileEntry};
use crate::catalog::store::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Category(FileCategory),
}

impl TypeFilter {
    pub fn matches(self, category: FileCategory) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Category(wanted) => category == wanted,
        }
    }

    /// Advance to the next filter chip: all -> video -> archive -> ... -> all.
    pub fn next(self) -> Self {
        match self {
            TypeFilter::All => TypeFilter::Category(FileCategory::ALL[0]),
            TypeFilter::Category(current) => {
                let idx = FileCategory::ALL
                    .iter()
                    .position(|c| *c == current)
                    .unwrap_or(FileCategory::ALL.len() - 1);
                match FileCategory::ALL.get(idx + 1) {
                    Some(next) => TypeFilter::Category(*next),
                    None => TypeFilter::All,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Type,
    Size,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Search/filter/sort configuration for the file table.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub query: String,
    pub filter: TypeFilter,
    pub sort_key: SortKey,
    pub sort_dir: SortDirection,
}

impl ViewState {
    /// Fresh downloads first, like the original board.
    pub fn new() -> Self {
        Self {
            query: String::new(),
            filter: TypeFilter::All,
            sort_key: SortKey::Date,
            sort_dir: SortDirection::Descending,
        }
    }

    /// Clicking the active column flips direction; a new column sorts
    /// ascending.
    pub fn set_sort(&mut self, key: SortKey) {
        if self.sort_key == key && self.sort_dir == SortDirection::Ascending {
            self.sort_dir = SortDirection::Descending;
        } else {
            self.sort_key = key;
            self.sort_dir = SortDirection::Ascending;
        }
    }

    /// Reset the search query and the type filter to defaults.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.filter = TypeFilter::All;
    }

    pub fn has_active_filter(&self) -> bool {
        !self.query.is_empty() || self.filter != TypeFilter::All
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive the displayed, ordered list from the catalog and view state.
///
/// The sort is stable and the descending direction reverses the comparator
/// result rather than the sorted list, so tied entries keep their filter
/// (catalog) order under both directions.
pub fn visible<'a>(catalog: &'a Catalog, view: &ViewState) -> Vec<&'a FileEntry> {
    let needle = view.query.to_lowercase();
    let mut rows: Vec<&FileEntry> = catalog
        .iter()
        .filter(|e| view.filter.matches(e.category))
        .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
        .collect();

    rows.sort_by(|a, b| {
        let ord = compare(a, b, view.sort_key);
        match view.sort_dir {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    rows
}

/// Comparator for one sort key. Name/type comparison is case-insensitive
/// lexical with a raw tie-break (no locale collation in the stack).
fn compare(a: &FileEntry, b: &FileEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
        SortKey::Type => a.category.as_str().cmp(b.category.as_str()),
        SortKey::Size => a.size_bytes().cmp(&b.size_bytes()),
        SortKey::Date => a.date_stamp().cmp(&b.date_stamp()),
    }
}

// ------------------------------------------------------------------------- //
// Tests
// ------------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::seed_entries;

    fn entry(id: &str, name: &str, category: FileCategory, size: &str, date: &str) -> FileEntry {
        FileEntry {
            id: id.to_owned(),
            name: name.to_owned(),
            category,
            size_text: size.to_owned(),
            date_text: date.to_owned(),
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = Catalog::from_entries(seed_entries());
        let mut view = ViewState::new();
        view.query = "OFFICE".to_owned();

        let rows = visible(&catalog, &view);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "3");
    }

    #[test]
    fn type_filter_keeps_only_matching_category() {
        let catalog = Catalog::from_entries(seed_entries());
        let mut view = ViewState::new();
        view.filter = TypeFilter::Category(FileCategory::Video);
        view.sort_key = SortKey::Date;
        view.sort_dir = SortDirection::Ascending;

        let ids: Vec<&str> = visible(&catalog, &view).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "7"]);
    }

    #[test]
    fn view_is_subset_of_catalog() {
        let catalog = Catalog::from_entries(seed_entries());
        let mut view = ViewState::new();
        view.query = "a".to_owned();
        view.filter = TypeFilter::Category(FileCategory::Archive);

        for row in visible(&catalog, &view) {
            assert!(catalog.get(&row.id).is_some());
            assert!(row.name.to_lowercase().contains('a'));
            assert_eq!(row.category, FileCategory::Archive);
        }
    }

    #[test]
    fn size_sort_descending_orders_by_bytes() {
        let catalog = Catalog::from_entries(vec![
            entry("a", "small", FileCategory::Doc, "1 KB", "2023-01-01"),
            entry("b", "medium", FileCategory::Doc, "1 MB", "2023-01-01"),
            entry("c", "large", FileCategory::Doc, "1 GB", "2023-01-01"),
        ]);
        let mut view = ViewState::new();
        view.sort_key = SortKey::Size;
        view.sort_dir = SortDirection::Descending;

        let sizes: Vec<&str> = visible(&catalog, &view)
            .iter()
            .map(|e| e.size_text.as_str())
            .collect();
        assert_eq!(sizes, vec!["1 GB", "1 MB", "1 KB"]);
    }

    #[test]
    fn descending_reverses_non_ties_but_keeps_tie_order() {
        let catalog = Catalog::from_entries(vec![
            entry("a", "zz", FileCategory::Doc, "5 MB", "2023-01-01"),
            entry("b", "aa", FileCategory::Doc, "5 MB", "2023-01-02"),
            entry("c", "mm", FileCategory::Doc, "9 MB", "2023-01-03"),
        ]);
        let mut view = ViewState::new();
        view.sort_key = SortKey::Size;

        view.sort_dir = SortDirection::Ascending;
        let asc: Vec<&str> = visible(&catalog, &view).iter().map(|e| e.id.as_str()).collect();
        // a and b tie on size and keep catalog order.
        assert_eq!(asc, vec!["a", "b", "c"]);

        view.sort_dir = SortDirection::Descending;
        let desc: Vec<&str> = visible(&catalog, &view).iter().map(|e| e.id.as_str()).collect();
        // c moves to the front; the tied pair keeps catalog order.
        assert_eq!(desc, vec!["c", "a", "b"]);
    }

    #[test]
    fn malformed_size_sorts_as_zero() {
        let catalog = Catalog::from_entries(vec![
            entry("a", "fine", FileCategory::Doc, "1 KB", "2023-01-01"),
            entry("b", "broken", FileCategory::Doc, "???", "2023-01-01"),
        ]);
        let mut view = ViewState::new();
        view.sort_key = SortKey::Size;
        view.sort_dir = SortDirection::Ascending;

        let ids: Vec<&str> = visible(&catalog, &view).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn set_sort_toggles_direction_on_same_key() {
        let mut view = ViewState::new();
        view.set_sort(SortKey::Name);
        assert_eq!(view.sort_key, SortKey::Name);
        assert_eq!(view.sort_dir, SortDirection::Ascending);

        view.set_sort(SortKey::Name);
        assert_eq!(view.sort_dir, SortDirection::Descending);

        view.set_sort(SortKey::Size);
        assert_eq!(view.sort_key, SortKey::Size);
        assert_eq!(view.sort_dir, SortDirection::Ascending);
    }

    #[test]
    fn clear_filters_resets_query_and_filter() {
        let mut view = ViewState::new();
        view.query = "iso".to_owned();
        view.filter = TypeFilter::Category(FileCategory::Archive);
        assert!(view.has_active_filter());

        view.clear_filters();
        assert!(!view.has_active_filter());
        assert_eq!(view.filter, TypeFilter::All);
        assert!(view.query.is_empty());
    }

    #[test]
    fn filter_cycle_visits_every_category_and_wraps() {
        let mut filter = TypeFilter::All;
        let mut seen = Vec::new();
        for _ in 0..FileCategory::ALL.len() {
            filter = filter.next();
            match filter {
                TypeFilter::Category(c) => seen.push(c),
                TypeFilter::All => panic!("wrapped early"),
            }
        }
        assert_eq!(seen, FileCategory::ALL.to_vec());
        assert_eq!(filter.next(), TypeFilter::All);
    }
}
