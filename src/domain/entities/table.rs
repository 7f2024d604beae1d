use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: PartialEq> SortSpec<F> {
    pub fn ascending(field: F) -> Self {
        SortSpec {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn descending(field: F) -> Self {
        SortSpec {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Header-click protocol: re-selecting the active field flips the
    /// direction, selecting a new field starts ascending.
    pub fn toggled(self, field: F) -> Self {
        if field == self.field {
            SortSpec {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            SortSpec::ascending(field)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

/// Active filter state for one table: selected values per categorical
/// dimension, an optional calendar-day match and a free-text query.
///
/// A dimension with no entry includes every row; an entry holding an empty
/// set excludes every row (nothing checked means nothing shown). Callers
/// seed dimensions with all values selected so the default view is
/// unfiltered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria<D: Ord> {
    selections: BTreeMap<D, BTreeSet<String>>,
    pub date: Option<NaiveDate>,
    pub query: String,
}

impl<D: Ord> FilterCriteria<D> {
    pub fn new() -> Self {
        FilterCriteria {
            selections: BTreeMap::new(),
            date: None,
            query: String::new(),
        }
    }

    pub fn select(&mut self, dimension: D, values: BTreeSet<String>) {
        self.selections.insert(dimension, values);
    }

    pub fn clear_selection(&mut self, dimension: &D) {
        self.selections.remove(dimension);
    }

    pub fn selection(&self, dimension: &D) -> Option<&BTreeSet<String>> {
        self.selections.get(dimension)
    }

    pub fn selections(&self) -> impl Iterator<Item = (&D, &BTreeSet<String>)> {
        self.selections.iter()
    }
}

impl<D: Ord> Default for FilterCriteria<D> {
    fn default() -> Self {
        FilterCriteria::new()
    }
}

/// Derived view handed to the rendering collaborator: the visible row
/// slice plus everything a pager and sort indicators need.
#[derive(Debug, Clone)]
pub struct TableView<R, F> {
    pub visible_rows: Vec<R>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub page_tokens: Vec<PageToken>,
    pub sort: SortSpec<F>,
}
