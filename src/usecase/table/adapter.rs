use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDateTime;

use crate::domain::entities::table::SortSpec;

/// Per-domain configuration of the table pipeline: which fields are
/// searchable, which categorical dimensions can be filtered, where the
/// row date lives and how each sortable field compares.
pub trait TableAdapter {
    type Row: Clone;
    type Field: Copy + PartialEq + fmt::Debug;
    type Dimension: Copy + Ord + fmt::Debug;

    fn default_sort() -> SortSpec<Self::Field>;

    /// Concatenation of the plain-text fields eligible for substring
    /// search; matching lowercases both sides.
    fn search_text(row: &Self::Row) -> String;

    fn dimension_value(row: &Self::Row, dimension: Self::Dimension) -> &str;

    fn row_date(_row: &Self::Row) -> Option<NaiveDateTime> {
        None
    }

    fn compare(left: &Self::Row, right: &Self::Row, field: Self::Field) -> Ordering;
}

/// Dimension type for tables without categorical filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NoDimension {}
