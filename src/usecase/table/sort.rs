use std::cmp::Ordering;

use crate::domain::entities::table::{SortDirection, SortSpec};
use crate::usecase::table::adapter::TableAdapter;

/// Stable copy sort; descending reverses non-equal comparisons only, so
/// tied rows keep their input order in both directions.
pub fn sort_rows<A: TableAdapter>(rows: &[A::Row], spec: SortSpec<A::Field>) -> Vec<A::Row> {
    let mut ordered = rows.to_vec();
    ordered.sort_by(|left, right| {
        let ordering = A::compare(left, right, spec.field);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    ordered
}

/// Case-insensitive text comparison over lowercased code points; for the
/// dashboard's Cyrillic labels this follows the alphabet.
pub fn compare_text(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}

/// Numeric value of `#123`-style identifiers: leading non-digits are
/// stripped, the digit run is parsed, anything unparseable ranks as 0.
pub fn parse_row_id(value: &str) -> i64 {
    let digits: String = value
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
