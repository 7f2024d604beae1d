use crate::domain::datetime::same_calendar_day;
use crate::domain::entities::table::FilterCriteria;
use crate::usecase::table::adapter::TableAdapter;

/// Keeps the rows matching every active dimension under AND semantics.
/// Rows whose datetime cannot be parsed fail an active date filter.
pub fn filter_rows<A: TableAdapter>(
    rows: &[A::Row],
    criteria: &FilterCriteria<A::Dimension>,
) -> Vec<A::Row> {
    let query = criteria.query.trim().to_lowercase();

    rows.iter()
        .filter(|row| row_matches::<A>(row, criteria, &query))
        .cloned()
        .collect()
}

fn row_matches<A: TableAdapter>(
    row: &A::Row,
    criteria: &FilterCriteria<A::Dimension>,
    query: &str,
) -> bool {
    for (dimension, selected) in criteria.selections() {
        if !selected.contains(A::dimension_value(row, *dimension)) {
            return false;
        }
    }

    if let Some(date) = criteria.date {
        match A::row_date(row) {
            Some(instant) if same_calendar_day(instant, date) => {}
            _ => return false,
        }
    }

    if query.is_empty() {
        return true;
    }

    A::search_text(row).to_lowercase().contains(query)
}
