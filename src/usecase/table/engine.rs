use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::entities::table::{FilterCriteria, SortSpec, TableView};
use crate::usecase::table::adapter::TableAdapter;
use crate::usecase::table::filter::filter_rows;
use crate::usecase::table::paginate::{
    build_page_tokens, clamp_page, paginate, total_pages, DEFAULT_PAGE_SIZE,
};
use crate::usecase::table::sort::sort_rows;

/// Stateful wrapper around the filter → sort → paginate pipeline; one
/// instance per data domain. Every mutation except `set_page` returns to
/// page 1, and `view` recomputes the whole derived state, so the current
/// page can never point past the filtered row set.
pub struct TableViewEngine<A: TableAdapter> {
    rows: Vec<A::Row>,
    criteria: FilterCriteria<A::Dimension>,
    sort: SortSpec<A::Field>,
    page_size: usize,
    page: usize,
}

impl<A: TableAdapter> TableViewEngine<A> {
    pub fn new(rows: Vec<A::Row>) -> Self {
        TableViewEngine {
            rows,
            criteria: FilterCriteria::new(),
            sort: A::default_sort(),
            page_size: DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }

    /// Replaces the source collection after a fresh load. Filter and sort
    /// state survive the reload; the page is clamped on the next `view`.
    pub fn set_rows(&mut self, rows: Vec<A::Row>) {
        self.rows = rows;
    }

    pub fn set_dimension_filter(&mut self, dimension: A::Dimension, values: BTreeSet<String>) {
        self.criteria.select(dimension, values);
        self.page = 1;
    }

    pub fn clear_dimension_filter(&mut self, dimension: A::Dimension) {
        self.criteria.clear_selection(&dimension);
        self.page = 1;
    }

    pub fn set_date_filter(&mut self, date: Option<NaiveDate>) {
        self.criteria.date = date;
        self.page = 1;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.page = 1;
    }

    /// Zero is clamped to 1 rather than rejected.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_sort(&mut self, field: A::Field) {
        self.sort = self.sort.toggled(field);
        self.page = 1;
    }

    pub fn criteria(&self) -> &FilterCriteria<A::Dimension> {
        &self.criteria
    }

    pub fn sort(&self) -> SortSpec<A::Field> {
        self.sort
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn view(&self) -> TableView<A::Row, A::Field> {
        let filtered = filter_rows::<A>(&self.rows, &self.criteria);
        let ordered = sort_rows::<A>(&filtered, self.sort);

        let pages = total_pages(ordered.len(), self.page_size);
        let current_page = clamp_page(self.page, pages);
        let slice = paginate(&ordered, self.page_size, current_page);

        TableView {
            total_items: ordered.len(),
            total_pages: pages,
            current_page,
            page_tokens: build_page_tokens(current_page, pages),
            start_index: slice.start_index,
            end_index: slice.end_index,
            visible_rows: slice.visible_rows,
            sort: self.sort,
        }
    }
}
