use crate::domain::entities::table::PageToken;

pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];
pub const DEFAULT_PAGE_SIZE: usize = 5;

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<R> {
    pub visible_rows: Vec<R>,
    pub start_index: usize,
    pub end_index: usize,
}

/// Window of the given page; an out-of-range page index is clamped before
/// slicing, so the result never exceeds `page_size` rows.
pub fn paginate<R: Clone>(rows: &[R], page_size: usize, page: usize) -> PageSlice<R> {
    let size = page_size.max(1);
    let current = clamp_page(page, total_pages(rows.len(), size));
    let start_index = (current - 1) * size;
    let end_index = (start_index + size).min(rows.len());

    PageSlice {
        visible_rows: rows[start_index..end_index].to_vec(),
        start_index,
        end_index,
    }
}

/// Pager display tokens, at most 7 slots. Small page counts list every
/// page; otherwise the first and last page stay visible and the window
/// around the current page is bridged with ellipses.
pub fn build_page_tokens(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    if total_pages <= 7 {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    if current_page <= 4 {
        return vec![
            PageToken::Page(1),
            PageToken::Page(2),
            PageToken::Page(3),
            PageToken::Page(4),
            PageToken::Page(5),
            PageToken::Ellipsis,
            PageToken::Page(total_pages),
        ];
    }

    if current_page >= total_pages - 3 {
        return vec![
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(total_pages - 4),
            PageToken::Page(total_pages - 3),
            PageToken::Page(total_pages - 2),
            PageToken::Page(total_pages - 1),
            PageToken::Page(total_pages),
        ];
    }

    vec![
        PageToken::Page(1),
        PageToken::Ellipsis,
        PageToken::Page(current_page - 1),
        PageToken::Page(current_page),
        PageToken::Page(current_page + 1),
        PageToken::Ellipsis,
        PageToken::Page(total_pages),
    ]
}
