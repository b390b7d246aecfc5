//! Filtering and pagination of the record collection.
//!
//! Everything here is a pure function of its arguments. Nothing is cached: the
//! projection is recomputed from the collection, the search query and the current
//! page whenever any of them changes.

use crate::model::User;

/// Records per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// True when the record's name or company name contains `query`, ignoring case.
///
/// The empty query matches every record. An absent field never matches a
/// non-empty query.
pub fn matches_query(user: &User, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [user.name(), user.company_name()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records matching `query`, in collection order.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    users.iter().filter(|user| matches_query(user, query)).collect()
}

/// `ceil(len / page_size)`, but never less than one page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// The window for 1-indexed `page`: positions `[size * (page - 1), size * page)`.
///
/// Out-of-range pages (including page 0) give an empty slice rather than being clamped.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// The filtered-then-paginated view of the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    /// Records on the current page.
    pub rows: Vec<&'a User>,
    /// Number of records that matched the query.
    pub filtered_len: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

/// Filter `users` by `query`, then select `page`.
pub fn project<'a>(users: &'a [User], query: &str, page: usize, page_size: usize) -> Projection<'a> {
    let filtered = filter_users(users, query);
    Projection {
        rows: page_slice(&filtered, page, page_size).to_vec(),
        filtered_len: filtered.len(),
        total_pages: total_pages(filtered.len(), page_size),
        current_page: page,
    }
}

/// One page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub number: usize,
    pub active: bool,
}

/// One control per page, the current one marked active.
pub fn page_controls(total_pages: usize, current_page: usize) -> Vec<PageControl> {
    (1..=total_pages)
        .map(|number| PageControl {
            number,
            active: number == current_page,
        })
        .collect()
}
