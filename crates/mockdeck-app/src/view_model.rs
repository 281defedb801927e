//! Pure list-view derivations: filter, paginate, selection retention
//!
//! Everything here is recomputed from the source collections on each
//! render cycle; nothing is cached, so fetching an unchanged collection
//! twice yields identical projections.

use mockdeck_core::{StubMapping, UserRecord};

/// Default user-table page size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Case-insensitive substring filter over user name, or substring match of
/// the term against the id rendered as a string. An empty term passes
/// everything through in order.
pub fn filter_users<'a>(users: &'a [UserRecord], term: &str) -> Vec<&'a UserRecord> {
    if term.is_empty() {
        return users.iter().collect();
    }
    let needle = term.to_lowercase();
    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&needle) || user.id.to_string().contains(term)
        })
        .collect()
}

/// Case-insensitive substring filter over a stub's resolved URL and method.
pub fn filter_stubs<'a>(stubs: &'a [StubMapping], term: &str) -> Vec<&'a StubMapping> {
    if term.is_empty() {
        return stubs.iter().collect();
    }
    let needle = term.to_lowercase();
    stubs
        .iter()
        .filter(|stub| {
            stub.url()
                .map(|url| url.to_lowercase().contains(&needle))
                .unwrap_or(false)
                || stub.method().to_lowercase().contains(&needle)
        })
        .collect()
}

/// A projected page of a filtered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    /// Index of the first visible item (inclusive)
    pub start: usize,
    /// Index one past the last visible item
    pub end: usize,
    /// Total page count; at least 1 so the footer always reads "page X/Y"
    pub total_pages: usize,
}

/// Slice `[(page-1)*size, page*size)` clamped to the collection length.
///
/// `page` is 1-based; a page past the end projects an empty window rather
/// than panicking, and callers clamp via [`clamp_page`] after data changes.
pub fn paginate(len: usize, page: usize, page_size: usize) -> PageView {
    let page = page.max(1);
    let size = page_size.max(1);
    let total_pages = len.div_ceil(size).max(1);
    let start = (page - 1).saturating_mul(size).min(len);
    let end = (start + size).min(len);
    PageView {
        start,
        end,
        total_pages,
    }
}

/// Clamp a 1-based page index so it references a non-empty window when the
/// collection shrinks (e.g. after a delete or a narrower search).
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    let total_pages = len.div_ceil(page_size.max(1)).max(1);
    page.clamp(1, total_pages)
}

/// Selection retention across refetches.
///
/// Policy: keep the current selection if its id is still present.
/// Auto-select the first stub only while the user has never made or lost a
/// selection (`touched == false` and nothing selected yet). Once touched,
/// a vanished selection resolves to `None` - the panel never silently jumps
/// to a neighbour after a delete.
pub fn retain_selection(
    selected: Option<&str>,
    touched: bool,
    stubs: &[StubMapping],
) -> Option<String> {
    if let Some(id) = selected {
        if stubs.iter().any(|stub| stub.id() == Some(id)) {
            return Some(id.to_string());
        }
        return None;
    }
    if !touched {
        return stubs.iter().find_map(|stub| stub.id()).map(str::to_string);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: i64, name: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.to_string(),
            birthday: "1990-01-01".to_string(),
            createts: String::new(),
        }
    }

    fn stub(id: &str, url: &str) -> StubMapping {
        StubMapping::new(json!({
            "id": id,
            "request": { "method": "GET", "urlPath": url },
            "response": { "status": 200 }
        }))
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let users = vec![user(1, "Alice"), user(2, "Bob")];
        let hits = filter_users(&users, "lic");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Alice");

        let hits = filter_users(&users, "ALICE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Alice");
    }

    #[test]
    fn test_filter_matches_id_as_string() {
        let users = vec![user(12, "Alice"), user(3, "Bob"), user(120, "Carol")];
        let hits = filter_users(&users, "12");
        assert_eq!(hits.iter().map(|u| u.id).collect::<Vec<_>>(), vec![12, 120]);
    }

    #[test]
    fn test_empty_term_is_identity() {
        let users = vec![user(1, "Alice"), user(2, "Bob")];
        let hits = filter_users(&users, "");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn test_paginate_twelve_items_page_size_five() {
        // 12 filtered users, size 5: page 1 shows 0..5, page 3 shows 10..12
        let p1 = paginate(12, 1, 5);
        assert_eq!((p1.start, p1.end, p1.total_pages), (0, 5, 3));

        let p3 = paginate(12, 3, 5);
        assert_eq!((p3.start, p3.end, p3.total_pages), (10, 12, 3));
    }

    #[test]
    fn test_paginate_past_end_is_empty_window() {
        let p = paginate(12, 9, 5);
        assert_eq!(p.start, p.end);
        assert_eq!(p.total_pages, 3);
    }

    #[test]
    fn test_paginate_empty_collection() {
        let p = paginate(0, 1, 10);
        assert_eq!((p.start, p.end, p.total_pages), (0, 0, 1));
    }

    #[test]
    fn test_clamp_page_after_shrink() {
        assert_eq!(clamp_page(3, 12, 5), 3);
        assert_eq!(clamp_page(3, 6, 5), 2);
        assert_eq!(clamp_page(5, 0, 5), 1);
    }

    #[test]
    fn test_filter_stubs_on_url() {
        let stubs = vec![stub("a", "/api/users"), stub("b", "/health")];
        let hits = filter_stubs(&stubs, "USERS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), Some("a"));
    }

    #[test]
    fn test_filter_stubs_on_method() {
        let stubs = vec![stub("a", "/x"), stub("b", "/y")];
        assert_eq!(filter_stubs(&stubs, "get").len(), 2);
        assert_eq!(filter_stubs(&stubs, "post").len(), 0);
    }

    #[test]
    fn test_selection_kept_when_still_present() {
        // [A, B] with A selected; deleting B leaves A selected
        let remaining = vec![stub("a", "/a")];
        assert_eq!(
            retain_selection(Some("a"), true, &remaining),
            Some("a".to_string())
        );
    }

    #[test]
    fn test_selection_cleared_when_deleted() {
        // [A, B] with A selected; deleting A clears selection - it must not
        // silently jump to B
        let remaining = vec![stub("b", "/b")];
        assert_eq!(retain_selection(Some("a"), true, &remaining), None);
    }

    #[test]
    fn test_auto_select_first_only_before_any_interaction() {
        let stubs = vec![stub("a", "/a"), stub("b", "/b")];
        // Fresh panel: first load auto-selects the first stub
        assert_eq!(retain_selection(None, false, &stubs), Some("a".to_string()));
        // After the user has made or lost a selection, no re-auto-select
        assert_eq!(retain_selection(None, true, &stubs), None);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let users: Vec<UserRecord> = (1..=12).map(|i| user(i, &format!("user{i}"))).collect();
        let first: Vec<i64> = filter_users(&users, "user1").iter().map(|u| u.id).collect();
        let second: Vec<i64> = filter_users(&users, "user1").iter().map(|u| u.id).collect();
        assert_eq!(first, second);
        assert_eq!(paginate(first.len(), 1, 5), paginate(second.len(), 1, 5));
    }
}
