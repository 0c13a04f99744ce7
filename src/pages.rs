//! Pages and page-list construction

use serde::Serialize;

/// One selectable page, ids are 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: usize,
    pub is_selected: bool,
}

impl Page {
    pub fn new(id: usize, is_selected: bool) -> Self {
        Self { id, is_selected }
    }
}

/// Build the full page list `1..=total_pages`.
///
/// The page matching `selected_id` is marked selected, page 1 when no
/// selection is given. Zero pages yields an empty list.
pub fn build_pages(total_pages: usize, selected_id: Option<usize>) -> Vec<Page> {
    let selected_id = selected_id.unwrap_or(1);
    (1..=total_pages)
        .map(|id| Page::new(id, id == selected_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pages_empty() {
        assert!(build_pages(0, None).is_empty());
        assert!(build_pages(0, Some(3)).is_empty());
    }

    #[test]
    fn test_build_pages_ids_in_order() {
        let pages = build_pages(3, Some(2));
        let ids: Vec<usize> = pages.iter().map(|page| page.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_build_pages_selection() {
        let pages = build_pages(2, None);
        assert!(pages[0].is_selected);
        assert!(!pages[1].is_selected);

        let pages = build_pages(2, Some(2));
        assert!(!pages[0].is_selected);
        assert!(pages[1].is_selected);
    }
}
