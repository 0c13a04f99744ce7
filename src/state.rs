//! Read-only state snapshot handed to renderers

use serde::Serialize;

use crate::pages::Page;

/// Everything a renderer needs to draw the control strip.
///
/// Snapshots are rebuilt on request and never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub pages: Vec<Page>,
    pub visible_window: Vec<Page>,
    pub current_page_id: Option<usize>,
    pub has_next: bool,
    pub has_previous: bool,
    /// Greys out the `<` control
    pub previous_disabled: bool,
    /// Greys out the `>` control
    pub next_disabled: bool,
    pub error_text: Option<String>,
}

impl PaginationState {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Ids of the visible pages, in order
    pub fn visible_ids(&self) -> Vec<usize> {
        self.visible_window.iter().map(|page| page.id).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.pages.iter().filter(|page| page.is_selected).count()
    }
}
