//! Visible window computation and sliding
//!
//! The window is the contiguous run of page ids rendered as clickable
//! controls. It is a small value type: every update replaces it.

use crate::navigation::Direction;
use crate::pages::Page;

/// Contiguous run of page ids `start..start + len`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleWindow {
    start: usize,
    len: usize,
}

impl VisibleWindow {
    /// The window of an uninitialized or failed paginator
    pub const EMPTY: VisibleWindow = VisibleWindow { start: 0, len: 0 };

    /// Create a window of `len` pages starting at `first_id`
    pub fn new(first_id: usize, len: usize) -> Self {
        if len == 0 {
            return Self::EMPTY;
        }
        Self {
            start: first_id,
            len,
        }
    }

    pub fn first_id(&self) -> Option<usize> {
        (self.len > 0).then_some(self.start)
    }

    pub fn last_id(&self) -> Option<usize> {
        (self.len > 0).then(|| self.start + self.len - 1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: usize) -> bool {
        self.ids().contains(&id)
    }

    /// Page ids in the window, in order
    pub fn ids(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }

    /// Materialize the window's pages, marking `selected_id`
    pub fn pages(&self, selected_id: Option<usize>) -> Vec<Page> {
        self.ids()
            .map(|id| Page::new(id, Some(id) == selected_id))
            .collect()
    }
}

/// Compute the window for `total_pages` pages anchored at `anchor_id`.
///
/// An unset (or zero) limit, or one covering every page, shows the whole
/// list. Otherwise the window starts at the anchor unless fewer than
/// `range_limit` pages remain from it, in which case it is pinned to the
/// tail so it never comes up short near the end.
pub fn compute_window(
    total_pages: usize,
    anchor_id: usize,
    range_limit: Option<usize>,
) -> VisibleWindow {
    let limit = match range_limit {
        Some(limit) if limit > 0 && limit < total_pages => limit,
        _ => return VisibleWindow::new(1, total_pages),
    };

    let anchor_id = anchor_id.max(1);
    let remaining = (total_pages + 1).saturating_sub(anchor_id);
    let start = if anchor_id >= total_pages || remaining < limit {
        total_pages - limit + 1
    } else {
        anchor_id
    };

    VisibleWindow::new(start, limit)
}

/// Move the window so `new_id` is visible after travelling in `direction`.
///
/// Moving forward past the last visible page makes `new_id` the last
/// entry; moving backward before the first makes it the first entry.
/// Anything else, including [`Direction::Undefined`], keeps the window.
pub fn slide_window(
    window: VisibleWindow,
    total_pages: usize,
    range_limit: Option<usize>,
    new_id: usize,
    direction: Direction,
) -> VisibleWindow {
    let Some(limit) = range_limit.filter(|limit| *limit > 0) else {
        return window;
    };
    let (Some(first_id), Some(last_id)) = (window.first_id(), window.last_id()) else {
        return window;
    };

    match direction {
        Direction::Forward if new_id > last_id => {
            compute_window(total_pages, (new_id + 1).saturating_sub(limit), Some(limit))
        }
        Direction::Backward if new_id < first_id => {
            compute_window(total_pages, new_id, Some(limit))
        }
        _ => window,
    }
}

/// Whether more pages exist beyond either edge of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryFlags {
    pub has_previous: bool,
    pub has_next: bool,
}

impl BoundaryFlags {
    /// Flags for `current_id` with `window` over `total_pages` pages.
    ///
    /// Both flags are off when there is no selection or no window.
    pub fn compute(current_id: Option<usize>, total_pages: usize, window: &VisibleWindow) -> Self {
        let (Some(current_id), Some(first_id), Some(last_id)) =
            (current_id, window.first_id(), window.last_id())
        else {
            return Self::default();
        };
        if total_pages == 0 {
            return Self::default();
        }

        Self {
            has_previous: has_pages_previous(current_id, first_id),
            has_next: has_pages_next(current_id, total_pages, last_id),
        }
    }
}

/// Current page is not the last and the window does not reach it
pub fn has_pages_next(current_id: usize, last_page_id: usize, last_visible_id: usize) -> bool {
    current_id != last_page_id && last_visible_id != last_page_id
}

/// Current page is not the first and the window does not start at it
pub fn has_pages_previous(current_id: usize, first_visible_id: usize) -> bool {
    current_id != 1 && first_visible_id != 1
}
