//! Reconciling selection changes made outside the paginator
//!
//! A host that owns the selected page may change it without going through
//! [`Paginator::navigate`](crate::Paginator::navigate). Small moves slide
//! the window; a jump of more than one page past either edge rebuilds it.

use crate::navigation::Direction;
use crate::window::{slide_window, VisibleWindow};

/// What the paginator should do with an external selection change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Selection left the window by more than one page; rebuild anchored here
    Reinitialize { anchor_id: usize },
    /// Select `selected_id` and replace the window
    Slide {
        selected_id: usize,
        window: VisibleWindow,
    },
    /// Nothing to apply
    Unchanged,
}

/// Decide how to follow a selection change from `previous_id` to `new_id`.
///
/// Both ids are clamped to the page count first. A `previous_id` of 0 means
/// there was no previous selection and only the far-jump check applies.
pub fn reconcile(
    new_id: usize,
    previous_id: usize,
    total_pages: usize,
    window: VisibleWindow,
    range_limit: Option<usize>,
) -> Reconciliation {
    if total_pages == 0 {
        return Reconciliation::Unchanged;
    }
    let (Some(first_id), Some(last_id)) = (window.first_id(), window.last_id()) else {
        return Reconciliation::Unchanged;
    };

    let new_id = new_id.clamp(1, total_pages);
    let previous_id = previous_id.min(total_pages);

    if new_id > last_id + 1 || new_id + 1 < first_id {
        return Reconciliation::Reinitialize { anchor_id: new_id };
    }

    if previous_id == 0 {
        return Reconciliation::Unchanged;
    }

    let direction = Direction::between(new_id, previous_id);
    Reconciliation::Slide {
        selected_id: new_id,
        window: slide_window(window, total_pages, range_limit, new_id, direction),
    }
}
