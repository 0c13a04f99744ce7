//! Mini-Pager: pagination state and windowing engine
//!
//! This crate tracks the selected page of a paginated view and decides
//! which contiguous run of page controls is shown:
//! - Lenient normalization of host-supplied configuration
//! - A fixed-size visible window that slides with the selection
//! - Reconciliation of selection changes made outside the engine
//! - WASM bindings for JavaScript hosts

pub mod config;
pub mod error;
pub mod navigation;
pub mod pages;
pub mod reconcile;
pub mod state;
pub mod wasm;
pub mod window;

// Re-export WASM types for direct use
pub use wasm::WasmPaginator;

// Re-export primary types
pub use config::{ConfigChanges, PageConfig, RawConfig, SelectionChange};
pub use error::PaginationError;
pub use navigation::{resolve_key, Control, Direction, Key, NavigationEvent, NavigationIntent};
pub use pages::{build_pages, Page};
pub use reconcile::{reconcile, Reconciliation};
pub use state::PaginationState;
pub use window::{compute_window, slide_window, BoundaryFlags, VisibleWindow};

use log::{debug, warn};
use serde_json::Value;

/// The pagination engine.
///
/// Holds the page count, the selected page and the visible window. The
/// selection is a single id; per-page `is_selected` flags are derived when
/// a snapshot is taken.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    /// Last configuration supplied by the host
    config: RawConfig,
    total_pages: usize,
    range_limit: Option<usize>,
    current_page_id: Option<usize>,
    window: VisibleWindow,
    flags: BoundaryFlags,
    error: Option<PaginationError>,
}

impl Paginator {
    /// Create an uninitialized paginator with no pages
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paginator and initialize it from `config`.
    ///
    /// An invalid page count leaves the paginator in its error state; see
    /// [`Paginator::error`].
    pub fn with_config(config: RawConfig) -> Self {
        let mut paginator = Self::new();
        // The error stays readable through `error()` and the state snapshot
        let _ = paginator.initialize(config);
        paginator
    }

    /// Normalize `config` and rebuild pages, window and flags from it
    pub fn initialize(&mut self, config: RawConfig) -> Result<(), PaginationError> {
        self.config = config;
        self.apply_config()
    }

    /// Apply a batch of external changes.
    ///
    /// A change to the page count or window size rebuilds everything and
    /// the selection change in the same batch only picks the anchor. A lone
    /// selection change is reconciled incrementally.
    pub fn reconfigure(&mut self, changes: ConfigChanges) -> Result<(), PaginationError> {
        if changes.touches_config() {
            self.config.merge(&changes);
            if let Some(selection) = changes.current_page_id {
                self.config.current_page_id = selection.current;
            } else if let Some(current_page_id) = self.current_page_id {
                self.config.current_page_id = current_page_id.into();
            }
            return self.apply_config();
        }

        if let Some(selection) = changes.current_page_id {
            self.report_external_selection_change(selection.current, selection.previous);
        }
        Ok(())
    }

    /// Follow a selection change made by the host.
    ///
    /// Both ids go through the usual coercion (default page 1). Before a
    /// successful initialization the new id is only remembered as the
    /// anchor for the next rebuild.
    pub fn report_external_selection_change(
        &mut self,
        new_id: impl Into<Value>,
        previous_id: impl Into<Value>,
    ) -> Reconciliation {
        let new_id = new_id.into();
        if !self.is_initialized() {
            self.config.current_page_id = new_id;
            return Reconciliation::Unchanged;
        }

        let new_page = config::coerce_positive(&new_id, Some(config::DEFAULT_PAGE_ID))
            .unwrap_or(config::DEFAULT_PAGE_ID);
        let previous_page =
            config::coerce_positive(&previous_id.into(), Some(config::DEFAULT_PAGE_ID))
                .unwrap_or(config::DEFAULT_PAGE_ID);

        let outcome = reconcile(
            new_page,
            previous_page,
            self.total_pages,
            self.window,
            self.range_limit,
        );
        match outcome {
            Reconciliation::Reinitialize { anchor_id } => {
                debug!(
                    "pager: external jump new={} previous={} window={:?}..={:?} action=reinitialize",
                    new_page,
                    previous_page,
                    self.window.first_id(),
                    self.window.last_id()
                );
                self.rebuild(PageConfig {
                    total_pages: self.total_pages,
                    current_page_id: anchor_id,
                    range_limit: self.range_limit,
                });
            }
            Reconciliation::Slide {
                selected_id,
                window,
            } => {
                debug!(
                    "pager: external move new={} previous={} action=slide",
                    selected_id, previous_page
                );
                self.current_page_id = Some(selected_id);
                self.window = window;
                self.update_boundary_flags();
            }
            Reconciliation::Unchanged => {}
        }
        outcome
    }

    /// Perform a navigation request.
    ///
    /// Returns the event to forward to listeners, or `None` when the move
    /// is not permitted (e.g. `Next` on the last page) and nothing changed.
    /// A `GoTo` target outside `1..=total_pages` is rejected without any
    /// state change.
    pub fn navigate(
        &mut self,
        intent: NavigationIntent,
    ) -> Result<Option<NavigationEvent>, PaginationError> {
        let Some(current_page_id) = self.current_page_id else {
            return Ok(None);
        };
        let total_pages = self.total_pages;

        let target = match intent {
            NavigationIntent::Next if current_page_id < total_pages => current_page_id + 1,
            NavigationIntent::Last if current_page_id < total_pages => total_pages,
            NavigationIntent::Previous if current_page_id > 1 => current_page_id - 1,
            NavigationIntent::First if current_page_id > 1 => 1,
            NavigationIntent::GoTo(page) => {
                if page == 0 || page > total_pages {
                    warn!(
                        "pager: go-to rejected page={} total_pages={}",
                        page, total_pages
                    );
                    return Err(PaginationError::PageOutOfRange { page, total_pages });
                }
                page
            }
            _ => {
                debug!(
                    "pager: navigate ignored intent={:?} current={} total_pages={}",
                    intent, current_page_id, total_pages
                );
                return Ok(None);
            }
        };

        let direction = intent.direction(current_page_id);
        self.current_page_id = Some(target);
        self.window = slide_window(self.window, total_pages, self.range_limit, target, direction);
        self.update_boundary_flags();

        debug!(
            "pager: navigate intent={:?} from={} to={} direction={:?} window={:?}..={:?}",
            intent,
            current_page_id,
            target,
            direction,
            self.window.first_id(),
            self.window.last_id()
        );

        Ok(Some(NavigationEvent {
            page_id: target,
            intent,
        }))
    }

    /// Build a snapshot for rendering
    pub fn state(&self) -> PaginationState {
        PaginationState {
            pages: build_pages(self.total_pages, self.current_page_id),
            visible_window: self.window.pages(self.current_page_id),
            current_page_id: self.current_page_id,
            has_next: self.flags.has_next,
            has_previous: self.flags.has_previous,
            previous_disabled: self.current_page_id == Some(1),
            next_disabled: self.current_page_id == Some(self.total_pages),
            error_text: self.error.as_ref().map(ToString::to_string),
        }
    }

    /// Whether a valid configuration has been applied
    pub fn is_initialized(&self) -> bool {
        self.current_page_id.is_some()
    }

    pub fn current_page_id(&self) -> Option<usize> {
        self.current_page_id
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn range_limit(&self) -> Option<usize> {
        self.range_limit
    }

    pub fn window(&self) -> VisibleWindow {
        self.window
    }

    pub fn has_next(&self) -> bool {
        self.flags.has_next
    }

    pub fn has_previous(&self) -> bool {
        self.flags.has_previous
    }

    /// The error of the last failed initialization, if any
    pub fn error(&self) -> Option<&PaginationError> {
        self.error.as_ref()
    }

    fn apply_config(&mut self) -> Result<(), PaginationError> {
        match self.config.normalize() {
            Ok(normalized) => {
                self.rebuild(normalized);
                Ok(())
            }
            Err(err) => {
                warn!(
                    "pager: initialize failed total_pages={} error={}",
                    self.config.total_pages, err
                );
                self.total_pages = 0;
                self.range_limit = None;
                self.current_page_id = None;
                self.window = VisibleWindow::EMPTY;
                self.flags = BoundaryFlags::default();
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn rebuild(&mut self, config: PageConfig) {
        self.total_pages = config.total_pages;
        self.range_limit = config.range_limit;
        self.current_page_id = Some(config.current_page_id);
        self.window = compute_window(
            config.total_pages,
            config.current_page_id,
            config.range_limit,
        );
        self.update_boundary_flags();
        self.error = None;

        debug!(
            "pager: initialize total_pages={} current={} range_limit={:?} window={:?}..={:?}",
            config.total_pages,
            config.current_page_id,
            config.range_limit,
            self.window.first_id(),
            self.window.last_id()
        );
    }

    fn update_boundary_flags(&mut self) {
        self.flags = BoundaryFlags::compute(self.current_page_id, self.total_pages, &self.window);
    }
}
