//! Error types

use thiserror::Error;

/// Errors reported by the paginator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// Total page count was missing, zero, negative or not a number
    #[error("INVALID PAGES NUMBER")]
    InvalidPageCount,

    /// A `GoTo` target outside `1..=total_pages`
    #[error("page {page} is out of range (total pages: {total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },
}
