//! Deduplicate a large ordered sequence without losing its order, then show
//! it a page at a time.
//!
//! Two independent pieces that compose but don't depend on each other,
//!
//! - [`dedup`]: single pass, seen-set based removal of later duplicates.
//!   Each distinct value survives at the position of its first occurrence.
//!   O(n) time, O(u) space for u unique values.
//!
//! - [`Pager`]: a validated page size plus the page the user last selected.
//!   [`Pager::view`] computes the window of the backing sequence to display
//!   and the total page count. The backing sequence is borrowed, never
//!   copied or mutated; the view is recomputed on every call.
//!
//! Both are synchronous and allocation-light. The caller owns the sequence
//! and drives as many pagers over it (or over the deduped copy) as it has
//! lists to display.

use thiserror::Error;

pub mod dedup;
pub mod page;


pub use dedup::{DedupExt, DedupFirst, dedup, dedup_in_place};
pub use page::{PageView, Pager, View, page_count, slice};

#[cfg(feature = "indexmap")]
pub use dedup::unique;

/// Errors returned by fallible operations in this crate.
///
/// Out of range page requests are deliberately not an error, they are
/// clamped at view time (see [`slice`]). An absent backing sequence is a
/// [`View::NoData`] state, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A page size of zero would make the paging structure empty or
    /// infinite. Rejected up front, never coerced.
    #[error("invalid page size {0}, must be at least 1")]
    InvalidPageSize(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
