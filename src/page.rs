//! Windowed pagination over an in memory sequence.
//!
//! A [`Pager`] owns the mutable state of one displayed list: the page size
//! it was configured with and the page the user last selected. Everything
//! else is computed per call from the backing sequence, which the pager
//! only ever borrows. Element type doesn't matter, the pager never looks
//! inside the items it slices.

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of pages needed to show `len` items at `page_size` items per
/// page. A partial final page counts as a full page; an empty sequence has
/// zero pages, there being nothing to paginate.
///
/// # Panics
///
/// Panics if `page_size` is zero. [`Pager::new`] rejects that configuration
/// with an error instead.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// The items of page `page` of `seq`: the half open window
/// `[page * page_size, min((page + 1) * page_size, seq.len()))`.
///
/// A page index past the end is clamped to the last valid page rather than
/// failing, so a user clicking beyond the end of the list still sees the
/// final page. An empty sequence yields an empty slice for every index.
///
/// # Panics
///
/// Panics if `page_size` is zero.
pub fn slice<T>(seq: &[T], page: usize, page_size: usize) -> &[T] {
    let pages = page_count(seq.len(), page_size);
    if pages == 0 {
        return &[];
    }
    let page = page.min(pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(seq.len());
    &seq[start..end]
}

/// One page of a backing sequence plus the total page count. Recomputed on
/// every call to [`Pager::view`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PageView<'a, T> {
    /// The window to display, at most `page_size` items.
    pub items: &'a [T],
    /// Total number of pages in the backing sequence.
    pub page_count: usize,
}

/// What a view over a possibly-absent sequence renders as.
///
/// `NoData` is a well defined state, not an error: the backing sequence has
/// not been produced yet and the caller should show a distinct placeholder
/// rather than an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum View<'a, T> {
    NoData,
    Page(PageView<'a, T>),
}

impl<'a, T> View<'a, T> {
    /// The items to display, empty both for `NoData` and for a page of an
    /// empty sequence.
    pub fn items(&self) -> &'a [T] {
        match self {
            View::NoData => &[],
            View::Page(p) => p.items,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, View::NoData)
    }
}

/// Pagination state for one displayed list.
///
/// Construction validates the page size once; after that no operation can
/// fail. Each displayed list gets its own pager, nothing is shared between
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPager"))]
pub struct Pager {
    page_size: usize,
    current: usize,
}

impl Pager {
    /// Create a pager showing `page_size` items per page, positioned on
    /// page zero. A zero page size is a configuration error.
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize(page_size));
        }
        Ok(Pager {
            page_size,
            current: 0,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The page index last passed to [`select`](Self::select), zero based.
    pub fn page(&self) -> usize {
        self.current
    }

    /// Record a page selection. The raw index is stored and clamped at view
    /// time, so a sequence that later shrinks still renders its last page
    /// instead of a stale empty one.
    pub fn select(&mut self, page: usize) {
        self.current = page;
    }

    /// Compute the current page of `seq`. `None` means the sequence has not
    /// been produced yet and renders as [`View::NoData`].
    pub fn view<'a, T>(&self, seq: Option<&'a [T]>) -> View<'a, T> {
        match seq {
            None => View::NoData,
            Some(seq) => View::Page(PageView {
                items: slice(seq, self.current, self.page_size),
                page_count: page_count(seq.len(), self.page_size),
            }),
        }
    }
}

// deserialization goes through Pager::new so a serialized zero page size is
// rejected the same way a constructed one is
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPager {
    page_size: usize,
    current: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPager> for Pager {
    type Error = Error;

    fn try_from(raw: RawPager) -> Result<Self> {
        let mut pager = Pager::new(raw.page_size)?;
        pager.select(raw.current);
        Ok(pager)
    }
}
