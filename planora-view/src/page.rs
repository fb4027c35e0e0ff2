//! Page slicing over a filtered-and-sorted sequence.
//!
//! Pages are derived, never stored: a [`PageRequest`] names a contiguous
//! slice by 0-based index and size. The broader application historically
//! mixed 1-based and 0-based page conventions across views; the core is
//! 0-based and the 1-based convention enters only through
//! [`PageRequest::from_one_based`].

use crate::error::{ViewError, ViewResult};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// A request for one page of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 0-based page index.
    pub index: usize,
    /// Records per page, at least 1.
    pub size: NonZeroUsize,
}

impl PageRequest {
    pub fn new(index: usize, size: NonZeroUsize) -> Self {
        Self { index, size }
    }

    /// Validates a raw page size from the UI boundary.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidPageSize`] if `size` is zero.
    pub fn try_new(index: usize, size: usize) -> ViewResult<Self> {
        let size = NonZeroUsize::new(size).ok_or(ViewError::InvalidPageSize(size))?;
        Ok(Self { index, size })
    }

    /// Adapts the 1-based page convention used by display call sites.
    /// A page number of 0 is treated as the first page.
    pub fn from_one_based(page: usize, size: NonZeroUsize) -> Self {
        Self {
            index: page.saturating_sub(1),
            size,
        }
    }
}

/// Returns the requested page slice.
///
/// An out-of-range page yields an empty slice, never an error; callers are
/// responsible for clamping before display.
pub fn paginate<T>(items: &[T], req: PageRequest) -> &[T] {
    let start = req.index.saturating_mul(req.size.get());
    if start >= items.len() {
        return &[];
    }
    let end = (start + req.size.get()).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items; 0 for an empty sequence.
pub fn total_pages(len: usize, size: NonZeroUsize) -> usize {
    len.div_ceil(size.get())
}
