//! The list view reducer.
//!
//! Owns the filter → sort → paginate pipeline for one collection. All state
//! transitions go through the setters here so the page-reset rule is applied
//! in exactly one place: any change to the filter, the sort directive, or
//! the page size returns the view to the first page. Paginating under a
//! stale page index after a filter change is how list views end up showing
//! nothing on a non-empty result set.

use crate::filter::FilterSet;
use crate::page::{paginate, total_pages, PageRequest};
use crate::sort::SortDirective;
use planora_model::Record;
use std::num::NonZeroUsize;
use tracing::debug;

/// Stateful list view over a fetched collection.
#[derive(Debug, Clone)]
pub struct ListView {
    records: Vec<Record>,
    filter: FilterSet,
    sort: Option<SortDirective>,
    page_index: usize,
    page_size: NonZeroUsize,
}

impl ListView {
    /// Creates an empty view with the given page size.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            records: Vec::new(),
            filter: FilterSet::new(),
            sort: None,
            page_index: 0,
            page_size,
        }
    }

    /// Replaces the backing collection (e.g., after a refetch) and returns
    /// to the first page.
    pub fn set_records(&mut self, records: Vec<Record>) {
        debug!(count = records.len(), "list view records replaced");
        self.records = records;
        self.page_index = 0;
    }

    /// Replaces the filter set and returns to the first page.
    pub fn set_filter(&mut self, filter: FilterSet) {
        if self.filter != filter {
            self.filter = filter;
            self.page_index = 0;
        }
    }

    /// Replaces the sort directive and returns to the first page.
    pub fn set_sort(&mut self, sort: Option<SortDirective>) {
        if self.sort != sort {
            self.sort = sort;
            self.page_index = 0;
        }
    }

    /// Moves to a 0-based page. Out-of-range indexes are kept as-is and
    /// yield an empty slice; clamping is the caller's display concern.
    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Moves to a 1-based page (display convention).
    pub fn set_page_one_based(&mut self, page: usize) {
        self.page_index = page.saturating_sub(1);
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, size: NonZeroUsize) {
        if self.page_size != size {
            self.page_size = size;
            self.page_index = 0;
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn filter(&self) -> &FilterSet {
        &self.filter
    }

    pub fn sort(&self) -> Option<&SortDirective> {
        self.sort.as_ref()
    }

    /// Total records in the backing collection.
    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    /// Records surviving the current filter set.
    pub fn filtered_count(&self) -> usize {
        self.records.iter().filter(|r| self.filter.matches(r)).count()
    }

    /// The filtered, sorted sequence (all pages).
    pub fn filtered(&self) -> Vec<Record> {
        let mut out = self.filter.apply(&self.records);
        if let Some(sort) = &self.sort {
            sort.apply(&mut out);
        }
        out
    }

    /// Pages in the current filtered sequence.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.page_size)
    }

    /// The visible slice for the current page.
    pub fn page_slice(&self) -> Vec<Record> {
        let ordered = self.filtered();
        let req = PageRequest::new(self.page_index, self.page_size);
        paginate(&ordered, req).to_vec()
    }
}
