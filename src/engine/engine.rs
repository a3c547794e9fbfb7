//! Report query engine
//!
//! Holds the record collection plus the query state (filters, search, sort,
//! page) and derives the visible page from them. Derived outputs are pure
//! functions of state, recomputed on demand; nothing is cached.
//!
//! One engine instance backs one consuming view. State is never shared or
//! global, and every mutation goes through a named operation.

use crate::observability::{Logger, Severity};
use crate::report::{chips, pagination, search, sorter};
use crate::report::{ActiveFilter, ReportFilters, ReportRecord, SortColumn, SortDirection};
use crate::source::RecordSource;

/// Load lifecycle of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Before the record fetch resolves
    Loading,
    /// After resolution; success and failure are told apart by `error()`
    Ready,
}

/// Engine construction options
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Initial page size
    pub page_size: usize,
    /// Initial sort; the dashboard shows newest reports first
    pub default_sort: Option<(SortColumn, SortDirection)>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            default_sort: Some((SortColumn::Date, SortDirection::Desc)),
        }
    }
}

/// In-memory query engine over the report collection.
///
/// Only `load` can fail, and it fails soft: the error message is kept in
/// state and the engine serves an empty view until a reload succeeds.
pub struct ReportQueryEngine {
    records: Vec<ReportRecord>,
    filters: ReportFilters,
    search_query: String,
    sort: Option<(SortColumn, SortDirection)>,
    current_page: usize,
    page_size: usize,
    load_state: LoadState,
    error: Option<String>,
}

impl ReportQueryEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            records: Vec::new(),
            filters: ReportFilters::default(),
            search_query: String::new(),
            sort: config.default_sort,
            current_page: 1,
            page_size: config.page_size.max(1),
            load_state: LoadState::Loading,
            error: None,
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Fetches the record collection from the source.
    ///
    /// Re-invoking on a `Ready` engine is the manual refresh/retry path:
    /// it re-enters `Loading`, then resolves again. A rejected fetch keeps
    /// the engine serving (an empty view) rather than failing the caller.
    pub async fn load<S: RecordSource>(&mut self, source: &S) {
        self.load_state = LoadState::Loading;
        self.error = None;
        match source.fetch().await {
            Ok(records) => {
                let count = records.len().to_string();
                Logger::log(Severity::Info, "reports_loaded", &[("count", count.as_str())]);
                self.records = records;
            }
            Err(err) => {
                let message = err.to_string();
                Logger::log_stderr(
                    Severity::Error,
                    "reports_load_failed",
                    &[("error", message.as_str())],
                );
                self.records = Vec::new();
                self.error = Some(message);
            }
        }
        self.load_state = LoadState::Ready;
        self.current_page = 1;
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Replaces the whole filter state and returns to page 1
    pub fn set_filters(&mut self, filters: ReportFilters) {
        self.filters = filters;
        self.current_page = 1;
    }

    /// Clears every filter and the search query, returning to page 1
    pub fn clear_filters(&mut self) {
        self.filters = ReportFilters::default();
        self.search_query.clear();
        self.current_page = 1;
    }

    /// Removes the one atomic selection a chip id encodes
    pub fn remove_filter(&mut self, chip_id: &str) {
        chips::remove(&mut self.filters, chip_id);
        self.current_page = 1;
    }

    /// Sorts by a column; re-selecting the current column toggles direction
    pub fn set_sorting(&mut self, column: SortColumn) {
        self.sort = match self.sort {
            Some((current, direction)) if current == column => Some((column, direction.toggled())),
            _ => Some((column, SortDirection::Asc)),
        };
    }

    /// Moves to a page, clamped into `[1, total_pages()]`
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    /// Changes the page size and returns to page 1; zero is ignored
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        self.page_size = page_size;
        self.current_page = 1;
    }

    /// Sets the free-text query and returns to page 1
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    // ------------------------------------------------------------------
    // Derived outputs
    // ------------------------------------------------------------------

    /// The full filtered set (filters, then free-text search), unsorted.
    ///
    /// Export consumers take this whole set, not just the current page.
    pub fn filtered_records(&self) -> Vec<&ReportRecord> {
        self.records
            .iter()
            .filter(|record| self.filters.matches(record))
            .filter(|record| search::matches(record, &self.search_query))
            .collect()
    }

    /// One chip per atomic filter selection
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        chips::collect(&self.filters, &self.records)
    }

    /// The current page: filtered, sorted, sliced
    pub fn page(&self) -> Vec<&ReportRecord> {
        let mut view = self.filtered_records();
        if let Some((column, direction)) = self.sort {
            sorter::sort(&mut view, column, direction);
        }
        pagination::paginate(&view, self.current_page, self.page_size).to_vec()
    }

    /// Page count of the filtered set, never below 1
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered_records().len(), self.page_size)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn filters(&self) -> &ReportFilters {
        &self.filters
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort(&self) -> Option<(SortColumn, SortDirection)> {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for ReportQueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
