//! Externally observable state of one list controller instance.

/// State a consumer view renders from.
///
/// Invariants:
/// - `items` holds no two elements with the same id (arrival order preserved)
/// - `is_loading` is true exactly while one fetch is in flight
/// - `is_last_page` only moves false to true within an epoch; a reset is the
///   only way back
#[derive(Debug, Clone)]
pub struct ListState<T> {
    /// Accumulated items, in arrival order
    pub items: Vec<T>,
    /// Page number the next fetch will request
    pub next_page: u32,
    /// Whether the backend has signalled end of data for this epoch
    pub is_last_page: bool,
    /// Whether a fetch is currently in flight
    pub is_loading: bool,
    /// Generation counter, incremented on every reset
    pub epoch: u64,
    /// Message of the most recent fetch failure, for display
    pub last_error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_page: 0,
            is_last_page: false,
            is_loading: false,
            epoch: 0,
            last_error: None,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new epoch: clear everything except the epoch counter, which
    /// advances so that responses still in flight can be recognized as stale.
    pub(crate) fn begin_epoch(&mut self) {
        self.epoch += 1;
        self.items.clear();
        self.next_page = 0;
        self.is_last_page = false;
        self.is_loading = false;
        self.last_error = None;
    }
}
