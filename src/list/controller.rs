//! The fetch controller and reset protocol for one list view.
//!
//! One `ListController` instance exists per mounted list view and owns that
//! view's state exclusively; all mutation flows through `begin`/`complete`
//! or the reset path. Fetches are single-flight: within an epoch, pages are
//! requested strictly in increasing order because the next fetch is only
//! issued after the previous one resolved.
//!
//! Responses are never cancelled at the transport level. Every outstanding
//! fetch carries the epoch it was issued in, and `complete` drops any
//! response whose epoch is no longer current. A slow page from a previous
//! filter therefore cannot repopulate the list after a reset.

use tracing::{debug, warn};

use crate::api::ListSource;
use crate::error::Result;

use super::merge::{MergeMode, merge};
use super::query::{DEFAULT_PAGE_SIZE, ListQuery, PageRequest};
use super::state::ListState;

/// Where a fetch request came from.
///
/// The reset protocol is always allowed to force a page-0 fetch, even when
/// the previous epoch had reached its last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    /// The trigger detector asked for the next page.
    Trigger,
    /// The reset protocol is restarting the list at page 0.
    Reset,
}

/// Token for one in-flight fetch, pairing the requested page with the epoch
/// it was issued in. `complete` uses it to recognize stale responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
    page: u32,
}

impl FetchTicket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Incremental paginated list controller.
///
/// Generic over the page source, so views share one implementation across
/// the product, category, order and member lists.
///
/// End-of-data contract: only a literally empty page marks the last page. A
/// page that is shorter than the requested size but non-empty is not
/// terminal; the next trigger still fetches.
pub struct ListController<S: ListSource> {
    source: S,
    query: ListQuery,
    page_size: u32,
    state: ListState<S::Item>,
}

impl<S: ListSource> ListController<S> {
    pub fn new(source: S, query: ListQuery) -> Self {
        Self {
            source,
            query,
            page_size: DEFAULT_PAGE_SIZE,
            state: ListState::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn state(&self) -> &ListState<S::Item> {
        &self.state
    }

    pub fn items(&self) -> &[S::Item] {
        &self.state.items
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Begin a fetch, if the guards allow one.
    ///
    /// Returns `None` while a fetch is in flight, and after the last page
    /// unless the reset protocol is forcing page 0. On success the loading
    /// flag is set and the returned ticket must be passed to [`complete`]
    /// with the outcome.
    ///
    /// [`complete`]: ListController::complete
    pub fn begin(&mut self, origin: FetchOrigin) -> Option<FetchTicket> {
        if self.state.is_loading {
            return None;
        }
        if self.state.is_last_page && origin != FetchOrigin::Reset {
            return None;
        }

        self.state.is_loading = true;
        let ticket = FetchTicket {
            epoch: self.state.epoch,
            page: self.state.next_page,
        };
        debug!(epoch = ticket.epoch, page = ticket.page, "issuing list fetch");
        Some(ticket)
    }

    /// Apply the outcome of a fetch begun with [`begin`].
    ///
    /// A ticket from a stale epoch mutates nothing: the response is dropped
    /// entirely, including the loading flag, which by then belongs to the
    /// new epoch.
    ///
    /// [`begin`]: ListController::begin
    pub fn complete(&mut self, ticket: FetchTicket, outcome: Result<Vec<S::Item>>) {
        if ticket.epoch != self.state.epoch {
            debug!(
                stale = ticket.epoch,
                current = self.state.epoch,
                page = ticket.page,
                "dropping stale page response"
            );
            return;
        }

        self.state.is_loading = false;

        match outcome {
            Err(err) => {
                warn!(page = ticket.page, error = %err, "list fetch failed");
                self.state.is_last_page = true;
                self.state.last_error = Some(err.to_string());
            }
            Ok(incoming) if incoming.is_empty() => {
                self.state.is_last_page = true;
                // An empty first page means the search matched nothing.
                if ticket.page == 0 {
                    self.state.items.clear();
                }
            }
            Ok(incoming) => {
                let mode = if ticket.page == 0 {
                    MergeMode::Replace
                } else {
                    MergeMode::Append
                };
                let existing = std::mem::take(&mut self.state.items);
                self.state.items = merge(existing, incoming, mode);
                self.state.next_page = ticket.page + 1;
            }
        }
    }

    /// Fetch the next page, if the guards allow one.
    ///
    /// This is the trigger detector's entry point; it does nothing while a
    /// fetch is in flight or after the last page.
    pub async fn fetch_next(&mut self) {
        self.run_fetch(FetchOrigin::Trigger).await;
    }

    /// Load the first page after the consumer view mounts.
    pub async fn start(&mut self) {
        self.reset_and_fetch().await;
    }

    /// Replace the active query.
    ///
    /// A query with the same effective value is stored without restarting
    /// the list; anything else runs the reset protocol and fetches page 0 of
    /// the new epoch.
    pub async fn set_query(&mut self, query: ListQuery) {
        let changed = !self.query.same_query(&query);
        self.query = query;
        if changed {
            self.reset_and_fetch().await;
        }
    }

    /// External invalidation: a collaborator mutated the collection
    /// (create/update/delete), so the accumulated list is no longer
    /// trustworthy. Restarts from page 0 under the current query.
    pub async fn invalidate(&mut self) {
        self.reset_and_fetch().await;
    }

    /// Reset protocol, steps 1 and 2: advance the epoch and clear the state.
    ///
    /// Any fetch still in flight is logically abandoned; its response will
    /// arrive with a stale epoch and be dropped by [`complete`]. The caller
    /// is expected to immediately fetch page 0 (`begin(FetchOrigin::Reset)`),
    /// which [`reset_and_fetch`] does.
    ///
    /// [`complete`]: ListController::complete
    /// [`reset_and_fetch`]: ListController::reset_and_fetch
    pub fn reset(&mut self) {
        self.state.begin_epoch();
        debug!(epoch = self.state.epoch, "list reset");
    }

    /// Full reset protocol: new epoch, then a forced page-0 fetch.
    pub async fn reset_and_fetch(&mut self) {
        self.reset();
        self.run_fetch(FetchOrigin::Reset).await;
    }

    async fn run_fetch(&mut self, origin: FetchOrigin) {
        let Some(ticket) = self.begin(origin) else {
            return;
        };
        let page = PageRequest::new(ticket.page, self.page_size);
        let outcome = self.source.fetch_page(&self.query, page).await;
        self.complete(ticket, outcome);
    }
}
