//! Incremental paginated list controller.
//!
//! Five cooperating pieces implement one controller instance per list view:
//! query state ([`query`]), the fetch controller and reset protocol
//! ([`controller`]), the scroll trigger detector ([`trigger`]), the merge and
//! dedup engine ([`merge`]) and the observable state ([`state`]).
//!
//! Control flow: the trigger detector asks the controller for the next page;
//! the controller fetches it from a [`ListSource`](crate::api::ListSource)
//! and folds it into the item list; a query change or an external mutation
//! resets everything back to page 0 under a new epoch.

pub mod controller;
pub mod merge;
pub mod query;
pub mod state;
pub mod trigger;


pub use controller::{FetchOrigin, FetchTicket, ListController};
pub use merge::{MergeMode, merge};
pub use query::{
    DEFAULT_PAGE_SIZE, ListQuery, OrderDirection, PageRequest, SearchKind, SortSpec,
};
pub use state::ListState;
pub use trigger::{ScrollMetrics, ScrollTrigger};
