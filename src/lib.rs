//! Incremental paginated list core for an e-commerce back office.
//!
//! The product, category, order and member list views all browse the same
//! way: fetch pages of 15 from a REST list endpoint, merge them into a
//! growing duplicate-free list, fetch more as the user scrolls near the
//! bottom, and restart from page 0 whenever the search filter changes or a
//! mutation elsewhere invalidates the list. This crate implements that
//! controller once, generic over the item type, with single-flight fetches
//! and epoch-tagged responses so a slow page from an abandoned filter can
//! never repopulate the list.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod list;

pub use api::{HttpListSource, ListSource};
pub use catalog::{Category, Collection, ListItem, Member, OrderSummary, Product};
pub use config::Config;
pub use error::{BackofficeError, Result};
pub use list::{
    DEFAULT_PAGE_SIZE, FetchOrigin, FetchTicket, ListController, ListQuery, ListState, MergeMode,
    OrderDirection, PageRequest, ScrollMetrics, ScrollTrigger, SearchKind, SortSpec, merge,
};
