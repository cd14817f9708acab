//! Backend boundary: the paged-list source contract and response decoding.
//!
//! The controller treats the backend purely as a paged-list data source. A
//! list endpoint answers `GET <collection>/list` with either a bare JSON
//! array of items or an envelope `{ "result": [...] }`; an empty array
//! signals the last page.

pub mod http;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::catalog::ListItem;
use crate::error::{BackofficeError, Result};
use crate::list::query::{ListQuery, PageRequest};

pub use http::HttpListSource;

/// A paged-list data source for one collection.
///
/// Implementations perform the actual I/O; the controller never sees more
/// than one page per call. An empty page is the end-of-data signal, not an
/// error.
pub trait ListSource: Send + Sync {
    type Item: ListItem;

    /// Fetch one page of items matching the query.
    fn fetch_page(
        &self,
        query: &ListQuery,
        page: PageRequest,
    ) -> impl std::future::Future<Output = Result<Vec<Self::Item>>> + Send;
}

/// The two response shapes the list endpoints are known to produce.
#[derive(Deserialize)]
#[serde(untagged)]
enum PageBody<T> {
    Bare(Vec<T>),
    Envelope { result: Vec<T> },
}

/// Decode a list response body into a page of items.
///
/// Accepts a bare array or a `result` envelope; anything else is a
/// `MalformedResponse`.
pub(crate) fn decode_page<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    match serde_json::from_str::<PageBody<T>>(body) {
        Ok(PageBody::Bare(items)) | Ok(PageBody::Envelope { result: items }) => Ok(items),
        Err(_) => Err(BackofficeError::MalformedResponse(
            "expected an item array or a {\"result\": [...]} envelope".to_string(),
        )),
    }
}
