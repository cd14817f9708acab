//! reqwest-backed list source.

use std::marker::PhantomData;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::catalog::{Collection, ListItem};
use crate::config::Config;
use crate::error::{BackofficeError, Result};
use crate::list::query::{ListQuery, PageRequest};

use super::{ListSource, decode_page};

/// Boundary timeout for one list request. A hung request would otherwise
/// leave the controller loading forever; the controller itself defines no
/// timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Body marker the backend attaches to a 404 when a collection simply has no
/// matching rows ("...이 없습니다", "there is no ..."). A 404 carrying it is
/// end of data; any other 404 is a routing problem and surfaces as an error.
const NO_DATA_MARKER: &str = "없습니다";

/// Assemble the query parameters for one page request.
///
/// `searchType`/`searchName` are only sent when the filter is active: an
/// `All` kind suppresses `searchType`, blank text suppresses `searchName`.
fn page_params(query: &ListQuery, page: PageRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("sort", query.sort.to_string()),
        ("page", page.number.to_string()),
        ("size", page.size.to_string()),
    ];
    if let Some(search_type) = query.search_type() {
        params.push(("searchType", search_type.to_string()));
    }
    if let Some(search_name) = query.search_name() {
        params.push(("searchName", search_name.to_string()));
    }
    params
}

/// Turn a list response into a page of items.
///
/// A 404 whose body carries the no-data marker is an empty page; every other
/// non-success status is an `Api` error.
fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    no_data_marker: &str,
) -> Result<Vec<T>> {
    if status == StatusCode::NOT_FOUND && body.contains(no_data_marker) {
        debug!("backend reports no data, treating as empty page");
        return Ok(Vec::new());
    }
    if !status.is_success() {
        return Err(BackofficeError::Api(format!(
            "list request failed with status {status}"
        )));
    }
    decode_page(body)
}

/// HTTP list source for one collection endpoint.
pub struct HttpListSource<T> {
    client: Client,
    endpoint: Url,
    no_data_marker: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> HttpListSource<T> {
    /// Build a source for a collection's list endpoint.
    pub fn new(config: &Config, collection: Collection) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, config.list_url(collection)?))
    }

    /// Build a source around an existing client and endpoint URL.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self {
            client,
            endpoint,
            no_data_marker: NO_DATA_MARKER.to_string(),
            _marker: PhantomData,
        }
    }

    /// Override the 404 body marker that distinguishes "no data" from a
    /// genuinely missing endpoint.
    pub fn with_no_data_marker(mut self, marker: impl Into<String>) -> Self {
        self.no_data_marker = marker.into();
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl<T> ListSource for HttpListSource<T>
where
    T: ListItem + DeserializeOwned + Send + Sync,
{
    type Item = T;

    async fn fetch_page(&self, query: &ListQuery, page: PageRequest) -> Result<Vec<T>> {
        let request = self
            .client
            .get(self.endpoint.clone())
            .query(&page_params(query, page));

        debug!(endpoint = %self.endpoint, page = page.number, "requesting list page");
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        decode_response(status, &body, &self.no_data_marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::list::query::{OrderDirection, SearchKind, SortSpec};

    fn sort() -> SortSpec {
        SortSpec::new("categoryId", OrderDirection::Desc)
    }

    #[test]
    fn test_page_params_unfiltered() {
        let query = ListQuery::unfiltered(sort());
        let params = page_params(&query, PageRequest::new(2, 15));
        assert_eq!(
            params,
            vec![
                ("sort", "categoryId,DESC".to_string()),
                ("page", "2".to_string()),
                ("size", "15".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_params_with_filter() {
        let query = ListQuery::filtered(SearchKind::Field("3".to_string()), " lamp ", sort());
        let params = page_params(&query, PageRequest::new(0, 15));
        assert!(params.contains(&("searchType", "3".to_string())));
        assert!(params.contains(&("searchName", "lamp".to_string())));
    }

    #[test]
    fn test_page_params_blank_text_omits_search_name() {
        let query = ListQuery::filtered(SearchKind::Field("3".to_string()), "   ", sort());
        let params = page_params(&query, PageRequest::new(0, 15));
        assert!(params.iter().all(|(name, _)| *name != "searchName"));
        assert!(params.contains(&("searchType", "3".to_string())));
    }

    #[test]
    fn test_not_found_with_marker_is_empty_page() {
        let page: Vec<Category> =
            decode_response(StatusCode::NOT_FOUND, "카테고리가 없습니다.", NO_DATA_MARKER).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_not_found_without_marker_is_an_error() {
        let err = decode_response::<Category>(StatusCode::NOT_FOUND, "Not Found", NO_DATA_MARKER)
            .unwrap_err();
        assert!(matches!(err, BackofficeError::Api(_)));
    }

    #[test]
    fn test_server_error_is_an_error() {
        let err = decode_response::<Category>(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom",
            NO_DATA_MARKER,
        )
        .unwrap_err();
        assert!(matches!(err, BackofficeError::Api(_)));
    }

    #[test]
    fn test_success_decodes_page() {
        let body = r#"{"result":[{"categoryId":1,"categoryName":"Lighting"}]}"#;
        let page: Vec<Category> = decode_response(StatusCode::OK, body, NO_DATA_MARKER).unwrap();
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_success_with_malformed_body_is_an_error() {
        let err =
            decode_response::<Category>(StatusCode::OK, r#"{"data":[]}"#, NO_DATA_MARKER)
                .unwrap_err();
        assert!(matches!(err, BackofficeError::MalformedResponse(_)));
    }
}
