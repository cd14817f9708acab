//! Query state for a list view: search filter and sort order.
//!
//! A `ListQuery` is an immutable value; the controller compares the old and
//! new values to decide whether a setter call actually changed the filter
//! and therefore starts a new epoch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed page size requested from the list endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// The active search filter kind.
///
/// `All` suppresses the `searchType` parameter entirely; `Field` carries the
/// backend's search type value (a category id for product search, a named
/// field otherwise).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchKind {
    All,
    Field(String),
}

impl SearchKind {
    /// The `searchType` query parameter, or `None` for an unfiltered list.
    pub fn as_param(&self) -> Option<&str> {
        match self {
            SearchKind::All => None,
            SearchKind::Field(value) => Some(value),
        }
    }
}

/// Ordering direction for sorted queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Asc => write!(f, "ASC"),
            OrderDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// Sort specification, rendered as `<field>,<ASC|DESC>` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: OrderDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

/// The full query a list view is currently browsing with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub kind: SearchKind,
    pub text: String,
    pub sort: SortSpec,
}

impl ListQuery {
    /// An unfiltered query with the given sort order.
    pub fn unfiltered(sort: SortSpec) -> Self {
        Self {
            kind: SearchKind::All,
            text: String::new(),
            sort,
        }
    }

    /// A filtered query.
    pub fn filtered(kind: SearchKind, text: impl Into<String>, sort: SortSpec) -> Self {
        Self {
            kind,
            text: text.into(),
            sort,
        }
    }

    /// The `searchName` query parameter: the trimmed search text, or `None`
    /// when blank.
    pub fn search_name(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }

    /// The `searchType` query parameter, or `None` for an unfiltered list.
    pub fn search_type(&self) -> Option<&str> {
        self.kind.as_param()
    }

    /// Whether two queries have the same effective value.
    ///
    /// Re-setting an equivalent query (differing only in surrounding
    /// whitespace) must not restart the list.
    pub fn same_query(&self, other: &ListQuery) -> bool {
        self.kind == other.kind
            && self.text.trim() == other.text.trim()
            && self.sort == other.sort
    }
}

/// A single page to request: zero-based number plus fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    /// The first page at the default size.
    pub fn first() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}
