//! Domain records for the back-office collections.
//!
//! Each record mirrors the backend's JSON shape (camelCase fields) and
//! carries a stable numeric identifier. The identifier alone is the identity
//! used for list deduplication, independent of the display fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BackofficeError, Result};
use crate::list::query::{OrderDirection, SortSpec};

/// An item that can live in a paginated list.
///
/// Identity for dedup purposes is the id alone; two items with equal ids are
/// the same item even when other fields differ.
pub trait ListItem {
    fn id(&self) -> i64;
}

/// The back-office collections served by the list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Product,
    Category,
    Order,
    Member,
}

impl Collection {
    /// Sort order each collection's list view requests by default.
    pub fn default_sort(self) -> SortSpec {
        match self {
            Collection::Product => SortSpec::new("productId", OrderDirection::Desc),
            Collection::Category => SortSpec::new("categoryId", OrderDirection::Desc),
            Collection::Order => SortSpec::new("id", OrderDirection::Desc),
            Collection::Member => SortSpec::new("id", OrderDirection::Asc),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Product => write!(f, "product"),
            Collection::Category => write!(f, "category"),
            Collection::Order => write!(f, "order"),
            Collection::Member => write!(f, "member"),
        }
    }
}

impl FromStr for Collection {
    type Err = BackofficeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "product" => Ok(Collection::Product),
            "category" => Ok(Collection::Category),
            "order" => Ok(Collection::Order),
            "member" => Ok(Collection::Member),
            _ => Err(BackofficeError::Config(format!(
                "unknown collection '{}', expected 'product', 'category', 'order' or 'member'",
                s
            ))),
        }
    }
}

/// A product row as served by the product service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub stock_quantity: u32,
    #[serde(default)]
    pub thumbnail_path: Option<String>,
}

impl ListItem for Product {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A category row; the product service keys these by `categoryId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i64,
    pub category_name: String,
}

impl ListItem for Category {
    fn id(&self) -> i64 {
        self.category_id
    }
}

/// A single order as listed by the ordering service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: i64,
    pub user_name: String,
    pub product_name: String,
    pub quantity: u32,
    pub status: String,
}

impl ListItem for OrderSummary {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A member row from the user service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl ListItem for Member {
    fn id(&self) -> i64 {
        self.id
    }
}
