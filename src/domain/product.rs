use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductStatus, ResourceId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ResourceId,
    pub name: String,
    pub slug: String,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    pub status: ProductStatus,
    /// Name of the category the product is listed under.
    #[serde(default)]
    pub category: Option<String>,
    /// Store name of the vendor selling the product.
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
