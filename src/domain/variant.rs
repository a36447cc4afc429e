use serde::{Deserialize, Serialize};

use crate::domain::types::ResourceId;

/// Purchasable option (size, colour, ...) of a product.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: ResourceId,
    /// Id of the product this variant belongs to.
    pub product: ResourceId,
    pub sku: String,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
}
