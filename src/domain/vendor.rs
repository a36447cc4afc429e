use serde::{Deserialize, Serialize};

use crate::domain::types::{ResourceId, VendorStatus};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: ResourceId,
    pub store_name: String,
    pub email: String,
    pub status: VendorStatus,
    /// Number of products the vendor currently lists.
    #[serde(default)]
    pub product_count: u32,
}
