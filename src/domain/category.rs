use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryStatus, ResourceId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: ResourceId,
    pub name: String,
    pub slug: String,
    pub status: CategoryStatus,
    /// Parent category id for nested categories.
    #[serde(default)]
    pub parent: Option<ResourceId>,
}
