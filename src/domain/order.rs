use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{OrderStatus, PaymentStatus, ResourceId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: ResourceId,
    pub order_number: String,
    pub customer_name: String,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
