use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::order::OrderStatus;

/// Status-update webhook pushed by the remote service to a caller-hosted
/// endpoint. The client only defines the decode shape; hosting the endpoint
/// is up to the embedding application.
///
/// `coid` is the caller-supplied order id the update refers to. Rider fields
/// are absent until a rider is allotted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCallbackRequest {
    pub coid: String,
    pub status: OrderStatus,
    pub action_time: DateTime<Utc>,
    #[serde(default)]
    pub rider_id: Option<i64>,
    #[serde(default)]
    pub rider_name: Option<String>,
    #[serde(default)]
    pub rider_contact_number: Option<String>,
    #[serde(default)]
    pub rider_latitude: Option<f64>,
    #[serde(default)]
    pub rider_longitude: Option<f64>,
}
