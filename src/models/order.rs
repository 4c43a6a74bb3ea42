use serde::{Deserialize, Serialize};

/// Caller-side order parameters. `order_id` must be unique per integration;
/// the remote service rejects duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub order_id: String,
    pub is_prepaid: bool,
    pub cash_to_be_collected: f64,
    #[serde(default)]
    pub delivery_charge_to_be_collected_from_customer: bool,
}

impl OrderDetails {
    pub fn new(order_id: impl Into<String>, is_prepaid: bool, cash_to_be_collected: f64) -> Self {
        Self {
            order_id: order_id.into(),
            is_prepaid,
            cash_to_be_collected,
            delivery_charge_to_be_collected_from_customer: false,
        }
    }

    pub fn collect_delivery_charge_from_customer(mut self) -> Self {
        self.delivery_charge_to_be_collected_from_customer = true;
        self
    }
}

/// Lifecycle state as reported by the remote service. The value set is owned
/// remotely; unrecognized strings decode to `Unknown` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Allotted,
    Accepted,
    Arrived,
    PickedUp,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::{OrderDetails, OrderStatus};

    #[test]
    fn delivery_charge_flag_defaults_to_false() {
        let details = OrderDetails::new("ORDER1234", false, 150.0);
        assert!(!details.delivery_charge_to_be_collected_from_customer);

        let details = details.collect_delivery_charge_from_customer();
        assert!(details.delivery_charge_to_be_collected_from_customer);
    }

    #[test]
    fn status_decodes_from_wire_strings() {
        let status: OrderStatus = serde_json::from_str("\"DELIVERED\"").unwrap();
        assert_eq!(status, OrderStatus::Delivered);

        let status: OrderStatus = serde_json::from_str("\"PICKED_UP\"").unwrap();
        assert_eq!(status, OrderStatus::PickedUp);
    }

    #[test]
    fn unrecognized_status_decodes_to_unknown() {
        let status: OrderStatus = serde_json::from_str("\"TELEPORTED\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);
    }
}
