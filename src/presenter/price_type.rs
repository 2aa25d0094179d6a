use crate::ticket::types::{ExpirationPolicy, OrderPriceType};

use super::UnknownLabel;

/// Maps price types to labels and classifies which of them carry
/// a limit price, a stop price, or a time-in-force.
pub struct OrderPriceTypePresenter;

impl OrderPriceTypePresenter {
    /// Price types that take a limit price.
    pub const LIMIT_TYPES: [OrderPriceType; 2] =
        [OrderPriceType::Limit, OrderPriceType::StopLimit];

    /// Price types that take a stop price.
    pub const STOP_TYPES: [OrderPriceType; 2] =
        [OrderPriceType::StopMarket, OrderPriceType::StopLimit];

    pub fn label(price_type: OrderPriceType) -> &'static str {
        match price_type {
            OrderPriceType::Market => "Market",
            OrderPriceType::Limit => "Limit",
            OrderPriceType::StopMarket => "Stop Market",
            OrderPriceType::StopLimit => "Stop Limit",
        }
    }

    pub fn value(label: &str) -> Result<OrderPriceType, UnknownLabel> {
        match label {
            "Market" => Ok(OrderPriceType::Market),
            "Limit" => Ok(OrderPriceType::Limit),
            "Stop Market" => Ok(OrderPriceType::StopMarket),
            "Stop Limit" => Ok(OrderPriceType::StopLimit),
            _ => Err(UnknownLabel(label.to_string())),
        }
    }

    /// Declaration order; the first entry is the default price type.
    pub fn all_labels() -> &'static [&'static str] {
        &["Market", "Limit", "Stop Market", "Stop Limit"]
    }

    /// Price types needing an explicit expiration under the given policy.
    pub fn expiration_types(policy: ExpirationPolicy) -> &'static [OrderPriceType] {
        match policy {
            ExpirationPolicy::MarketExempt => &[
                OrderPriceType::Limit,
                OrderPriceType::StopMarket,
                OrderPriceType::StopLimit,
            ],
            ExpirationPolicy::Always => &[
                OrderPriceType::Market,
                OrderPriceType::Limit,
                OrderPriceType::StopMarket,
                OrderPriceType::StopLimit,
            ],
        }
    }
}
