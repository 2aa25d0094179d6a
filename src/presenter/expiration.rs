use crate::ticket::types::OrderExpiration;

use super::UnknownLabel;

/// Maps time-in-force values to the labels shown on picker buttons.
pub struct OrderExpirationPresenter;

impl OrderExpirationPresenter {
    pub fn label(expiration: OrderExpiration) -> &'static str {
        match expiration {
            OrderExpiration::GoodForDay => "Good for the Day",
            OrderExpiration::GoodUntilCanceled => "Good until Canceled",
        }
    }

    pub fn value(label: &str) -> Result<OrderExpiration, UnknownLabel> {
        match label {
            "Good for the Day" => Ok(OrderExpiration::GoodForDay),
            "Good until Canceled" => Ok(OrderExpiration::GoodUntilCanceled),
            _ => Err(UnknownLabel(label.to_string())),
        }
    }

    /// Declaration order; the first entry is the default expiration.
    pub fn all_labels() -> &'static [&'static str] {
        &["Good for the Day", "Good until Canceled"]
    }
}
