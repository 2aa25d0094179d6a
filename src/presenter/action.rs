use crate::ticket::types::OrderAction;

use super::UnknownLabel;

/// Maps order actions to the labels shown on picker buttons.
pub struct OrderActionPresenter;

impl OrderActionPresenter {
    pub fn label(action: OrderAction) -> &'static str {
        match action {
            OrderAction::Buy => "Buy",
            OrderAction::Sell => "Sell",
            OrderAction::BuyToCover => "Buy to Cover",
            OrderAction::SellShort => "Sell Short",
        }
    }

    pub fn value(label: &str) -> Result<OrderAction, UnknownLabel> {
        match label {
            "Buy" => Ok(OrderAction::Buy),
            "Sell" => Ok(OrderAction::Sell),
            "Buy to Cover" => Ok(OrderAction::BuyToCover),
            "Sell Short" => Ok(OrderAction::SellShort),
            _ => Err(UnknownLabel(label.to_string())),
        }
    }

    /// Declaration order; the first entry is the default action.
    pub fn all_labels() -> &'static [&'static str] {
        &["Buy", "Sell", "Buy to Cover", "Sell Short"]
    }
}
