use rust_decimal::Decimal;

use crate::presenter::{
    OrderActionPresenter, OrderExpirationPresenter, OrderPriceTypePresenter,
};
use crate::ticket::order::Order;

/// Point-in-time view of the ticket for the UI layer: every field as
/// currently assigned, plus the derived flags that drive which inputs are
/// shown and whether the preview button is enabled.
#[derive(Debug, Clone)]
pub struct TicketReview {
    pub symbol: Option<String>,
    pub account_name: Option<String>,
    pub action_label: &'static str,
    pub price_type_label: &'static str,
    pub expiration_label: &'static str,
    pub quantity: Option<Decimal>,
    pub limit_price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
    pub last_quote_price: Option<Decimal>,
    pub requires_limit_price: bool,
    pub requires_stop_price: bool,
    pub requires_expiration: bool,
    pub estimated_change: Option<Decimal>,
    pub is_valid: bool,
}

impl TicketReview {
    pub fn of(order: &Order) -> Self {
        Self {
            symbol: order.symbol.clone(),
            account_name: order.account.as_ref().map(|a| a.account_name.clone()),
            action_label: OrderActionPresenter::label(order.action),
            price_type_label: OrderPriceTypePresenter::label(order.price_type),
            expiration_label: OrderExpirationPresenter::label(order.expiration),
            quantity: order.quantity,
            limit_price: order.limit_price,
            stop_price: order.stop_price,
            last_quote_price: order.last_quote_price,
            requires_limit_price: order.requires_limit_price(),
            requires_stop_price: order.requires_stop_price(),
            requires_expiration: order.requires_expiration(),
            estimated_change: order.estimated_change(),
            is_valid: order.is_valid(),
        }
    }
}
