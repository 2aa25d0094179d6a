use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::account::{LinkedAccount, Position};
use crate::presenter::OrderPriceTypePresenter;

use super::types::{ExpirationPolicy, OrderAction, OrderExpiration, OrderPriceType};

/// An in-progress, unsubmitted trade request.
///
/// One instance per ticket session: created fresh (optionally seeded from a
/// portfolio position), mutated field-by-field as the user makes selections,
/// discarded on submit or cancel. Validity is recomputed on every query,
/// nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct Order {
    pub account: Option<Arc<LinkedAccount>>,
    pub symbol: Option<String>,
    pub action: OrderAction,
    pub price_type: OrderPriceType,
    pub expiration: OrderExpiration,
    pub expiration_policy: ExpirationPolicy,
    pub quantity: Option<Decimal>,
    pub limit_price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
    pub last_quote_price: Option<Decimal>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket seeded from a selected portfolio holding. The holding's last
    /// known price stands in as the quote until the feed answers.
    pub fn for_position(account: Arc<LinkedAccount>, position: &Position) -> Self {
        Self {
            account: Some(account),
            symbol: Some(position.symbol.clone()),
            last_quote_price: Some(position.last_price),
            ..Self::default()
        }
    }

    /* ---------- Setters (UI → core) ---------- */

    pub fn set_account(&mut self, account: Arc<LinkedAccount>) {
        self.account = Some(account);
    }

    pub fn set_symbol(&mut self, symbol: &str) {
        self.symbol = Some(symbol.to_string());
    }

    pub fn set_action(&mut self, action: OrderAction) {
        self.action = action;
    }

    pub fn set_price_type(&mut self, price_type: OrderPriceType) {
        self.price_type = price_type;
    }

    pub fn set_expiration(&mut self, expiration: OrderExpiration) {
        self.expiration = expiration;
    }

    pub fn set_quantity(&mut self, quantity: Option<Decimal>) {
        self.quantity = quantity;
    }

    pub fn set_limit_price(&mut self, price: Option<Decimal>) {
        self.limit_price = price;
    }

    pub fn set_stop_price(&mut self, price: Option<Decimal>) {
        self.stop_price = price;
    }

    /// Fed by the market-data collaborator when a quote resolves.
    pub fn set_last_quote_price(&mut self, price: Option<Decimal>) {
        self.last_quote_price = price;
    }

    /* ---------- Derived queries (core → UI) ---------- */

    pub fn requires_limit_price(&self) -> bool {
        OrderPriceTypePresenter::LIMIT_TYPES.contains(&self.price_type)
    }

    pub fn requires_stop_price(&self) -> bool {
        OrderPriceTypePresenter::STOP_TYPES.contains(&self.price_type)
    }

    pub fn requires_expiration(&self) -> bool {
        OrderPriceTypePresenter::expiration_types(self.expiration_policy)
            .contains(&self.price_type)
    }

    /// Display-only projection of the order's monetary impact. Computed from
    /// the last known quote, never from the execution price, so it must not
    /// be used for submission.
    pub fn estimated_change(&self) -> Option<Decimal> {
        match (self.last_quote_price, self.quantity) {
            (Some(quote), Some(quantity)) => Some(quote * quantity),
            _ => None,
        }
    }

    /// Whether the ticket is submittable as currently filled in.
    ///
    /// Fields the current price type does not require may hold stale values
    /// from a prior selection; they are ignored here, not cleared. Clearing
    /// is the UI's job.
    pub fn is_valid(&self) -> bool {
        self.validate_quantity()
            && self.validate_price_type()
            && self.symbol.is_some()
            && self.account.is_some()
    }

    /* ---------- Internal ---------- */

    fn validate_quantity(&self) -> bool {
        match self.quantity {
            Some(quantity) => is_greater_than_zero(quantity),
            None => false,
        }
    }

    fn validate_price_type(&self) -> bool {
        match self.price_type {
            OrderPriceType::Market => true,
            OrderPriceType::Limit => self.validate_limit(),
            OrderPriceType::StopMarket => self.validate_stop(),
            OrderPriceType::StopLimit => self.validate_limit() && self.validate_stop(),
        }
    }

    fn validate_limit(&self) -> bool {
        match self.limit_price {
            Some(price) => is_greater_than_zero(price),
            None => false,
        }
    }

    fn validate_stop(&self) -> bool {
        match self.stop_price {
            Some(price) => is_greater_than_zero(price),
            None => false,
        }
    }
}

/// Strict decimal comparison. Binary floats can misclassify boundary values;
/// money never goes through f64 here.
fn is_greater_than_zero(value: Decimal) -> bool {
    value > dec!(0)
}
