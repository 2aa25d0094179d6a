/// What the user wants to do with the shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderAction {
    Buy,
    Sell,
    BuyToCover,
    SellShort,
}

impl Default for OrderAction {
    fn default() -> Self {
        OrderAction::Buy
    }
}

/// Execution strategy. Determines which price fields the ticket needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderPriceType {
    Market,
    Limit,
    StopMarket,
    StopLimit,
}

impl Default for OrderPriceType {
    fn default() -> Self {
        OrderPriceType::Market
    }
}

/// Time-in-force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderExpiration {
    GoodForDay,
    GoodUntilCanceled,
}

impl Default for OrderExpiration {
    fn default() -> Self {
        OrderExpiration::GoodForDay
    }
}

/// Which price types need an explicit time-in-force selection.
///
/// Product policy, not a market fact. `MarketExempt` matches the reference
/// brokers: market orders fill immediately so an expiration is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpirationPolicy {
    MarketExempt,
    Always,
}

impl Default for ExpirationPolicy {
    fn default() -> Self {
        ExpirationPolicy::MarketExempt
    }
}
