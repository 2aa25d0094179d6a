use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    pub fn new() -> Self {
        AccountId(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

/// A brokerage account the user has already linked and authenticated.
///
/// Opaque identity; balances and authentication live with the broker
/// integration, not here. The ticket holds a shared reference to one of
/// these, it never owns the account.
#[derive(Debug, Clone)]
pub struct LinkedAccount {
    pub id: AccountId,
    pub broker: String,
    pub account_name: String,
}

impl LinkedAccount {
    pub fn new(broker: &str, account_name: &str) -> Self {
        Self {
            id: AccountId::new(),
            broker: broker.to_string(),
            account_name: account_name.to_string(),
        }
    }
}

/// One holding in a linked account, as reported by the positions fetch.
/// Enough to seed a sell ticket and show shares owned.
#[derive(Debug, Clone)]
pub struct Position {
    pub symbol: String,
    pub quantity: Decimal,
    pub last_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_ids_are_fresh() {
        assert_ne!(AccountId::new(), AccountId::new());
        assert_ne!(AccountId::default(), AccountId::default());
    }
}
