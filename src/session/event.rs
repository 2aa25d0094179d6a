use std::sync::Arc;

use tokio::sync::oneshot;

use crate::account::LinkedAccount;
use crate::market::Quote;

use super::review::TicketReview;

/// Everything that can happen to a ticket while the user builds it.
///
/// Pickers report the label the user tapped; text fields report their raw
/// contents. Each input has its own variant, so the session never has to
/// guess which field changed.
#[derive(Debug)]
pub enum TicketEvent {
    // UI → session
    AccountLinked { account: Arc<LinkedAccount> },
    SymbolSelected { symbol: String },
    ActionSelected { label: String },
    PriceTypeSelected { label: String },
    ExpirationSelected { label: String },
    QuantityChanged { text: String },
    LimitPriceChanged { text: String },
    StopPriceChanged { text: String },

    // market data → session
    QuoteUpdated { quote: Quote },

    // UI → session, reply with the current state of the ticket
    GetReview { reply: oneshot::Sender<TicketReview> },
}
