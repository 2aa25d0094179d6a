pub mod sim;

use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::mpsc;

/// Last-traded price for a symbol, as delivered by a market-data feed.
#[derive(Debug, Clone)]
pub struct Quote {
    pub symbol: String,
    pub last: Decimal,
    pub timestamp_ms: u64,
}

#[derive(Debug, Clone)]
pub enum QuoteRequest {
    /// Start quoting a symbol; the feed pushes updates to the session.
    Watch { symbol: String },
}

/// Market data source abstraction.
pub trait QuoteFeed: Send + Sync {
    fn request_sender(&self) -> mpsc::Sender<QuoteRequest>;

    /// Start the feed (spawn tasks, connect sockets, etc.)
    fn start(self: Arc<Self>);
}
