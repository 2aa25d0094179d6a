use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rust_decimal::Decimal;
use tokio::sync::{mpsc, Mutex};
use tokio::time::{sleep, Duration};
use tracing::{info, warn};

use crate::market::{Quote, QuoteFeed, QuoteRequest};
use crate::session::event::TicketEvent;

struct SimQuoteFeedInner {
    req_rx: mpsc::Receiver<QuoteRequest>,
    session_tx: mpsc::Sender<TicketEvent>,
}

/// Scripted quote feed for tests and the demo binary. Answers each watch
/// request with a canned last price after a short delay, the way a real
/// feed would answer over the network.
pub struct SimQuoteFeed {
    req_tx: mpsc::Sender<QuoteRequest>,
    prices: HashMap<String, Decimal>,
    inner: Arc<Mutex<SimQuoteFeedInner>>,
}

impl SimQuoteFeed {
    pub fn new(
        req_rx: mpsc::Receiver<QuoteRequest>,
        req_tx: mpsc::Sender<QuoteRequest>,
        session_tx: mpsc::Sender<TicketEvent>,
        prices: HashMap<String, Decimal>,
    ) -> Self {
        Self {
            req_tx,
            prices,
            inner: Arc::new(Mutex::new(SimQuoteFeedInner { req_rx, session_tx })),
        }
    }
}

impl QuoteFeed for SimQuoteFeed {
    fn request_sender(&self) -> mpsc::Sender<QuoteRequest> {
        self.req_tx.clone()
    }

    fn start(self: Arc<Self>) {
        let inner = self.inner.clone();
        let prices = self.prices.clone();

        tokio::spawn(async move {
            let mut inner = inner.lock().await;

            while let Some(req) = inner.req_rx.recv().await {
                match req {
                    QuoteRequest::Watch { symbol } => {
                        sleep(Duration::from_millis(20)).await;

                        let Some(last) = prices.get(&symbol).copied() else {
                            warn!("[SIM] no quote for {symbol}");
                            continue;
                        };

                        info!("[SIM] quote {symbol} last={last}");

                        let _ = inner
                            .session_tx
                            .send(TicketEvent::QuoteUpdated {
                                quote: Quote {
                                    symbol,
                                    last,
                                    timestamp_ms: now_ms(),
                                },
                            })
                            .await;
                    }
                }
            }
        });
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
