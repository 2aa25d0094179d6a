use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::presenter::{
    OrderActionPresenter, OrderExpirationPresenter, OrderPriceTypePresenter,
};
use crate::ticket::input::parse_decimal;
use crate::ticket::order::Order;

use super::event::TicketEvent;
use super::review::TicketReview;

pub struct SessionRuntime {
    sender: mpsc::Sender<TicketEvent>,
}

impl SessionRuntime {
    pub fn sender(&self) -> mpsc::Sender<TicketEvent> {
        self.sender.clone()
    }
}

/// Spawns the event loop that owns the ticket for one session.
///
/// The order itself stays single-threaded and synchronous; collaborators
/// (quote feed, account linking, the UI) reach it only through events.
/// An unrecognized picker label is logged and ignored, it never crashes
/// the session or silently picks a default.
pub fn start_session(mut order: Order) -> SessionRuntime {
    let (tx, mut rx) = mpsc::channel::<TicketEvent>(1024);

    tokio::spawn(async move {
        info!("[SESSION] started");

        while let Some(event) = rx.recv().await {
            match event {
                TicketEvent::AccountLinked { account } => {
                    info!("[SESSION] account linked: {}", account.account_name);
                    order.set_account(account);
                }

                TicketEvent::SymbolSelected { symbol } => {
                    info!("[SESSION] symbol selected: {symbol}");
                    order.set_symbol(&symbol);
                }

                TicketEvent::ActionSelected { label } => {
                    match OrderActionPresenter::value(&label) {
                        Ok(action) => order.set_action(action),
                        Err(err) => warn!("[SESSION] {err}, action unchanged"),
                    }
                }

                TicketEvent::PriceTypeSelected { label } => {
                    match OrderPriceTypePresenter::value(&label) {
                        Ok(price_type) => order.set_price_type(price_type),
                        Err(err) => warn!("[SESSION] {err}, price type unchanged"),
                    }
                }

                TicketEvent::ExpirationSelected { label } => {
                    match OrderExpirationPresenter::value(&label) {
                        Ok(expiration) => order.set_expiration(expiration),
                        Err(err) => warn!("[SESSION] {err}, expiration unchanged"),
                    }
                }

                TicketEvent::QuantityChanged { text } => {
                    order.set_quantity(parse_decimal(&text));
                }

                TicketEvent::LimitPriceChanged { text } => {
                    order.set_limit_price(parse_decimal(&text));
                }

                TicketEvent::StopPriceChanged { text } => {
                    order.set_stop_price(parse_decimal(&text));
                }

                TicketEvent::QuoteUpdated { quote } => {
                    // A quote for some other symbol is a superseded fetch.
                    if order.symbol.as_deref() == Some(quote.symbol.as_str()) {
                        info!("[SESSION] quote {} last={}", quote.symbol, quote.last);
                        order.set_last_quote_price(Some(quote.last));
                    } else {
                        warn!(
                            "[SESSION] dropping quote for {}, ticket is on {:?}",
                            quote.symbol, order.symbol
                        );
                    }
                }

                TicketEvent::GetReview { reply } => {
                    let _ = reply.send(TicketReview::of(&order));
                }
            }
        }

        info!("[SESSION] channel closed, exiting");
    });

    SessionRuntime { sender: tx }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;
    use tokio::sync::oneshot;

    use crate::account::{LinkedAccount, Position};
    use crate::market::Quote;

    use super::*;

    async fn review(runtime: &SessionRuntime) -> TicketReview {
        let (reply, rx) = oneshot::channel();
        runtime
            .sender()
            .send(TicketEvent::GetReview { reply })
            .await
            .unwrap();
        rx.await.unwrap()
    }

    fn quote(symbol: &str, last: rust_decimal::Decimal) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            last,
            timestamp_ms: 0,
        }
    }

    #[tokio::test]
    async fn builds_a_valid_limit_ticket() {
        let runtime = start_session(Order::new());
        let tx = runtime.sender();

        let account = Arc::new(LinkedAccount::new("Dummy Broker", "Individual **1234"));
        tx.send(TicketEvent::AccountLinked { account }).await.unwrap();
        tx.send(TicketEvent::SymbolSelected { symbol: "AAPL".to_string() })
            .await
            .unwrap();
        tx.send(TicketEvent::PriceTypeSelected { label: "Limit".to_string() })
            .await
            .unwrap();
        tx.send(TicketEvent::QuantityChanged { text: "10".to_string() })
            .await
            .unwrap();

        let r = review(&runtime).await;
        assert!(!r.is_valid);
        assert!(r.requires_limit_price);
        assert!(r.requires_expiration);

        tx.send(TicketEvent::LimitPriceChanged { text: "150.25".to_string() })
            .await
            .unwrap();

        let r = review(&runtime).await;
        assert!(r.is_valid);
        assert_eq!(r.limit_price, Some(dec!(150.25)));
        assert_eq!(r.price_type_label, "Limit");
    }

    #[tokio::test]
    async fn unknown_picker_label_leaves_the_ticket_unchanged() {
        let runtime = start_session(Order::new());
        let tx = runtime.sender();

        tx.send(TicketEvent::ActionSelected { label: "Sell Short".to_string() })
            .await
            .unwrap();
        tx.send(TicketEvent::ActionSelected { label: "Hodl".to_string() })
            .await
            .unwrap();

        let r = review(&runtime).await;
        assert_eq!(r.action_label, "Sell Short");
    }

    #[tokio::test]
    async fn malformed_quantity_reads_as_absent() {
        let runtime = start_session(Order::new());
        let tx = runtime.sender();

        tx.send(TicketEvent::QuantityChanged { text: "10".to_string() })
            .await
            .unwrap();
        tx.send(TicketEvent::QuantityChanged { text: "1o".to_string() })
            .await
            .unwrap();

        let r = review(&runtime).await;
        assert_eq!(r.quantity, None);
        assert!(!r.is_valid);
    }

    #[tokio::test]
    async fn quote_updates_feed_the_estimate() {
        let runtime = start_session(Order::new());
        let tx = runtime.sender();

        tx.send(TicketEvent::SymbolSelected { symbol: "AAPL".to_string() })
            .await
            .unwrap();
        tx.send(TicketEvent::QuantityChanged { text: "10".to_string() })
            .await
            .unwrap();
        tx.send(TicketEvent::QuoteUpdated { quote: quote("AAPL", dec!(150.25)) })
            .await
            .unwrap();

        let r = review(&runtime).await;
        assert_eq!(r.estimated_change, Some(dec!(1502.50)));
    }

    #[tokio::test]
    async fn superseded_quote_for_another_symbol_is_dropped() {
        let runtime = start_session(Order::new());
        let tx = runtime.sender();

        tx.send(TicketEvent::SymbolSelected { symbol: "MSFT".to_string() })
            .await
            .unwrap();
        tx.send(TicketEvent::QuoteUpdated { quote: quote("AAPL", dec!(150.25)) })
            .await
            .unwrap();

        let r = review(&runtime).await;
        assert_eq!(r.last_quote_price, None);
    }

    #[tokio::test]
    async fn seeded_ticket_only_needs_a_quantity() {
        let account = Arc::new(LinkedAccount::new("Dummy Broker", "Individual **1234"));
        let position = Position {
            symbol: "GE".to_string(),
            quantity: dec!(25),
            last_price: dec!(18.50),
        };
        let runtime = start_session(Order::for_position(account, &position));
        let tx = runtime.sender();

        let r = review(&runtime).await;
        assert!(!r.is_valid);
        assert_eq!(r.symbol.as_deref(), Some("GE"));
        assert_eq!(r.last_quote_price, Some(dec!(18.50)));

        tx.send(TicketEvent::QuantityChanged { text: "25".to_string() })
            .await
            .unwrap();

        let r = review(&runtime).await;
        assert!(r.is_valid);
        assert_eq!(r.estimated_change, Some(dec!(462.50)));
    }
}
