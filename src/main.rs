use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use rust_decimal_macros::dec;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep, Duration};

use orderpad::account::{LinkedAccount, Position};
use orderpad::market::sim::SimQuoteFeed;
use orderpad::market::{QuoteFeed, QuoteRequest};
use orderpad::session::event::TicketEvent;
use orderpad::session::runtime::start_session;
use orderpad::ticket::order::Order;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("[MAIN] starting orderpad demo");

    // one ticket session, seeded from a portfolio holding
    let account = Arc::new(LinkedAccount::new("Dummy Broker", "Individual **1234"));
    let holding = Position {
        symbol: "AAPL".to_string(),
        quantity: dec!(100),
        last_price: dec!(150.10),
    };
    let session = start_session(Order::for_position(account, &holding));
    let tx = session.sender();

    // scripted quote feed wired into the session
    let (req_tx, req_rx) = mpsc::channel::<QuoteRequest>(64);
    let prices = HashMap::from([("AAPL".to_string(), dec!(150.25))]);
    let feed: Arc<dyn QuoteFeed> =
        Arc::new(SimQuoteFeed::new(req_rx, req_tx, tx.clone(), prices));
    feed.clone().start();

    feed.request_sender()
        .send(QuoteRequest::Watch {
            symbol: "AAPL".to_string(),
        })
        .await?;

    // the user fills in the ticket
    tx.send(TicketEvent::PriceTypeSelected {
        label: "Limit".to_string(),
    })
    .await?;
    tx.send(TicketEvent::QuantityChanged {
        text: "10".to_string(),
    })
    .await?;
    tx.send(TicketEvent::LimitPriceChanged {
        text: "149.50".to_string(),
    })
    .await?;

    // let the quote arrive
    sleep(Duration::from_millis(100)).await;

    let (reply, rx) = oneshot::channel();
    tx.send(TicketEvent::GetReview { reply }).await?;
    let review = rx.await?;

    println!(
        "[MAIN] {} {} x{} @ {} ({}), estimated change: {:?}, valid: {}",
        review.action_label,
        review.symbol.as_deref().unwrap_or("?"),
        review
            .quantity
            .map(|q| q.to_string())
            .unwrap_or_else(|| "?".to_string()),
        review
            .limit_price
            .map(|p| p.to_string())
            .unwrap_or_else(|| "?".to_string()),
        review.price_type_label,
        review.estimated_change,
        review.is_valid
    );

    println!("[MAIN] exiting");
    Ok(())
}
