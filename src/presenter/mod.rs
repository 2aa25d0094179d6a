pub mod action;
pub mod expiration;
pub mod price_type;

pub use action::OrderActionPresenter;
pub use expiration::OrderExpirationPresenter;
pub use price_type::OrderPriceTypePresenter;

use thiserror::Error;

/// Reverse lookup was handed text that matches no known label.
///
/// Surfaced explicitly so the caller can ignore or re-prompt; never coerced
/// to the default variant, which would mask a data-entry bug as a choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized label: {0:?}")]
pub struct UnknownLabel(pub String);
