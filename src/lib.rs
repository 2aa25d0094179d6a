pub mod account;
pub mod market;
pub mod presenter;
pub mod session;
pub mod ticket;
