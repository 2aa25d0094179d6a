pub mod input;
pub mod order;
pub mod types;
