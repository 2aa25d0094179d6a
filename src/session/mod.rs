pub mod event;
pub mod review;
pub mod runtime;
