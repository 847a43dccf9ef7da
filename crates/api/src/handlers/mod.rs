//! HTTP handlers, one module per domain.

pub mod monitor;
pub mod parameters;
pub mod readings;
