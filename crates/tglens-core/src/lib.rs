//! Core domain + application logic for the tglens resolver service.
//!
//! This crate is intentionally framework-agnostic. The Telegram Bot API lives
//! behind the `Directory` port (trait) implemented in the adapter crate.

pub mod age;
pub mod config;
pub mod datacenter;
pub mod errors;
pub mod logging;
pub mod normalize;
pub mod ports;
pub mod resolver;
pub mod response;
pub mod status;

pub use errors::{Error, Result};
