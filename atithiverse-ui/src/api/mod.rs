//! API Module
//!
//! Browser adapters for the client layer's seams.

mod client;

pub use client::{get_api_base, BrowserBackend, GlooSleeper, WebStorage};
