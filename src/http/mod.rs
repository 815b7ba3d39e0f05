//! HTTP client layer: `ListingsHttp`, one method per endpoint.

pub mod client;

pub use client::ListingsHttp;
