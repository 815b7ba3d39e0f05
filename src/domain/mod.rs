//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types with every field holding a usable value
//! - `wire.rs`: Raw, leniently-parsed serde structs matching backend responses
//! - `convert.rs`: `TryFrom`/`From` conversions that neutralize bad fields
//! - `client.rs`: Sub-client with HTTP methods (category only)

pub mod category;
pub mod coin;
pub mod reference_price;
