//! Display formatting for numbers and decimals.

pub mod decimal;
pub mod num;
