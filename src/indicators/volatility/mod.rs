//! Volatility indicators: range ATR

pub mod atr;

pub use atr::*;
