//! North America intraday signal scanner.
//!
//! Fetches recent price bars for a basket of TSX/NYSE/NASDAQ equities, scores
//! each symbol with a handful of technical indicators, and hands a ranked
//! table to a presentation sink on a fixed refresh interval.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod regime;
pub mod scan;
pub mod services;
pub mod signals;
pub mod universe;
