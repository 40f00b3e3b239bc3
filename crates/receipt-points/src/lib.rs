//! Receipt validation, points scoring, and the HTTP surface that stores and serves scores.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
