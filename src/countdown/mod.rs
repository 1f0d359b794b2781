//! Countdown module
//!
//! This module provides:
//! - Pure remaining-time arithmetic and urgency classification per target
//! - The 1-second tick driver that re-runs it for live displays

pub mod engine;
pub mod ticker;

pub use engine::{breakdown, remaining, urgency, Breakdown, Countdown, Urgency};
pub use ticker::{Ticker, TICK_INTERVAL};
