//! Reporting helpers for observing pool state

pub mod logger;

pub use logger::{format_summary, print_summary};
