//! Core library functions for Showdeck

pub mod analytics;

pub use analytics::AnalyticsCache;
