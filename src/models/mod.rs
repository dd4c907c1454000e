//! Data models for Showdeck
//!
//! This module contains all the core data structures used throughout the application.

mod enums;
mod project;
mod summary;

pub use enums::{Category, Theme};
pub use project::Project;
pub use summary::{AnalyticsSummary, CategoryCounts, TechCount};
