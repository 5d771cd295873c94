//! Data models for Boredom Buster
//!
//! This module contains the core data structures:
//! - Activity records and their display format
//! - Enums for moods and menu choices

pub mod activity;
pub mod enums;

// Re-exports for convenient access
pub use activity::{Activity, DEFAULT_PRIORITY};
pub use enums::{MenuChoice, Mood};
