//! moodlog - Terminal emotion journal
//!
//! Records how you feel (emotion, intensity, what triggered it) into a local
//! key/value store and lets you review entries grouped by day.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
