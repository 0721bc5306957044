//! Utility module for mediactl
//!
//! This module provides common utilities used throughout the library:
//! - Error handling with custom error types
//! - Time formatting for the control bar

pub mod error;

// Re-export commonly used items
pub use error::{IntoPlayerError, PlayerError, Result};

/// Format a playback position for the control bar
///
/// # Arguments
///
/// * `seconds` - Position in seconds; negative values display as `0:00`
///
/// # Returns
///
/// Formatted string in the format `M:SS`, minutes unpadded and growing
/// without wrapping into hours
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
