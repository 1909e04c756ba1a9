//! Viewport dimensions as read from the host window.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inner size of the host window, in CSS pixels.
///
/// Always re-read from the host at the start of a cycle; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build a size from raw host readings (e.g. DOM `innerWidth`).
    ///
    /// Fractions truncate toward zero. NaN and negatives become 0, values
    /// beyond `u32::MAX` saturate.
    pub fn from_host(width: f64, height: f64) -> Self {
        Self {
            width: clamp_dimension(width),
            height: clamp_dimension(height),
        }
    }
}

impl fmt::Display for ViewportSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn clamp_dimension(value: f64) -> u32 {
    // `as` saturates and maps NaN to 0.
    value.max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_host_truncates_fractions() {
        assert_eq!(
            ViewportSize::from_host(1024.9, 767.5),
            ViewportSize::new(1024, 767)
        );
    }

    #[test]
    fn from_host_clamps_bad_readings() {
        assert_eq!(ViewportSize::from_host(-3.0, f64::NAN), ViewportSize::new(0, 0));
        assert_eq!(
            ViewportSize::from_host(1e12, f64::INFINITY),
            ViewportSize::new(u32::MAX, u32::MAX)
        );
    }

    #[test]
    fn display_is_width_by_height() {
        assert_eq!(ViewportSize::new(800, 600).to_string(), "800x600");
    }
}
