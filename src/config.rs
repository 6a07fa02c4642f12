use std::time::Duration;

use crate::constants::DEFAULT_AUTO_ADVANCE_MS;
use crate::error::CarouselError;

/// Widget options. Host concerns (window size, easing, image order) live in the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub auto_advance_interval: Duration,
    /// Start with the automatic advance running.
    pub autoplay: bool,
    /// Restart the current auto-advance period after a manual transition.
    pub reset_timer_on_interaction: bool,
    pub initial_index: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_interval: Duration::from_millis(DEFAULT_AUTO_ADVANCE_MS),
            autoplay: true,
            reset_timer_on_interaction: false,
            initial_index: 0,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.auto_advance_interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(())
    }
}
