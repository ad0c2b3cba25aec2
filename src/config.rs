//! Carousel configuration.
//!
//! Every field defaults to the named constant in [`crate::constants`]; hosts
//! that embed the widget may override them from JSON.

use crate::constants::{SWIPE_THRESHOLD, VIEW_ELEMENT_ID};
use crate::error::{CarouselError, CarouselResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Minimum absolute drop displacement (pixels) that changes panel
    pub threshold: f32,
    /// Id of the element receiving pointer events
    pub view_id: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            threshold: SWIPE_THRESHOLD,
            view_id: VIEW_ELEMENT_ID.to_string(),
        }
    }
}

impl CarouselConfig {
    /// Parse and validate a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> CarouselResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CarouselResult<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "threshold must be a non-negative number, got {}",
                self.threshold
            )));
        }
        if self.view_id.trim().is_empty() {
            return Err(CarouselError::InvalidConfig("view_id is empty".to_string()));
        }
        Ok(())
    }
}
