//! Page configuration: scroll thresholds, breakpoint, and timing.
//!
//! Every field has a default, so hosts may pass a partial JSON object (or
//! nothing at all). Delays are plain milliseconds on the wire and
//! [`Duration`]s at the call sites.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub scroll: ScrollConfig,
    pub nav: NavConfig,
    pub submit: SubmitConfig,
    pub load: LoadConfig,
    pub typewriter: TypewriterConfig,
}

impl PageConfig {
    /// Parse a (possibly partial) JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub navbar_scrolled_px: f64,
    pub back_to_top_px: f64,
    pub active_section_offset_px: f64,
    pub reveal_offset_px: f64,
    pub skill_bar_offset_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_scrolled_px: consts::NAVBAR_SCROLLED_PX,
            back_to_top_px: consts::BACK_TO_TOP_PX,
            active_section_offset_px: consts::ACTIVE_SECTION_OFFSET_PX,
            reveal_offset_px: consts::REVEAL_OFFSET_PX,
            skill_bar_offset_px: consts::SKILL_BAR_OFFSET_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub mobile_breakpoint_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { mobile_breakpoint_px: consts::MOBILE_BREAKPOINT_PX }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    pub latency_ms: u64,
    pub status_clear_ms: u64,
}

impl SubmitConfig {
    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    #[must_use]
    pub fn status_clear(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self { latency_ms: consts::SUBMIT_LATENCY_MS, status_clear_ms: consts::STATUS_CLEAR_MS }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub reveal_delay_ms: u64,
    pub skill_bar_delay_ms: u64,
}

impl LoadConfig {
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    #[must_use]
    pub fn skill_bar_delay(&self) -> Duration {
        Duration::from_millis(self.skill_bar_delay_ms)
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: consts::LOAD_REVEAL_DELAY_MS,
            skill_bar_delay_ms: consts::LOAD_SKILL_BAR_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub speed_ms: u64,
}

impl TypewriterConfig {
    #[must_use]
    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self { speed_ms: consts::TYPEWRITER_SPEED_MS }
    }
}
