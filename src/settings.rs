//! Screen composer settings
//!
//! Loaded from JSON; every field has a default so partial files work.
//! `validate` checks the geometric preconditions the layout relies on, and a
//! composer can only be built from settings that pass it.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::layout;

/// Composer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSettings {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Board ===
    /// Width of one drawn card; the score and time boxes are this wide
    pub card_draw_width: f32,
    /// Horizontal gap between the score and time boxes
    pub card_draw_padding: f32,

    // === Timing ===
    /// Full blink cycle in milliseconds
    pub blink_period_ms: u64,
    /// Delay before continue/start prompts appear, in milliseconds
    pub min_time_before_next_game_ms: u64,

    // === Overlay ===
    pub pause_overlay_opacity: f32,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            card_draw_width: CARD_DRAW_WIDTH,
            card_draw_padding: CARD_DRAW_PADDING,

            blink_period_ms: BLINK_PERIOD.as_millis() as u64,
            min_time_before_next_game_ms: MIN_TIME_BEFORE_NEXT_GAME.as_millis() as u64,

            pause_overlay_opacity: PAUSE_OVERLAY_OPACITY,
        }
    }
}

impl ScreenSettings {
    pub fn blink_period(&self) -> Duration {
        Duration::from_millis(self.blink_period_ms)
    }

    pub fn guard_duration(&self) -> Duration {
        Duration::from_millis(self.min_time_before_next_game_ms)
    }

    /// Check that every region fits on the canvas without overlapping
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min_width, min_height) = (layout::MIN_CANVAS_WIDTH, layout::MIN_CANVAS_HEIGHT);
        // Negated comparisons so NaN is rejected too
        if !(self.canvas_width >= min_width && self.canvas_height >= min_height) {
            return Err(ConfigError::CanvasTooSmall {
                width: self.canvas_width,
                height: self.canvas_height,
                min_width,
                min_height,
            });
        }

        let needed = 2.0 * self.card_draw_width + self.card_draw_padding;
        if !(self.card_draw_width > 0.0 && self.card_draw_padding >= 0.0 && needed <= self.canvas_width) {
            return Err(ConfigError::CardsTooWide {
                needed,
                width: self.canvas_width,
            });
        }

        if self.blink_period_ms == 0 {
            return Err(ConfigError::ZeroBlinkPeriod);
        }

        if !(0.0..=1.0).contains(&self.pause_overlay_opacity) {
            return Err(ConfigError::OverlayOpacity(self.pause_overlay_opacity));
        }

        Ok(())
    }

    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded screen settings from {}", path.display());
                Ok(settings)
            }
            Err(e) => {
                log::warn!("Rejected screen settings in {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
