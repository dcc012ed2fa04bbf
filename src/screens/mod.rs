//! Phase screen dispatch
//!
//! One renderer per `GamePhase`. The match in `ScreenComposer::compose` is
//! exhaustive, so a new phase cannot be added without a screen for it.
//!
//! Screens are pure: the same frame input and elapsed time always produce the
//! same instructions. The only long-lived value is the pause overlay, built
//! once when the composer is constructed and never changed.

mod finished;
mod highscore;
mod paused;
mod playing;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::draw::{DrawList, OverlayImage, RenderSurface, colors};
use crate::error::{ConfigError, PhaseError};
use crate::layout::Layout;
use crate::leaderboard::{LeaderboardSnapshot, PlayerId};
use crate::settings::ScreenSettings;

pub use finished::CONTINUE_PROMPT;
pub use highscore::START_PROMPT;
pub use playing::{format_score, format_time};

/// Presentation phase, owned by the game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Paused,
    Finished,
    ShowingHighscore,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::Finished => "finished",
            GamePhase::ShowingHighscore => "highscore",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for GamePhase {
    type Error = PhaseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(GamePhase::Playing),
            1 => Ok(GamePhase::Paused),
            2 => Ok(GamePhase::Finished),
            3 => Ok(GamePhase::ShowingHighscore),
            other => Err(PhaseError::UnknownCode(other)),
        }
    }
}

impl FromStr for GamePhase {
    type Err = PhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "playing" => Ok(GamePhase::Playing),
            "paused" => Ok(GamePhase::Paused),
            "finished" => Ok(GamePhase::Finished),
            "highscore" | "showinghighscore" => Ok(GamePhase::ShowingHighscore),
            _ => Err(PhaseError::UnknownName(s.to_string())),
        }
    }
}

/// The board simulation, as far as the screens are concerned
pub trait BoardView {
    /// Height of the drawn board; the HUD sits directly below it
    fn height(&self) -> f32;

    /// Append the board's own instructions
    fn draw(&self, list: &mut DrawList);
}

/// Everything a frame depends on, read fresh from the game every frame
#[derive(Clone, Copy)]
pub struct FrameInput<'a> {
    pub phase: GamePhase,
    pub score: i64,
    /// Countdown shown while playing
    pub time_remaining: Duration,
    /// When the current phase began; prompts and blinking count from here
    pub phase_started: Instant,
    pub local_player: &'a PlayerId,
    pub leaderboard: &'a LeaderboardSnapshot,
    pub board: &'a dyn BoardView,
}

/// Builds the instruction list for each frame
#[derive(Debug, Clone)]
pub struct ScreenComposer {
    settings: ScreenSettings,
    layout: Layout,
    pause_overlay: OverlayImage,
}

impl ScreenComposer {
    /// Validate `settings` and build the pause overlay
    pub fn new(settings: ScreenSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let layout = Layout::from_settings(&settings);
        let pause_overlay = OverlayImage::new(layout.canvas(), colors::PAUSE_FILL);
        log::debug!(
            "Screen composer ready ({}x{} canvas)",
            settings.canvas_width,
            settings.canvas_height
        );
        Ok(Self {
            settings,
            layout,
            pause_overlay,
        })
    }

    pub fn settings(&self) -> &ScreenSettings {
        &self.settings
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn pause_overlay(&self) -> &OverlayImage {
        &self.pause_overlay
    }

    /// Instructions for `frame`, `elapsed` after its phase started
    pub fn compose(&self, frame: &FrameInput<'_>, elapsed: Duration) -> DrawList {
        let mut list = DrawList::new();
        match frame.phase {
            GamePhase::Playing => playing::draw(self, frame, &mut list),
            GamePhase::Paused => paused::draw(self, frame, &mut list),
            GamePhase::Finished => finished::draw(self, frame, elapsed, &mut list),
            GamePhase::ShowingHighscore => highscore::draw(self, frame, elapsed, &mut list),
        }
        log::trace!("Composed {} frame: {} instructions", frame.phase, list.len());
        list
    }

    /// Sample `clock` and compose
    pub fn compose_now(&self, frame: &FrameInput<'_>, clock: &impl Clock) -> DrawList {
        self.compose(frame, clock.since(frame.phase_started))
    }

    /// Compose and submit one frame
    pub fn render(&self, frame: &FrameInput<'_>, clock: &impl Clock, surface: &mut impl RenderSurface) {
        let list = self.compose_now(frame, clock);
        surface.submit(&list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_codes() {
        assert_eq!(GamePhase::try_from(0u8), Ok(GamePhase::Playing));
        assert_eq!(GamePhase::try_from(3u8), Ok(GamePhase::ShowingHighscore));
        assert_eq!(GamePhase::try_from(4u8), Err(PhaseError::UnknownCode(4)));
    }

    #[test]
    fn test_phase_names() {
        assert_eq!("Paused".parse::<GamePhase>(), Ok(GamePhase::Paused));
        assert_eq!("highscore".parse::<GamePhase>(), Ok(GamePhase::ShowingHighscore));
        assert!(matches!("lobby".parse::<GamePhase>(), Err(PhaseError::UnknownName(_))));
        for phase in [
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::Finished,
            GamePhase::ShowingHighscore,
        ] {
            assert_eq!(phase.to_string().parse::<GamePhase>(), Ok(phase));
        }
    }

    #[test]
    fn test_composer_rejects_invalid_settings() {
        let settings = ScreenSettings {
            canvas_width: 0.0,
            ..Default::default()
        };
        assert!(ScreenComposer::new(settings).is_err());
    }

    #[test]
    fn test_overlay_covers_canvas() {
        let composer = ScreenComposer::new(ScreenSettings::default()).unwrap();
        assert_eq!(composer.pause_overlay().size, composer.layout().canvas());
        assert_eq!(composer.pause_overlay().fill, colors::PAUSE_FILL);
    }
}
