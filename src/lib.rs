//! Splendid Screens - screen composition for a card-matching game
//!
//! Core modules:
//! - `blink`: Time-derived visibility toggling
//! - `layout`: Named regions for every piece of text and highlight
//! - `leaderboard`: Score entries, snapshots and row composition
//! - `screens`: Phase dispatch and the per-phase renderers
//! - `draw`: Draw instructions and the render surface port
//! - `settings`: Validated composer configuration

pub mod blink;
pub mod clock;
pub mod draw;
pub mod error;
pub mod geom;
pub mod layout;
pub mod leaderboard;
pub mod screens;
pub mod settings;

pub use clock::{Clock, ManualClock, SystemClock};
pub use draw::{Color, DrawInstruction, DrawList, OverlayImage, RecordingSurface, RenderSurface, TextSize};
pub use error::{ConfigError, LeaderboardError, PhaseError};
pub use geom::Rect;
pub use layout::{Layout, RegionKind, RowIndex};
pub use leaderboard::{LeaderboardSnapshot, PlayerId, ScoreEntry, SharedLeaderboard};
pub use screens::{BoardView, FrameInput, GamePhase, ScreenComposer};
pub use settings::ScreenSettings;

/// Screen configuration constants
pub mod consts {
    use std::time::Duration;

    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 640.0;

    /// Width of a single card as drawn on the board
    pub const CARD_DRAW_WIDTH: f32 = 140.0;
    pub const CARD_DRAW_PADDING: f32 = 10.0;

    /// Full blink cycle (on + off)
    pub const BLINK_PERIOD: Duration = Duration::from_millis(1000);

    /// Time before a continue/start prompt may appear
    pub const MIN_TIME_BEFORE_NEXT_GAME: Duration = Duration::from_millis(2000);

    /// Opacity of the gray pause overlay (scene shows through at ~10%)
    pub const PAUSE_OVERLAY_OPACITY: f32 = 0.9;

    /// Leaderboard rows shown at most (ranks 1..=6)
    pub const MAX_LEADERBOARD_ROWS: usize = 6;
}
