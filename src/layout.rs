//! Screen layout
//!
//! Every offset used by the screens lives here as a named region. Regions are
//! derived from the canvas size and, where a screen needs it, a context value
//! (board height for the playing HUD, row index for the leaderboard).
//!
//! Regions drawn together on one screen never overlap:
//!
//! ```text
//! Finished                     Highscore
//! H/2-130 ┌ "Game"   (60) ┐    0   ┌ title (100)   ┐
//! H/2-70  ├ "finished"(60)┤    120 ├ row 0  (30)   ┤
//! H/2+25  ├ score    (30) ┤    ... ├ row 5  (30)   ┤ 300
//! H/2+100 └ prompt   (30) ┘    H/2+100 └ prompt (30) ┘
//! ```
//!
//! The loading line (y=150) replaces the rows and never shares a frame with
//! them.

use glam::Vec2;

use crate::consts::MAX_LEADERBOARD_ROWS;
use crate::geom::Rect;
use crate::settings::ScreenSettings;

/// Height of the score/time boxes below the board
pub const HUD_BOX_HEIGHT: f32 = 100.0;

/// Finished screen title lines
pub const TITLE_LINE_HEIGHT: f32 = 60.0;
const TITLE_TOP_OFFSET: f32 = -130.0;
const TITLE_BOTTOM_OFFSET: f32 = -70.0;
const FINAL_SCORE_OFFSET: f32 = 25.0;

/// Single-line text regions (score line, prompts, loading)
pub const LINE_HEIGHT: f32 = 30.0;
const PROMPT_OFFSET: f32 = 100.0;

pub const HIGHSCORE_TITLE_HEIGHT: f32 = 100.0;
pub const ROW_TOP: f32 = 120.0;
pub const ROW_HEIGHT: f32 = 30.0;
const LOADING_TOP: f32 = 150.0;

/// Horizontal inset of the highlight fill from each side of a row
pub const ROW_PADDING: f32 = 80.0;
const HIGHLIGHT_INSET_TOP: f32 = 2.0;
const HIGHLIGHT_INSET_BOTTOM: f32 = 1.0;

/// Smallest canvas on which all regions fit without overlapping
pub const MIN_CANVAS_WIDTH: f32 = 2.0 * ROW_PADDING + 40.0;
/// The prompt at `H/2 + 100` must sit below the last leaderboard row
pub const MIN_CANVAS_HEIGHT: f32 =
    2.0 * (ROW_TOP + ROW_HEIGHT * MAX_LEADERBOARD_ROWS as f32 - PROMPT_OFFSET);

/// Leaderboard row position, only constructible for ranks 1..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowIndex(u8);

impl RowIndex {
    /// `None` if `index` is past the last displayable rank
    pub fn new(index: usize) -> Option<Self> {
        (index < MAX_LEADERBOARD_ROWS).then_some(Self(index as u8))
    }

    /// Zero-based position
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// One-based rank shown to the player
    pub fn rank(self) -> usize {
        self.get() + 1
    }

    /// Every displayable row, top to bottom
    pub fn all() -> impl Iterator<Item = RowIndex> {
        (0..MAX_LEADERBOARD_ROWS as u8).map(RowIndex)
    }
}

/// Named screen regions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionKind {
    /// Playing: score label beneath the board
    ScoreBox { board_height: f32 },
    /// Playing: time label beside the score box
    TimeBox { board_height: f32 },
    /// Finished: first title line
    TitleTop,
    /// Finished: second title line
    TitleBottom,
    /// Finished: final score line
    FinalScore,
    /// Finished and highscore: continue/start prompt
    Prompt,
    HighscoreTitle,
    /// Highscore: "loading" line while scores are absent
    Loading,
    LeaderboardRow(RowIndex),
    /// Highlight fill behind the local player's row
    RowHighlight(RowIndex),
}

/// Region calculator for a fixed canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    canvas: Vec2,
    card_width: f32,
    card_padding: f32,
}

impl Layout {
    pub fn new(canvas: Vec2, card_width: f32, card_padding: f32) -> Self {
        Self {
            canvas,
            card_width,
            card_padding,
        }
    }

    pub fn from_settings(settings: &ScreenSettings) -> Self {
        Self::new(
            Vec2::new(settings.canvas_width, settings.canvas_height),
            settings.card_draw_width,
            settings.card_draw_padding,
        )
    }

    pub fn canvas(&self) -> Vec2 {
        self.canvas
    }

    /// The whole canvas
    pub fn full(&self) -> Rect {
        Rect::new(0.0, 0.0, self.canvas.x, self.canvas.y)
    }

    pub fn region(&self, kind: RegionKind) -> Rect {
        let w = self.canvas.x;
        let mid = self.canvas.y / 2.0;
        match kind {
            RegionKind::ScoreBox { board_height } => Rect::from_bounds(
                Vec2::new(0.0, board_height),
                Vec2::new(self.card_width, board_height + HUD_BOX_HEIGHT),
            ),
            RegionKind::TimeBox { board_height } => self
                .region(RegionKind::ScoreBox { board_height })
                .moved(Vec2::new(self.card_width + self.card_padding, 0.0)),
            RegionKind::TitleTop => full_width_line(w, mid + TITLE_TOP_OFFSET, TITLE_LINE_HEIGHT),
            RegionKind::TitleBottom => full_width_line(w, mid + TITLE_BOTTOM_OFFSET, TITLE_LINE_HEIGHT),
            RegionKind::FinalScore => full_width_line(w, mid + FINAL_SCORE_OFFSET, LINE_HEIGHT),
            RegionKind::Prompt => full_width_line(w, mid + PROMPT_OFFSET, LINE_HEIGHT),
            RegionKind::HighscoreTitle => full_width_line(w, 0.0, HIGHSCORE_TITLE_HEIGHT),
            RegionKind::Loading => full_width_line(w, LOADING_TOP, LINE_HEIGHT),
            RegionKind::LeaderboardRow(row) => {
                full_width_line(w, ROW_TOP + ROW_HEIGHT * row.get() as f32, ROW_HEIGHT)
            }
            RegionKind::RowHighlight(row) => self.region(RegionKind::LeaderboardRow(row)).inset(
                ROW_PADDING,
                HIGHLIGHT_INSET_TOP,
                ROW_PADDING,
                HIGHLIGHT_INSET_BOTTOM,
            ),
        }
    }
}

fn full_width_line(width: f32, top: f32, height: f32) -> Rect {
    Rect::new(0.0, top, width, height)
}
