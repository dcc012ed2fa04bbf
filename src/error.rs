//! Error types
//!
//! Composition itself never fails. Everything that can go wrong is caught at
//! the boundary: building a configuration, decoding a phase code, or decoding
//! a leaderboard payload.

use thiserror::Error;

/// Rejected screen configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas must be at least {min_width}x{min_height}, got {width}x{height}")]
    CanvasTooSmall {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },
    #[error("score and time boxes need {needed}px of width, canvas has {width}px")]
    CardsTooWide { needed: f32, width: f32 },
    #[error("blink period must be non-zero")]
    ZeroBlinkPeriod,
    #[error("overlay opacity must be within 0..=1, got {0}")]
    OverlayOpacity(f32),
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),
}

/// Phase code that names no known phase
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhaseError {
    #[error("unknown game phase code {0}")]
    UnknownCode(u8),
    #[error("unknown game phase name {0:?}")]
    UnknownName(String),
}

/// Leaderboard payload that could not be decoded
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("malformed leaderboard payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("player id must not be empty (entry {index})")]
    EmptyPlayerId { index: usize },
}
