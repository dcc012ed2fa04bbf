//! Playing screen: score and countdown beneath the board, then the board

use std::time::Duration;

use super::{FrameInput, ScreenComposer};
use crate::draw::{DrawList, TextSize, colors};
use crate::layout::RegionKind;

pub(super) fn draw(composer: &ScreenComposer, frame: &FrameInput<'_>, list: &mut DrawList) {
    let board_height = frame.board.height();
    let layout = composer.layout();

    list.text(
        layout.region(RegionKind::ScoreBox { board_height }),
        format_score(frame.score),
        colors::TEXT,
        TextSize::Normal,
    );
    list.text(
        layout.region(RegionKind::TimeBox { board_height }),
        format_time(frame.time_remaining),
        colors::TEXT,
        TextSize::Normal,
    );

    frame.board.draw(list);
}

pub fn format_score(score: i64) -> String {
    format!("Score: {}", score)
}

/// Countdown label in seconds with one decimal
///
/// Truncates to tenths, so the label only reads `0.0` once less than a tenth
/// of a second is left.
pub fn format_time(remaining: Duration) -> String {
    let tenths = remaining.as_millis() / 100;
    format!("Time: {}.{}", tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_label() {
        assert_eq!(format_score(1234), "Score: 1234");
        assert_eq!(format_score(0), "Score: 0");
    }

    #[test]
    fn test_time_label_truncates() {
        assert_eq!(format_time(Duration::from_millis(12_340)), "Time: 12.3");
        assert_eq!(format_time(Duration::from_millis(12_399)), "Time: 12.3");
        assert_eq!(format_time(Duration::from_millis(60_000)), "Time: 60.0");
        assert_eq!(format_time(Duration::from_millis(99)), "Time: 0.0");
        assert_eq!(format_time(Duration::ZERO), "Time: 0.0");
    }
}
