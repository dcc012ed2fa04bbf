//! Highscore screen: title, leaderboard rows, then "click to start"

use std::time::Duration;

use super::{FrameInput, ScreenComposer};
use crate::blink;
use crate::draw::{DrawList, TextSize, colors};
use crate::layout::RegionKind;
use crate::leaderboard::compose_rows;

pub const START_PROMPT: &str = "click to start";

pub(super) fn draw(
    composer: &ScreenComposer,
    frame: &FrameInput<'_>,
    elapsed: Duration,
    list: &mut DrawList,
) {
    let layout = composer.layout();
    let settings = composer.settings();

    list.text(layout.region(RegionKind::HighscoreTitle), "Highscore", colors::TEXT, TextSize::Big);

    // Loading blinks from the start of the phase; it has no guard
    for row in compose_rows(
        frame.leaderboard,
        frame.local_player,
        layout,
        elapsed,
        settings.blink_period(),
    ) {
        row.append_to(list);
    }

    if blink::is_prompt_visible(elapsed, settings.guard_duration(), settings.blink_period()) {
        list.text(layout.region(RegionKind::Prompt), START_PROMPT, colors::TEXT_DIM, TextSize::Normal);
    }
}
