//! Finished screen
//!
//! Two big title lines, the final score, and once the guard has passed a
//! blinking "click to continue".

use std::time::Duration;

use super::{FrameInput, ScreenComposer};
use crate::blink;
use crate::draw::{DrawList, TextSize, colors};
use crate::layout::RegionKind;

pub const CONTINUE_PROMPT: &str = "click to continue";

pub(super) fn draw(
    composer: &ScreenComposer,
    frame: &FrameInput<'_>,
    elapsed: Duration,
    list: &mut DrawList,
) {
    let layout = composer.layout();
    let settings = composer.settings();

    list.text(layout.region(RegionKind::TitleTop), "Game", colors::TEXT, TextSize::Big);
    list.text(layout.region(RegionKind::TitleBottom), "finished", colors::TEXT, TextSize::Big);
    list.text(
        layout.region(RegionKind::FinalScore),
        format!("(score: {})", frame.score),
        colors::TEXT,
        TextSize::Normal,
    );

    if blink::is_prompt_visible(elapsed, settings.guard_duration(), settings.blink_period()) {
        list.text(layout.region(RegionKind::Prompt), CONTINUE_PROMPT, colors::TEXT_DIM, TextSize::Normal);
    }
}
