//! Paused screen: the playing screen dimmed by the gray overlay

use super::{FrameInput, ScreenComposer, playing};
use crate::draw::DrawList;

pub(super) fn draw(composer: &ScreenComposer, frame: &FrameInput<'_>, list: &mut DrawList) {
    playing::draw(composer, frame, list);
    list.overlay(*composer.pause_overlay(), composer.settings().pause_overlay_opacity);
}
