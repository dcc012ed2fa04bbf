//! Draw instructions and the render surface port
//!
//! The composer issues no pixel operations. It produces an ordered list of
//! instructions and hands it to a `RenderSurface`, which owns fonts, images
//! and blitting. Later instructions paint over earlier ones.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// Linear RGBA color, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
    }
}

/// Colors used by the screens
pub mod colors {
    use super::Color;

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    /// Regular text on the dark background
    pub const TEXT: Color = WHITE;
    /// Loading text and prompts
    pub const TEXT_DIM: Color = LIGHT_GRAY;
    /// Text drawn on top of a highlight fill
    pub const TEXT_ON_HIGHLIGHT: Color = BLACK;
    pub const HIGHLIGHT: Color = YELLOW;
    pub const PAUSE_FILL: Color = GRAY;
}

/// Font size class; the surface maps these to concrete faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSize {
    Normal,
    Big,
}

/// Solid image covering the canvas, composited over the paused scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayImage {
    pub size: Vec2,
    pub fill: Color,
}

impl OverlayImage {
    pub fn new(size: Vec2, fill: Color) -> Self {
        Self { size, fill }
    }
}

/// One thing for the surface to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawInstruction {
    /// Text centered in `rect`
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: TextSize,
    },
    FilledRect { rect: Rect, color: Color },
    /// Overlay image at the canvas origin, alpha scaled by `opacity`
    ImageOverlay { image: OverlayImage, opacity: f32 },
}

impl DrawInstruction {
    /// Text content, if this is a text instruction
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawInstruction::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Ordered instructions for a single frame
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrawList {
    instructions: Vec<DrawInstruction>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instruction: DrawInstruction) {
        self.instructions.push(instruction);
    }

    /// Centered text
    pub fn text(&mut self, rect: Rect, text: impl Into<String>, color: Color, size: TextSize) {
        self.push(DrawInstruction::Text {
            rect,
            text: text.into(),
            color,
            size,
        });
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawInstruction::FilledRect { rect, color });
    }

    pub fn overlay(&mut self, image: OverlayImage, opacity: f32) {
        self.push(DrawInstruction::ImageOverlay { image, opacity });
    }

    pub fn instructions(&self) -> &[DrawInstruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// All text strings in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.instructions.iter().filter_map(DrawInstruction::text)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }

    pub fn into_instructions(self) -> Vec<DrawInstruction> {
        self.instructions
    }
}

impl Extend<DrawInstruction> for DrawList {
    fn extend<T: IntoIterator<Item = DrawInstruction>>(&mut self, iter: T) {
        self.instructions.extend(iter);
    }
}

/// Destination for a composed frame
pub trait RenderSurface {
    fn submit(&mut self, frame: &DrawList);
}

/// Surface that keeps the most recent frame instead of drawing it
#[derive(Debug, Default)]
pub struct RecordingSurface {
    last: DrawList,
    frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &DrawList {
        &self.last
    }

    /// Number of frames submitted so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSurface for RecordingSurface {
    fn submit(&mut self, frame: &DrawList) {
        self.last = frame.clone();
        self.frames += 1;
    }
}
