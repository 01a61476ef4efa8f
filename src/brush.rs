use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{DrawingError, DrawingResult};

/// Width used for new strokes until the user picks another size
pub const DEFAULT_BRUSH_WIDTH: f32 = 6.0;

/// Color and width applied to the next stroke
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrushConfig {
    width: f32,
    color: Color32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BRUSH_WIDTH,
            color: Color32::BLACK,
        }
    }
}

impl BrushConfig {
    pub fn new(width: f32, color: Color32) -> DrawingResult<Self> {
        let mut brush = Self {
            color,
            ..Self::default()
        };
        brush.set_width(width)?;
        Ok(brush)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Set the width. Non-finite or non-positive widths are rejected.
    pub fn set_width(&mut self, width: f32) -> DrawingResult<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(DrawingError::InvalidBrushWidth(width));
        }
        self.width = width;
        Ok(())
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }
}

/// The choices offered by the brush-size dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushSize {
    Small,
    Medium,
    Large,
}

impl BrushSize {
    pub const ALL: [BrushSize; 3] = [BrushSize::Small, BrushSize::Medium, BrushSize::Large];

    pub fn label(&self) -> &'static str {
        match self {
            BrushSize::Small => "Small",
            BrushSize::Medium => "Medium",
            BrushSize::Large => "Large",
        }
    }
}

/// Widths behind each [`BrushSize`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSizes {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
}

impl Default for BrushSizes {
    fn default() -> Self {
        Self {
            small: DEFAULT_BRUSH_WIDTH,
            medium: 10.0,
            large: 14.0,
        }
    }
}

impl BrushSizes {
    pub fn width_for(&self, size: BrushSize) -> f32 {
        match size {
            BrushSize::Small => self.small,
            BrushSize::Medium => self.medium,
            BrushSize::Large => self.large,
        }
    }
}
