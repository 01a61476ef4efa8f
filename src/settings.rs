use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::brush::{BrushConfig, BrushSize, BrushSizes, DEFAULT_BRUSH_WIDTH};
use crate::color::parse_color;
use crate::error::{DrawingError, DrawingResult};

/// Host configuration, persisted with the app state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub brush_sizes: BrushSizes,
    /// Palette swatches as color specifications
    pub palette: Vec<String>,
    /// Swatch selected at start-up and after a new page
    pub default_swatch: usize,
    pub default_width: f32,
    /// Ask before wiping the page
    pub confirm_new_page: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brush_sizes: BrushSizes::default(),
            palette: [
                "#FFE0BD", // skin
                "#FFFFFF", "#000000", "#FF0000", "#00FF00", "#0000FF", "#FFFF00",
                "#F03B74", // lollipop
            ]
            .iter()
            .map(|s| (*s).to_owned())
            .collect(),
            default_swatch: 2,
            default_width: DEFAULT_BRUSH_WIDTH,
            confirm_new_page: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> DrawingResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> DrawingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every palette entry and the default brush
    pub fn validate(&self) -> DrawingResult<()> {
        self.palette_colors()?;
        self.default_brush()?;
        Ok(())
    }

    pub fn palette_colors(&self) -> DrawingResult<Vec<Color32>> {
        self.palette.iter().map(String::as_str).map(parse_color).collect()
    }

    /// Color of the default swatch, black if the palette does not have one
    pub fn default_color(&self) -> DrawingResult<Color32> {
        match self.palette.get(self.default_swatch) {
            Some(spec) => parse_color(spec),
            None => Ok(Color32::BLACK),
        }
    }

    /// Brush a fresh page starts with
    pub fn default_brush(&self) -> DrawingResult<BrushConfig> {
        BrushConfig::new(self.default_width, self.default_color()?)
    }

    /// Width for a brush size, rejecting presets that would be unusable
    pub fn preset_width(&self, size: BrushSize) -> DrawingResult<f32> {
        let width = self.brush_sizes.width_for(size);
        if width.is_finite() && width > 0.0 {
            Ok(width)
        } else {
            Err(DrawingError::InvalidBrushWidth(width))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.default_color().unwrap(), Color32::BLACK);
        assert_eq!(settings.default_brush().unwrap(), BrushConfig::default());
        assert_eq!(settings.preset_width(BrushSize::Large).unwrap(), 14.0);
    }

    #[test]
    fn json_round_trip() {
        let mut settings = Settings::default();
        settings.default_swatch = 3;
        settings.brush_sizes.medium = 12.0;
        let parsed = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings = Settings::from_json(r#"{ "default_width": 8.0 }"#).unwrap();
        assert_eq!(settings.default_width, 8.0);
        assert_eq!(settings.palette, Settings::default().palette);
    }

    #[test]
    fn bad_palette_is_rejected() {
        let result = Settings::from_json(r##"{ "palette": ["#000000", "chartreuse-ish"] }"##);
        assert!(matches!(result, Err(DrawingError::InvalidColorFormat(_))));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(Settings::from_json("{"), Err(DrawingError::Settings(_))));
    }
}
