//! The image layer shown behind the drawing.
//!
//! The drawing surface never reads it; the host paints it under the canvas and
//! hands it to [`crate::raster::compose`] when flattening.

use egui::{Color32, Context, Painter, Rect, TextureHandle, pos2};
use image::RgbaImage;

use crate::error::DrawingResult;

/// Decode an encoded image (PNG, JPEG, ...) into RGBA pixels
pub fn decode_background(bytes: &[u8]) -> DrawingResult<RgbaImage> {
    let image = image::load_from_memory(bytes)?;
    log::debug!("Decoded background: {}x{}", image.width(), image.height());
    Ok(image.to_rgba8())
}

/// Background behind the canvas: plain white or an image
#[derive(Default)]
pub struct Background {
    image: Option<RgbaImage>,
    // Uploaded lazily on first paint
    texture: Option<TextureHandle>,
}

impl Background {
    pub fn set_image(&mut self, image: RgbaImage) {
        log::info!("Background set to {}x{} image", image.width(), image.height());
        self.image = Some(image);
        self.texture = None;
    }

    /// Back to a blank page
    pub fn clear(&mut self) {
        self.image = None;
        self.texture = None;
    }

    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Paint the background stretched over `rect`
    pub fn paint(&mut self, ctx: &Context, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, Color32::WHITE);

        let Some(image) = &self.image else {
            return;
        };
        let texture = self.texture.get_or_insert_with(|| {
            let size = [image.width() as usize, image.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
            ctx.load_texture("background", color_image, egui::TextureOptions::default())
        });
        let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        painter.image(texture.id(), rect, uv, Color32::WHITE);
    }
}
