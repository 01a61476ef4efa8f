//! CPU rendering of the drawing into an [`RgbaImage`].
//!
//! Used by the host to flatten the background and the strokes into the single
//! image it hands to save/share.

use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage, imageops};

use crate::drawing::DrawingSurface;
use crate::surface::Surface;

/// Surface that rasterizes strokes into an owned RGBA image
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// A fully transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl Surface for RasterSurface {
    fn draw_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.is_empty() || self.image.width() == 0 || self.image.height() == 0 {
            return;
        }
        let radius = width / 2.0;

        // Pixel bounds touched by the line, clamped to the image
        let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
        let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        let x0 = clamp_pixel(min_x - radius - 1.0, self.image.width());
        let y0 = clamp_pixel(min_y - radius - 1.0, self.image.height());
        let x1 = clamp_pixel(max_x + radius + 1.0, self.image.width());
        let y1 = clamp_pixel(max_y + radius + 1.0, self.image.height());
        if x0 > x1 || y0 > y1 {
            return;
        }

        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let alpha = f32::from(a) / 255.0;

        // Coverage per pixel of the stroke's bounds. Taking the max over
        // segments blends overlapping joins only once.
        let mask_width = (x1 - x0 + 1) as usize;
        let mut mask = vec![0.0_f32; mask_width * (y1 - y0 + 1) as usize];

        let segments: Vec<(Pos2, Pos2)> = match points {
            [only] => vec![(*only, *only)],
            _ => points.windows(2).map(|pair| (pair[0], pair[1])).collect(),
        };
        for (start, end) in segments {
            // Each segment only visits its own padded bounds
            let sx0 = clamp_pixel(start.x.min(end.x) - radius - 1.0, self.image.width()).max(x0);
            let sy0 = clamp_pixel(start.y.min(end.y) - radius - 1.0, self.image.height()).max(y0);
            let sx1 = clamp_pixel(start.x.max(end.x) + radius + 1.0, self.image.width()).min(x1);
            let sy1 = clamp_pixel(start.y.max(end.y) + radius + 1.0, self.image.height()).min(y1);

            for y in sy0..=sy1 {
                for x in sx0..=sx1 {
                    let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let distance = distance_to_line_segment(center, start, end);
                    // One pixel of antialiasing at the edge
                    let coverage = (radius + 0.5 - distance).clamp(0.0, 1.0);
                    let cell = &mut mask[(y - y0) as usize * mask_width + (x - x0) as usize];
                    *cell = cell.max(coverage);
                }
            }
        }

        for (index, coverage) in mask.into_iter().enumerate() {
            if coverage > 0.0 {
                let x = x0 + (index % mask_width) as u32;
                let y = y0 + (index / mask_width) as u32;
                blend(self.image.get_pixel_mut(x, y), [r, g, b], alpha * coverage);
            }
        }
    }
}

/// Flatten an optional background and the drawing into one image.
///
/// The background is stretched to `width` x `height`; without one the canvas
/// is white. Canvas coordinates map 1:1 to pixels.
pub fn compose(
    background: Option<&RgbaImage>,
    drawing: &DrawingSurface,
    width: u32,
    height: u32,
) -> RgbaImage {
    let base = match background {
        Some(image) if image.dimensions() == (width, height) => image.clone(),
        Some(image) => imageops::resize(image, width, height, imageops::FilterType::Triangle),
        None => RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])),
    };

    let mut surface = RasterSurface::from_image(base);
    drawing.render(&mut surface);
    log::debug!(
        "Composed {}x{} image from {} strokes",
        width,
        height,
        drawing.strokes().len()
    );
    surface.into_image()
}

fn clamp_pixel(value: f32, size: u32) -> u32 {
    value.floor().clamp(0.0, (size - 1) as f32) as u32
}

/// Distance from a point to a line segment
fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

// Source-over blend of an unmultiplied color
fn blend(pixel: &mut Rgba<u8>, rgb: [u8; 3], alpha: f32) {
    let dst_alpha = f32::from(pixel[3]) / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);
    if out_alpha <= 0.0 {
        return;
    }
    for channel in 0..3 {
        let src = f32::from(rgb[channel]);
        let dst = f32::from(pixel[channel]);
        let value = (src * alpha + dst * dst_alpha * (1.0 - alpha)) / out_alpha;
        pixel[channel] = value.round().clamp(0.0, 255.0) as u8;
    }
    pixel[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
}
