use eframe::egui;
use image::RgbaImage;

use crate::background::decode_background;

/// Turns image files dropped onto the window into background images
#[derive(Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect newly dropped files from the UI context.
    /// Returns true if any were dropped this frame.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        let mut new_dropped_files = false;

        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
                new_dropped_files = true;
            }
        });

        new_dropped_files
    }

    /// Decode the dropped files and return the last one that is a usable image
    pub fn take_background(&mut self) -> Option<RgbaImage> {
        let mut background = None;

        for file in self.dropped_files.drain(..) {
            let file_name = display_name(&file);

            if !is_image_file(&file) {
                log::warn!("Dropped file is not a supported type: {}", file_name);
                continue;
            }
            let Some(bytes) = read_bytes(&file) else {
                log::warn!("Dropped file has no accessible data: {}", file_name);
                continue;
            };
            match decode_background(&bytes) {
                Ok(image) => {
                    log::info!("Using {} as background", file_name);
                    background = Some(image);
                }
                Err(err) => log::error!("{}: {}", file_name, err),
            }
        }

        background
    }

    /// Preview files being dragged over the application
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            "Drop an image to use it as background",
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}

fn display_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    let name = match &file.path {
        Some(path) => path.to_string_lossy().to_lowercase(),
        None => file.name.to_lowercase(),
    };
    match name.rsplit_once('.') {
        Some((_, ext)) => matches!(ext, "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp"),
        None => false,
    }
}

fn read_bytes(file: &egui::DroppedFile) -> Option<Vec<u8>> {
    match &file.bytes {
        Some(bytes) => Some(bytes.to_vec()),
        None => read_path(file),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_path(file: &egui::DroppedFile) -> Option<Vec<u8>> {
    let path = file.path.as_ref()?;
    std::fs::read(path)
        .map_err(|err| log::error!("Failed to read image file: {}: {}", path.display(), err))
        .ok()
}

// Web builds only ever get bytes
#[cfg(target_arch = "wasm32")]
fn read_path(_file: &egui::DroppedFile) -> Option<Vec<u8>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> egui::DroppedFile {
        egui::DroppedFile {
            name: name.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn recognises_image_extensions() {
        assert!(is_image_file(&named("photo.JPG")));
        assert!(is_image_file(&named("scan.png")));
        assert!(!is_image_file(&named("notes.txt")));
        assert!(!is_image_file(&named("png")));
    }

    #[test]
    fn mime_type_wins() {
        let file = egui::DroppedFile {
            name: "upload".to_owned(),
            mime: "image/webp".to_owned(),
            ..Default::default()
        };
        assert!(is_image_file(&file));
    }

    #[test]
    fn undecodable_files_are_skipped() {
        let mut handler = FileHandler::new();
        handler.dropped_files.push(egui::DroppedFile {
            name: "broken.png".to_owned(),
            bytes: Some(std::sync::Arc::from(&b"garbage"[..])),
            ..Default::default()
        });
        handler.dropped_files.push(named("readme.md"));
        assert!(handler.take_background().is_none());
        assert!(handler.dropped_files.is_empty());
    }
}
