use image::RgbaImage;

use crate::background::Background;
use crate::brush::BrushSize;
use crate::drawing::DrawingSurface;
use crate::file_handler::FileHandler;
use crate::input::InputHandler;
use crate::panels;
use crate::raster;
use crate::settings::Settings;

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    pub(crate) settings: Settings,
    pub(crate) drawing: DrawingSurface,
    /// Highlighted palette swatch; host-only state
    pub(crate) selected_swatch: usize,

    #[serde(skip)]
    pub(crate) background: Background,
    #[serde(skip)]
    pub(crate) input: InputHandler,
    #[serde(skip)]
    pub(crate) file_handler: FileHandler,
    #[serde(skip)]
    pub(crate) show_brush_dialog: bool,
    #[serde(skip)]
    pub(crate) show_new_page_dialog: bool,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = match cc.storage {
            Some(storage) => eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default(),
            None => Self::default(),
        };

        app.repair_restored();
        log::info!("Restored drawing with {} strokes", app.drawing.strokes().len());
        app
    }

    pub fn with_settings(settings: Settings) -> Self {
        let mut app = Self {
            selected_swatch: settings.default_swatch,
            settings,
            drawing: DrawingSurface::new(),
            background: Background::default(),
            input: InputHandler::default(),
            file_handler: FileHandler::new(),
            show_brush_dialog: false,
            show_new_page_dialog: false,
        };
        app.reset_brush();
        app
    }

    pub fn drawing(&self) -> &DrawingSurface {
        &self.drawing
    }

    pub fn drawing_mut(&mut self) -> &mut DrawingSurface {
        &mut self.drawing
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn selected_swatch(&self) -> usize {
        self.selected_swatch
    }

    pub fn background_mut(&mut self) -> &mut Background {
        &mut self.background
    }

    /// Palette click: switch brush color unless the swatch is already selected
    pub fn select_swatch(&mut self, index: usize) {
        if index == self.selected_swatch {
            return;
        }
        let Some(spec) = self.settings.palette.get(index) else {
            log::warn!("No palette swatch at index {}", index);
            return;
        };
        match self.drawing.set_color(spec) {
            Ok(()) => self.selected_swatch = index,
            Err(err) => log::error!("Palette swatch {}: {}", index, err),
        }
    }

    pub fn choose_brush_size(&mut self, size: BrushSize) {
        let result = self
            .settings
            .preset_width(size)
            .and_then(|width| self.drawing.set_brush_width(width));
        match result {
            Ok(()) => log::info!("Brush size: {}", size.label()),
            Err(err) => log::error!("Brush size {}: {}", size.label(), err),
        }
        self.show_brush_dialog = false;
    }

    /// New-page button: asks first unless confirmation is turned off
    pub fn request_new_page(&mut self) {
        if self.settings.confirm_new_page {
            self.show_new_page_dialog = true;
        } else {
            self.new_page();
        }
    }

    /// Wipe the drawing and return every control to its start-up state
    pub fn new_page(&mut self) {
        self.drawing.new_page();
        self.reset_brush();
        self.selected_swatch = self.settings.default_swatch;
        self.background.clear();
        self.show_new_page_dialog = false;
    }

    pub fn remove_background(&mut self) {
        self.background.clear();
    }

    pub fn dialog_open(&self) -> bool {
        self.show_brush_dialog || self.show_new_page_dialog
    }

    /// The background and the drawing flattened into one image, ready for export
    pub fn flatten(&self, width: u32, height: u32) -> RgbaImage {
        raster::compose(self.background.image(), &self.drawing, width, height)
    }

    /// Fix up state loaded from storage that no longer fits the settings
    fn repair_restored(&mut self) {
        if let Err(err) = self.settings.validate() {
            log::warn!("Stored settings are invalid ({}), using defaults", err);
            self.settings = Settings::default();
            self.selected_swatch = self.settings.default_swatch;
        }
        if self.selected_swatch >= self.settings.palette.len() {
            log::warn!("Stored swatch {} is not in the palette", self.selected_swatch);
            self.selected_swatch = self.settings.default_swatch;
        }
    }

    fn reset_brush(&mut self) {
        match self.settings.default_brush() {
            Ok(brush) => {
                self.drawing.set_brush_color(brush.color());
                if let Err(err) = self.drawing.set_brush_width(brush.width()) {
                    log::error!("Default brush: {}", err);
                }
            }
            Err(err) => log::error!("Default brush: {}", err),
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.file_handler.check_for_dropped_files(ctx) {
            if let Some(image) = self.file_handler.take_background() {
                self.background.set_image(image);
            }
        }

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        panels::brush_size_dialog(self, ctx);
        panels::new_page_dialog(self, ctx);

        self.file_handler.preview_files_being_dropped(ctx);
    }
}
