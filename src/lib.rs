#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod background;
pub mod brush;
pub mod color;
pub mod command;
pub mod damage;
pub mod document;
pub mod drawing;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod panels;
pub mod raster;
pub mod settings;
pub mod stroke;
pub mod surface;

pub use app::PaintApp;
pub use brush::{BrushConfig, BrushSize};
pub use command::{Command, CommandHistory};
pub use damage::Damage;
pub use document::Document;
pub use drawing::DrawingSurface;
pub use error::{DrawingError, DrawingResult};
pub use input::{InputEvent, InputLocation};
pub use settings::Settings;
pub use stroke::{ActiveStroke, Stroke, StrokeRef};
pub use surface::Surface;
