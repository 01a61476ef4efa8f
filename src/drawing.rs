//! The drawing surface: stroke capture, undo/redo history and rendering.
//!
//! All methods are meant to be called from the UI thread in response to pointer
//! input or control clicks. Calls that arrive out of order (a move with no
//! stroke in progress, a second pointer-down) are ignored.

use egui::{Color32, Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::brush::BrushConfig;
use crate::color::parse_color;
use crate::command::{Command, CommandHistory};
use crate::damage::{Damage, DamageTracker};
use crate::document::Document;
use crate::error::DrawingResult;
use crate::stroke::{ActiveStroke, Stroke, StrokeRef};
use crate::surface::{Surface, draw_points, draw_stroke};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "DrawingSnapshot", into = "DrawingSnapshot")]
pub struct DrawingSurface {
    document: Document,
    history: CommandHistory,
    brush: BrushConfig,
    active: Option<ActiveStroke>,
    damage: DamageTracker,
}

impl DrawingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a stroke at `point` with the current brush
    pub fn begin_stroke(&mut self, point: Pos2) {
        if self.active.is_some() {
            log::debug!("Ignoring pointer-down at {:?}: a stroke is already active", point);
            return;
        }
        let stroke = ActiveStroke::new(self.brush.color(), self.brush.width(), point);
        self.damage
            .mark_rect(Rect::from_center_size(point, egui::Vec2::splat(stroke.width())));
        self.active = Some(stroke);
    }

    /// Append `point` to the stroke being drawn
    pub fn extend_stroke(&mut self, point: Pos2) {
        let Some(stroke) = self.active.as_mut() else {
            return;
        };
        if let Some((from, to)) = stroke.add_point(point) {
            let padding = stroke.width() / 2.0;
            self.damage
                .mark_rect(Rect::from_two_pos(from, to).expand(padding));
        }
    }

    /// Commit the stroke being drawn to the stroke list
    pub fn end_stroke(&mut self) {
        let Some(stroke) = self.active.take() else {
            log::debug!("Ignoring pointer-up: no active stroke");
            return;
        };
        let stroke = stroke.seal();
        let bounds = stroke.bounds();
        match self
            .history
            .execute(Command::AddStroke(stroke), &mut self.document)
        {
            Ok(()) => self.damage.mark_rect(bounds),
            Err(err) => {
                log::error!("Failed to commit stroke: {}", err);
                self.damage.mark_full();
            }
        }
    }

    /// Drop the stroke being drawn without committing it
    pub fn cancel_stroke(&mut self) {
        if self.active.take().is_some() {
            self.damage.mark_full();
        }
    }

    /// Remove the last committed stroke. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        match self.history.undo(&mut self.document) {
            Ok(()) => {
                log::info!("Undo: {} strokes left", self.document.strokes().len());
                self.damage.mark_full();
                true
            }
            Err(err) => {
                log::error!("Undo failed: {}", err);
                false
            }
        }
    }

    /// Restore the most recently undone stroke. Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        match self.history.redo(&mut self.document) {
            Ok(()) => {
                log::info!("Redo: {} strokes", self.document.strokes().len());
                self.damage.mark_full();
                true
            }
            Err(err) => {
                log::error!("Redo failed: {}", err);
                false
            }
        }
    }

    /// Width for the next stroke. Existing strokes keep their own width.
    pub fn set_brush_width(&mut self, width: f32) -> DrawingResult<()> {
        self.brush.set_width(width)
    }

    /// Color for the next stroke, parsed from a specification such as `#FF0000`
    pub fn set_color(&mut self, spec: &str) -> DrawingResult<()> {
        let color = parse_color(spec)?;
        self.brush.set_color(color);
        Ok(())
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        self.brush.set_color(color);
    }

    /// Wipe the canvas and all history. Cannot be undone.
    pub fn new_page(&mut self) {
        self.document.clear();
        self.history.clear();
        self.active = None;
        self.damage.mark_full();
        log::info!("Started a new page");
    }

    /// Draw committed strokes in order, then the stroke in progress
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for stroke in self.document.strokes() {
            draw_stroke(surface, stroke);
        }
        if let Some(active) = &self.active {
            draw_points(surface, active.points(), active.width(), active.color());
        }
    }

    /// Drain the redraw request accumulated since the last call
    pub fn take_damage(&mut self) -> Damage {
        self.damage.take()
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        self.document.strokes()
    }

    /// Strokes removed by undo, most recently undone last
    pub fn undone_strokes(&self) -> Vec<StrokeRef> {
        self.history.undone_strokes()
    }

    pub fn active_stroke(&self) -> Option<&ActiveStroke> {
        self.active.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    pub fn brush(&self) -> &BrushConfig {
        &self.brush
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

/// Persisted form of a [`DrawingSurface`]. The stroke in progress is not saved.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSnapshot {
    pub strokes: Vec<Stroke>,
    /// Undone strokes, most recently undone last
    pub undone: Vec<Stroke>,
    pub brush: BrushConfig,
}

impl From<DrawingSnapshot> for DrawingSurface {
    fn from(snapshot: DrawingSnapshot) -> Self {
        let mut document = Document::new();
        let mut applied = Vec::with_capacity(snapshot.strokes.len());
        for stroke in snapshot.strokes {
            let stroke = StrokeRef::new(stroke);
            document.add_stroke(stroke.clone());
            applied.push(Command::AddStroke(stroke));
        }
        let undone = snapshot
            .undone
            .into_iter()
            .map(|stroke| Command::AddStroke(StrokeRef::new(stroke)))
            .collect();

        let brush = BrushConfig::new(snapshot.brush.width(), snapshot.brush.color())
            .unwrap_or_else(|err| {
                log::warn!("Stored brush is invalid ({}), using the default brush", err);
                BrushConfig::default()
            });

        let mut damage = DamageTracker::new();
        damage.mark_full();
        Self {
            document,
            history: CommandHistory::from_stacks(applied, undone),
            brush,
            active: None,
            damage,
        }
    }
}

impl From<DrawingSurface> for DrawingSnapshot {
    fn from(surface: DrawingSurface) -> Self {
        Self {
            strokes: surface.strokes().iter().map(|s| Stroke::clone(s)).collect(),
            undone: surface
                .undone_strokes()
                .iter()
                .map(|s| Stroke::clone(s))
                .collect(),
            brush: surface.brush,
        }
    }
}
