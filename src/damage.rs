//! Redraw-request tracking.
//!
//! Every mutation of the drawing surface records the area it changed. The host
//! drains it once per frame to decide whether a repaint is needed.

use egui::Rect;

/// Pending redraw request
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Damage {
    /// Nothing changed since the last frame
    None,
    /// Only this region changed
    Region(Rect),
    /// Everything must be repainted
    Full,
}

impl Damage {
    pub fn needs_repaint(&self) -> bool {
        !matches!(self, Damage::None)
    }
}

/// Accumulates damaged areas between frames
#[derive(Clone, Debug, Default)]
pub struct DamageTracker {
    region: Option<Rect>,
    full: bool,
}

impl DamageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty
    pub fn mark_full(&mut self) {
        self.full = true;
        self.region = None;
    }

    /// Grows the damaged region to include `rect`
    pub fn mark_rect(&mut self, rect: Rect) {
        if self.full || !rect.is_positive() {
            return;
        }
        self.region = Some(match self.region {
            Some(region) => region.union(rect),
            None => rect,
        });
    }

    /// Returns what changed since the last call and resets the tracker
    pub fn take(&mut self) -> Damage {
        let damage = if self.full {
            Damage::Full
        } else {
            self.region.map_or(Damage::None, Damage::Region)
        };
        self.full = false;
        self.region = None;
        damage
    }
}
