use egui::{Color32, Pos2, Rect};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// Sealed stroke, shared between the document and the history
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

// Stroke still being drawn
#[derive(Clone, Debug)]
pub struct ActiveStroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(color: Color32, width: f32, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            width,
        }
    }

    pub fn new_ref(color: Color32, width: f32, points: Vec<Pos2>) -> StrokeRef {
        Arc::new(Self::new(color, width, points))
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Area covered by the stroke, including half the line width
    pub fn bounds(&self) -> Rect {
        calculate_bounds(&self.points, self.width / 2.0)
    }
}

impl ActiveStroke {
    /// Start a stroke at `start` with the given brush properties
    pub fn new(color: Color32, width: f32, start: Pos2) -> Self {
        Self {
            points: vec![start],
            color,
            width,
        }
    }

    /// Append a point, skipping exact repeats of the last one.
    ///
    /// Returns the segment that was added, if any.
    pub fn add_point(&mut self, point: Pos2) -> Option<(Pos2, Pos2)> {
        let last = *self.points.last()?;
        if last == point {
            return None;
        }
        self.points.push(point);
        Some((last, point))
    }

    /// Seal into an immutable, shareable stroke
    pub fn seal(self) -> StrokeRef {
        Arc::new(Stroke::new(self.color, self.width, self.points))
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

/// Calculate the bounding box for a set of points
pub fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn active_stroke_skips_repeated_points() {
        let mut stroke = ActiveStroke::new(Color32::RED, 4.0, pos2(1.0, 1.0));
        assert!(stroke.add_point(pos2(1.0, 1.0)).is_none());
        assert_eq!(stroke.add_point(pos2(2.0, 3.0)), Some((pos2(1.0, 1.0), pos2(2.0, 3.0))));
        assert!(stroke.add_point(pos2(2.0, 3.0)).is_none());
        assert_eq!(stroke.points().len(), 2);
    }

    #[test]
    fn seal_keeps_brush_and_points() {
        let mut active = ActiveStroke::new(Color32::BLUE, 10.0, pos2(0.0, 0.0));
        active.add_point(pos2(5.0, 5.0));
        let sealed = active.seal();
        assert_eq!(sealed.color(), Color32::BLUE);
        assert_eq!(sealed.width(), 10.0);
        assert_eq!(sealed.points(), &[pos2(0.0, 0.0), pos2(5.0, 5.0)]);
    }

    #[test]
    fn bounds_include_half_width() {
        let stroke = Stroke::new(Color32::BLACK, 6.0, vec![pos2(10.0, 10.0), pos2(20.0, 30.0)]);
        let bounds = stroke.bounds();
        assert_eq!(bounds.min, pos2(7.0, 7.0));
        assert_eq!(bounds.max, pos2(23.0, 33.0));
    }

    #[test]
    fn empty_bounds_are_nothing() {
        assert_eq!(calculate_bounds(&[], 3.0), Rect::NOTHING);
    }
}
