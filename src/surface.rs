//! Render targets for strokes and the line smoothing shared by all of them.

use egui::{Color32, Painter, Pos2, Shape, Stroke as EguiStroke, Vec2};

use crate::stroke::Stroke;

/// Approximate length, in points, of one sampled piece of a smoothed curve
const SMOOTHING_STEP: f32 = 4.0;
const MAX_CURVE_SAMPLES: usize = 16;

/// Something strokes can be drawn onto.
///
/// Implementations draw `points` as one connected line with round caps and
/// round joins. A single point is drawn as a dot of diameter `width`.
pub trait Surface {
    fn draw_polyline(&mut self, points: &[Pos2], width: f32, color: Color32);
}

/// Draw raw input points as a smoothed line
pub fn draw_points<S: Surface + ?Sized>(surface: &mut S, points: &[Pos2], width: f32, color: Color32) {
    if points.is_empty() {
        return;
    }
    surface.draw_polyline(&stroke_path(points), width, color);
}

pub fn draw_stroke<S: Surface + ?Sized>(surface: &mut S, stroke: &Stroke) {
    draw_points(surface, stroke.points(), stroke.width(), stroke.color());
}

/// Turn sampled input points into the polyline that is actually drawn.
///
/// Each interior point becomes the control point of a quadratic curve running
/// between the midpoints of its neighbouring segments, so sparse input still
/// reads as continuous ink. The first and last input points are kept exactly.
pub fn stroke_path(points: &[Pos2]) -> Vec<Pos2> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let mut path = Vec::with_capacity(n * 4);
    path.push(points[0]);

    for i in 1..n - 1 {
        let start = if i == 1 {
            points[0]
        } else {
            points[i - 1].lerp(points[i], 0.5)
        };
        let end = if i == n - 2 {
            points[n - 1]
        } else {
            points[i].lerp(points[i + 1], 0.5)
        };
        let control = points[i];

        let length = (control - start).length() + (end - control).length();
        let samples = ((length / SMOOTHING_STEP).ceil() as usize).clamp(1, MAX_CURVE_SAMPLES);
        for k in 1..=samples {
            let t = k as f32 / samples as f32;
            path.push(quadratic(start, control, end, t));
        }
    }

    path
}

fn quadratic(a: Pos2, b: Pos2, c: Pos2, t: f32) -> Pos2 {
    let ab = a.lerp(b, t);
    let bc = b.lerp(c, t);
    ab.lerp(bc, t)
}

/// Draws onto an egui painter, translating canvas coordinates to screen ones
pub struct CanvasPainter<'a> {
    painter: &'a Painter,
    origin: Vec2,
}

impl<'a> CanvasPainter<'a> {
    /// `origin` is the screen position of the canvas' top-left corner
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin: origin.to_vec2(),
        }
    }
}

impl Surface for CanvasPainter<'_> {
    fn draw_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let radius = width / 2.0;
        let screen: Vec<Pos2> = points.iter().map(|p| *p + self.origin).collect();

        match screen.as_slice() {
            [] => {}
            [dot] => {
                self.painter.circle_filled(*dot, radius, color);
            }
            [first, second, ..] => {
                let n = screen.len();
                let (before_last, last) = (screen[n - 2], screen[n - 1]);
                let start_cap = round_cap(*first, *first - *second, radius, color);
                let end_cap = round_cap(last, last - before_last, radius, color);
                // One shape so translucent ink is not painted twice at the vertices
                self.painter.add(Shape::Vec(vec![
                    Shape::line(screen.clone(), EguiStroke::new(width, color)),
                    start_cap,
                    end_cap,
                ]));
            }
        }
    }
}

/// Half disc closing a line end, bulging towards `outward`
fn round_cap(center: Pos2, outward: Vec2, radius: f32, color: Color32) -> Shape {
    const CAP_SEGMENTS: usize = 8;

    let outward = if outward.length() > f32::EPSILON {
        outward.normalized()
    } else {
        Vec2::X
    };
    let normal = outward.rot90();
    let points = (0..=CAP_SEGMENTS)
        .map(|i| {
            let angle = std::f32::consts::PI * (i as f32 / CAP_SEGMENTS as f32 - 0.5);
            center + radius * (outward * angle.cos() + normal * angle.sin())
        })
        .collect();
    Shape::convex_polygon(points, color, EguiStroke::NONE)
}
