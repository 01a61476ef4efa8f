use drawaza::{DrawingError, DrawingSurface, StrokeRef, Surface};
use egui::{Color32, Pos2, pos2};

// Draws one stroke from `from` through `to`
fn draw(surface: &mut DrawingSurface, from: Pos2, to: Pos2) {
    surface.begin_stroke(from);
    surface.extend_stroke(from.lerp(to, 0.5));
    surface.extend_stroke(to);
    surface.end_stroke();
}

fn widths(strokes: &[StrokeRef]) -> Vec<f32> {
    strokes.iter().map(|s| s.width()).collect()
}

#[derive(Default)]
struct RecordingSurface {
    lines: Vec<(Vec<Pos2>, f32, Color32)>,
}

impl Surface for RecordingSurface {
    fn draw_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.lines.push((points.to_vec(), width, color));
    }
}

#[test]
fn completed_stroke_adds_exactly_one_and_clears_undone() {
    let mut surface = DrawingSurface::new();
    draw(&mut surface, pos2(0.0, 0.0), pos2(10.0, 10.0));
    draw(&mut surface, pos2(0.0, 0.0), pos2(20.0, 20.0));
    surface.undo();
    assert_eq!(surface.undone_strokes().len(), 1);

    let before = surface.strokes().len();
    surface.begin_stroke(pos2(5.0, 5.0));
    for i in 0..50 {
        surface.extend_stroke(pos2(5.0 + i as f32, 5.0));
    }
    surface.end_stroke();

    assert_eq!(surface.strokes().len(), before + 1);
    assert!(surface.undone_strokes().is_empty());
    assert!(!surface.can_redo());
}

#[test]
fn stroke_is_not_committed_until_pointer_up() {
    let mut surface = DrawingSurface::new();
    surface.begin_stroke(pos2(1.0, 1.0));
    surface.extend_stroke(pos2(2.0, 2.0));
    assert!(surface.strokes().is_empty());
    assert_eq!(surface.active_stroke().map(|s| s.points().len()), Some(2));
}

#[test]
fn undo_on_empty_list_is_noop() {
    let mut surface = DrawingSurface::new();
    assert!(!surface.undo());
    assert!(surface.strokes().is_empty());
    assert!(surface.undone_strokes().is_empty());

    // Also when something was undone before
    draw(&mut surface, pos2(0.0, 0.0), pos2(1.0, 1.0));
    surface.undo();
    assert!(!surface.undo());
    assert_eq!(surface.undone_strokes().len(), 1);
}

#[test]
fn redo_with_nothing_undone_is_noop() {
    let mut surface = DrawingSurface::new();
    assert!(!surface.redo());

    draw(&mut surface, pos2(0.0, 0.0), pos2(1.0, 1.0));
    assert!(!surface.redo());
    assert_eq!(surface.strokes().len(), 1);
}

#[test]
fn undo_then_redo_restores_same_strokes() {
    let mut surface = DrawingSurface::new();
    draw(&mut surface, pos2(0.0, 0.0), pos2(10.0, 0.0));
    surface.set_color("#FF0000").unwrap();
    draw(&mut surface, pos2(0.0, 5.0), pos2(10.0, 5.0));

    let before: Vec<StrokeRef> = surface.strokes().to_vec();
    assert!(surface.undo());
    assert!(surface.redo());

    assert_eq!(surface.strokes().len(), before.len());
    for (restored, original) in surface.strokes().iter().zip(&before) {
        assert_eq!(**restored, **original);
    }
}

#[test]
fn drawing_after_undo_discards_undone_strokes() {
    let mut surface = DrawingSurface::new();
    surface.set_brush_width(1.0).unwrap();
    draw(&mut surface, pos2(0.0, 0.0), pos2(1.0, 1.0)); // A
    surface.set_brush_width(2.0).unwrap();
    draw(&mut surface, pos2(0.0, 0.0), pos2(2.0, 2.0)); // B

    surface.undo();
    assert_eq!(widths(surface.strokes()), vec![1.0]);
    assert_eq!(widths(&surface.undone_strokes()), vec![2.0]);

    surface.set_brush_width(3.0).unwrap();
    draw(&mut surface, pos2(0.0, 0.0), pos2(3.0, 3.0)); // C
    assert_eq!(widths(surface.strokes()), vec![1.0, 3.0]);
    assert!(surface.undone_strokes().is_empty());

    assert!(!surface.redo());
    assert_eq!(widths(surface.strokes()), vec![1.0, 3.0]);
}

#[test]
fn undo_stack_is_last_removed_on_top() {
    let mut surface = DrawingSurface::new();
    for width in [1.0, 2.0, 3.0] {
        surface.set_brush_width(width).unwrap();
        draw(&mut surface, pos2(0.0, 0.0), pos2(width, width));
    }
    surface.undo();
    surface.undo();
    assert_eq!(widths(&surface.undone_strokes()), vec![3.0, 2.0]);

    surface.redo();
    assert_eq!(widths(surface.strokes()), vec![1.0, 2.0]);
    assert_eq!(widths(&surface.undone_strokes()), vec![3.0]);
}

#[test]
fn brush_changes_never_touch_existing_strokes() {
    let mut surface = DrawingSurface::new();
    surface.set_brush_width(6.0).unwrap();
    draw(&mut surface, pos2(0.0, 0.0), pos2(10.0, 10.0));

    surface.set_brush_width(14.0).unwrap();
    surface.set_color("#0000FF").unwrap();
    draw(&mut surface, pos2(0.0, 0.0), pos2(10.0, 10.0));

    let mut recorder = RecordingSurface::default();
    surface.render(&mut recorder);
    assert_eq!(recorder.lines.len(), 2);
    assert_eq!(recorder.lines[0].1, 6.0);
    assert_eq!(recorder.lines[0].2, Color32::BLACK);
    assert_eq!(recorder.lines[1].1, 14.0);
    assert_eq!(recorder.lines[1].2, Color32::BLUE);
}

#[test]
fn brush_change_mid_stroke_does_not_affect_active_stroke() {
    let mut surface = DrawingSurface::new();
    surface.begin_stroke(pos2(0.0, 0.0));
    surface.set_brush_width(20.0).unwrap();
    surface.set_color("red").unwrap();
    surface.extend_stroke(pos2(5.0, 5.0));
    surface.end_stroke();

    let stroke = &surface.strokes()[0];
    assert_eq!(stroke.width(), 6.0);
    assert_eq!(stroke.color(), Color32::BLACK);
    assert_eq!(surface.brush().width(), 20.0);
}

#[test]
fn new_page_clears_everything() {
    let mut surface = DrawingSurface::new();
    for i in 0..3 {
        draw(&mut surface, pos2(0.0, 0.0), pos2(i as f32, 1.0));
    }
    surface.undo();
    surface.begin_stroke(pos2(4.0, 4.0));

    surface.new_page();

    assert!(surface.strokes().is_empty());
    assert!(surface.undone_strokes().is_empty());
    assert!(surface.active_stroke().is_none());
    assert!(!surface.can_undo());
    assert!(!surface.can_redo());
}

#[test]
fn invalid_color_leaves_brush_unchanged() {
    let mut surface = DrawingSurface::new();
    surface.set_color("#00FF00").unwrap();
    let before = *surface.brush();

    let result = surface.set_color("not-a-color");
    assert!(matches!(result, Err(DrawingError::InvalidColorFormat(ref spec)) if spec == "not-a-color"));
    assert_eq!(*surface.brush(), before);
}

#[test]
fn invalid_width_leaves_brush_unchanged() {
    let mut surface = DrawingSurface::new();
    surface.set_brush_width(10.0).unwrap();
    assert!(matches!(
        surface.set_brush_width(0.0),
        Err(DrawingError::InvalidBrushWidth(_))
    ));
    assert_eq!(surface.brush().width(), 10.0);
}

#[test]
fn out_of_order_events_are_ignored() {
    let mut surface = DrawingSurface::new();
    surface.extend_stroke(pos2(1.0, 1.0));
    surface.end_stroke();
    assert!(surface.strokes().is_empty());
    assert!(!surface.is_drawing());

    surface.begin_stroke(pos2(1.0, 1.0));
    surface.begin_stroke(pos2(50.0, 50.0));
    surface.end_stroke();
    surface.extend_stroke(pos2(9.0, 9.0));

    assert_eq!(surface.strokes().len(), 1);
    assert_eq!(surface.strokes()[0].points(), &[pos2(1.0, 1.0)]);
}

#[test]
fn render_draws_committed_then_active() {
    let mut surface = DrawingSurface::new();
    draw(&mut surface, pos2(0.0, 0.0), pos2(10.0, 0.0));
    surface.set_color("#FF0000").unwrap();
    surface.begin_stroke(pos2(3.0, 3.0));
    surface.extend_stroke(pos2(4.0, 4.0));

    let mut recorder = RecordingSurface::default();
    surface.render(&mut recorder);
    assert_eq!(recorder.lines.len(), 2);
    assert_eq!(recorder.lines[0].2, Color32::BLACK);
    assert_eq!(recorder.lines[1].2, Color32::RED);
    assert_eq!(recorder.lines[1].0.last(), Some(&pos2(4.0, 4.0)));

    // Rendering is a pure read
    let mut again = RecordingSurface::default();
    surface.render(&mut again);
    assert_eq!(recorder.lines, again.lines);
}

#[test]
fn render_after_undo_omits_removed_stroke() {
    let mut surface = DrawingSurface::new();
    draw(&mut surface, pos2(0.0, 0.0), pos2(10.0, 0.0));
    draw(&mut surface, pos2(0.0, 5.0), pos2(10.0, 5.0));
    surface.undo();

    let mut recorder = RecordingSurface::default();
    surface.render(&mut recorder);
    assert_eq!(recorder.lines.len(), 1);
    assert_eq!(recorder.lines[0].0.first(), Some(&pos2(0.0, 0.0)));
}
