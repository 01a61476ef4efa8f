use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

use crate::drawing::DrawingSurface;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Position relative to the canvas' top-left corner
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer and keyboard input relevant to the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    PointerMove {
        location: InputLocation,
        /// Whether the primary button is held
        primary_down: bool,
    },
    /// Pointer left the window or the touch was lost
    PointerLeave,
    KeyDown {
        key: Key,
        modifiers: Modifiers,
    },
}

/// Converts raw egui input into [`InputEvent`]s for one canvas
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    /// Set while a modal window covers the canvas
    blocked: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            blocked: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    /// Route an event to the drawing, dropping shortcuts while the canvas is blocked
    pub fn dispatch(&self, event: &InputEvent, drawing: &mut DrawingSurface) -> bool {
        if self.blocked && matches!(event, InputEvent::KeyDown { .. }) {
            return false;
        }
        route_event(event, drawing)
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos - self.canvas_rect.min.to_vec2(),
            is_in_canvas: !self.blocked && self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;

            for button in [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle] {
                if pointer.button_pressed(button) {
                    if let Some(pos) = pointer.interact_pos() {
                        events.push(InputEvent::PointerDown {
                            location: self.make_location(pos),
                            button,
                        });
                        self.last_pointer_pos = Some(pos);
                    }
                }
            }

            if let Some(pos) = pointer.hover_pos() {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                        primary_down: pointer.primary_down(),
                    });
                }
                self.last_pointer_pos = Some(pos);
            }

            for button in [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle] {
                if pointer.button_released(button) {
                    // Touch screens may report no position on release
                    if let Some(pos) = pointer.interact_pos().or(self.last_pointer_pos) {
                        events.push(InputEvent::PointerUp {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
            }

            for event in &input.raw.events {
                match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    }),
                    egui::Event::PointerGone => {
                        events.push(InputEvent::PointerLeave);
                        self.last_pointer_pos = None;
                    }
                    _ => {}
                }
            }
        });

        events
    }
}

/// Apply one input event to the drawing surface.
///
/// Returns true if the event changed or could have changed the drawing.
pub fn route_event(event: &InputEvent, drawing: &mut DrawingSurface) -> bool {
    match event {
        InputEvent::PointerDown {
            location,
            button: PointerButton::Primary,
        } if location.is_in_canvas => {
            drawing.begin_stroke(location.position);
            true
        }
        InputEvent::PointerMove {
            location,
            primary_down: true,
        } if drawing.is_drawing() => {
            drawing.extend_stroke(location.position);
            true
        }
        InputEvent::PointerUp {
            location,
            button: PointerButton::Primary,
        } if drawing.is_drawing() => {
            drawing.extend_stroke(location.position);
            drawing.end_stroke();
            true
        }
        InputEvent::PointerLeave if drawing.is_drawing() => {
            // Keep what was drawn so far
            drawing.end_stroke();
            true
        }
        InputEvent::KeyDown { key, modifiers } if modifiers.command => match key {
            Key::Z if modifiers.shift => drawing.redo(),
            Key::Z => drawing.undo(),
            Key::Y => drawing.redo(),
            _ => false,
        },
        _ => false,
    }
}
