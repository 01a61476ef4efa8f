use crate::PaintApp;
use crate::brush::BrushSize;

pub fn brush_size_dialog(app: &mut PaintApp, ctx: &egui::Context) {
    if !app.show_brush_dialog {
        return;
    }

    let mut open = true;
    let mut chosen = None;
    egui::Window::new("Brush size")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for size in BrushSize::ALL {
                    let width = app.settings.brush_sizes.width_for(size);
                    if ui.button(format!("{} ({:.0})", size.label(), width)).clicked() {
                        chosen = Some(size);
                    }
                }
            });
        });

    if let Some(size) = chosen {
        app.choose_brush_size(size);
    } else if !open {
        app.show_brush_dialog = false;
    }
}

pub fn new_page_dialog(app: &mut PaintApp, ctx: &egui::Context) {
    if !app.show_new_page_dialog {
        return;
    }

    egui::Window::new("Warning!")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Are you sure you want to create a new page? Current progress will be lost.");
            ui.horizontal(|ui| {
                if ui.button("Ok").clicked() {
                    app.new_page();
                }
                if ui.button("Cancel").clicked() {
                    app.show_new_page_dialog = false;
                }
            });
        });
}
