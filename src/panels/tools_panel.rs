use crate::PaintApp;
use crate::color::format_color;

const SWATCH_SIZE: f32 = 28.0;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Drawaza");
            ui.separator();

            // Palette
            let colors = match app.settings.palette_colors() {
                Ok(colors) => colors,
                Err(err) => {
                    ui.colored_label(egui::Color32::RED, err.to_string());
                    Vec::new()
                }
            };
            ui.horizontal_wrapped(|ui| {
                for (index, color) in colors.iter().enumerate() {
                    let selected = index == app.selected_swatch;
                    let outline = if selected {
                        egui::Stroke::new(3.0, ui.visuals().selection.stroke.color)
                    } else {
                        egui::Stroke::new(1.0, egui::Color32::GRAY)
                    };
                    let swatch = egui::Button::new("")
                        .fill(*color)
                        .stroke(outline)
                        .min_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE));
                    if ui.add(swatch).on_hover_text(format_color(*color)).clicked() {
                        app.select_swatch(index);
                    }
                }
            });

            ui.separator();

            let brush = *app.drawing.brush();
            ui.horizontal(|ui| {
                ui.label(format!("Brush: {:.0}px", brush.width()));
                if ui.button("🖌 Size").clicked() {
                    app.show_brush_dialog = true;
                }
            });

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(app.drawing.can_undo(), egui::Button::new("⟲ Undo"))
                    .clicked()
                {
                    app.drawing.undo();
                }
                if ui
                    .add_enabled(app.drawing.can_redo(), egui::Button::new("⟳ Redo"))
                    .clicked()
                {
                    app.drawing.redo();
                }
            });

            if ui.button("🗋 New page").clicked() {
                app.request_new_page();
            }
            if ui
                .add_enabled(app.background.has_image(), egui::Button::new("Remove image"))
                .clicked()
            {
                app.remove_background();
            }

            ui.separator();
            ui.label(format!("Strokes: {}", app.drawing.strokes().len()));
            ui.small("Drop an image file to use it as background.");
        });
}
