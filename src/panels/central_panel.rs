use crate::PaintApp;
use crate::surface::CanvasPainter;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            app.background.paint(ctx, &painter, canvas_rect);

            // Handle input before rendering so the frame shows the latest point
            app.input.set_canvas_rect(canvas_rect);
            app.input.set_blocked(app.dialog_open());
            for event in app.input.process_input(ctx) {
                app.input.dispatch(&event, &mut app.drawing);
            }

            app.drawing
                .render(&mut CanvasPainter::new(&painter, canvas_rect.min));

            if app.drawing.take_damage().needs_repaint() {
                ctx.request_repaint();
            }
        });
}
