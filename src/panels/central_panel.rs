use crate::GridLinesApp;
use crate::renderer::CanvasView;

pub fn central_panel(app: &mut GridLinesApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::click());

            let grid_size = app.editor().canvas_options().grid_size;
            let events = app.input_mut().process_input(ctx, &response, grid_size);
            let commands: Vec<_> = events
                .into_iter()
                .filter_map(|event| event.to_command(app.editor().line_editor()))
                .collect();
            app.dispatch_all(commands);

            let view = CanvasView::new(app.editor(), app.input().hover());
            app.renderer().render(&painter, response.rect, &view);
        });
}
