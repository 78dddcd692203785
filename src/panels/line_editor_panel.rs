use crate::GridLinesApp;
use crate::command::Command;
use crate::components::IconButton;
use crate::line::{ColorHue, Endpoint, LinePatch, LineWidth, Opacity};
use crate::state::LineEditorPatch;

/// Table of the current image's lines, drawn while the line editor is open.
pub fn line_editor_panel(app: &mut GridLinesApp, ctx: &egui::Context) {
    if !app.editor().line_editor().is_open {
        return;
    }

    let mut commands = Vec::new();
    let editor = *app.editor().line_editor();
    let lines = app.editor().lines().to_vec();

    egui::SidePanel::right("line_editor_panel")
        .resizable(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Lines");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if IconButton::new("❌", "Close").show(ui) {
                        commands.push(Command::SetLineEditor(LineEditorPatch {
                            is_open: Some(false),
                            ..Default::default()
                        }));
                    }
                });
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("line_editor_grid")
                    .num_columns(6)
                    .spacing([8.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("p1");
                        ui.strong("p2");
                        ui.strong("color");
                        ui.strong("width");
                        ui.strong("opacity");
                        ui.label("");
                        ui.end_row();

                        for (i, line) in lines.iter().enumerate() {
                            let mut row_hovered = false;

                            for endpoint in [Endpoint::Start, Endpoint::End] {
                                let position = line.endpoint(endpoint);
                                let editing = editor.active_index == Some(i)
                                    && editor.active_attribute_edit == Some(endpoint);
                                let response = ui.selectable_label(editing, format!("{} / {}", position.x, position.y));
                                if response.clicked() {
                                    commands.push(Command::OpenLineEditorAttr { index: i, endpoint });
                                }
                                if response.hovered() {
                                    row_hovered = true;
                                    if editor.hover_endpoint != endpoint {
                                        commands.push(Command::SetLineEditor(LineEditorPatch {
                                            hover_endpoint: Some(endpoint),
                                            ..Default::default()
                                        }));
                                    }
                                }
                            }

                            let mut color = line.color;
                            egui::ComboBox::from_id_salt(("line_color", i))
                                .selected_text(color.name())
                                .width(70.0)
                                .show_ui(ui, |ui| {
                                    for hue in ColorHue::ALL {
                                        ui.selectable_value(&mut color, hue, hue.name());
                                    }
                                });
                            if color != line.color {
                                commands.push(Command::EditLine {
                                    index: i,
                                    patch: LinePatch { color: Some(color), ..Default::default() },
                                });
                            }

                            let mut width = line.width;
                            egui::ComboBox::from_id_salt(("line_width", i))
                                .selected_text(width.get().to_string())
                                .width(40.0)
                                .show_ui(ui, |ui| {
                                    for w in LineWidth::all() {
                                        ui.selectable_value(&mut width, w, w.get().to_string());
                                    }
                                });
                            if width != line.width {
                                commands.push(Command::EditLine {
                                    index: i,
                                    patch: LinePatch { width: Some(width), ..Default::default() },
                                });
                            }

                            let mut opacity = line.opacity;
                            egui::ComboBox::from_id_salt(("line_opacity", i))
                                .selected_text(format!("{}%", opacity.percent()))
                                .width(50.0)
                                .show_ui(ui, |ui| {
                                    for o in Opacity::all() {
                                        ui.selectable_value(&mut opacity, o, format!("{}%", o.percent()));
                                    }
                                });
                            if opacity != line.opacity {
                                commands.push(Command::EditLine {
                                    index: i,
                                    patch: LinePatch { opacity: Some(opacity), ..Default::default() },
                                });
                            }

                            ui.horizontal(|ui| {
                                if IconButton::new("⏶", "Move up").enabled(i > 0).show(ui) {
                                    commands.push(Command::MoveLine { old_index: i, new_index: i - 1 });
                                }
                                if IconButton::new("⏷", "Move down").enabled(i + 1 < lines.len()).show(ui) {
                                    commands.push(Command::MoveLine { old_index: i, new_index: i + 1 });
                                }
                                if IconButton::new("🗑", "Delete").show(ui) {
                                    commands.push(Command::DeleteLine(i));
                                }
                            });
                            ui.end_row();

                            // Keep highlighting the edited line until its endpoint is picked
                            if row_hovered && !editor.is_editing_endpoint() && editor.active_index != Some(i) {
                                commands.push(Command::SetLineEditor(LineEditorPatch {
                                    active_index: Some(Some(i)),
                                    ..Default::default()
                                }));
                            }
                        }
                    });
            });
        });

    app.dispatch_all(commands);
}
