use crate::GridLinesApp;
use crate::command::Command;
use crate::components::IconButton;
use crate::image::{ImageId, NAME_LIMIT};
use crate::line::{ColorHue, LineOptionsPatch, LineWidth, Opacity};
use crate::state::{CanvasOptions, CanvasOptionsPatch, LineEditorPatch};

/// Bottom bar: line defaults, grid size, undo/redo and image management.
pub fn options_panel(app: &mut GridLinesApp, ctx: &egui::Context) {
    let mut commands = Vec::new();
    let line_options = *app.editor().line_options();
    let grid_size = app.editor().canvas_options().grid_size;

    egui::TopBottomPanel::bottom("options_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // Line options
            let mut width = line_options.width;
            ui.label("Width");
            egui::ComboBox::from_id_salt("width")
                .selected_text(width.get().to_string())
                .width(40.0)
                .show_ui(ui, |ui| {
                    for w in LineWidth::all() {
                        ui.selectable_value(&mut width, w, w.get().to_string());
                    }
                });

            let mut color = line_options.color;
            ui.label("Color");
            egui::ComboBox::from_id_salt("color")
                .selected_text(color.name())
                .width(70.0)
                .show_ui(ui, |ui| {
                    for hue in ColorHue::ALL {
                        ui.selectable_value(&mut color, hue, hue.name());
                    }
                });

            let mut opacity = line_options.opacity;
            ui.label("Opacity");
            egui::ComboBox::from_id_salt("opacity")
                .selected_text(format!("{}%", opacity.percent()))
                .width(50.0)
                .show_ui(ui, |ui| {
                    for o in Opacity::all() {
                        ui.selectable_value(&mut opacity, o, format!("{}%", o.percent()));
                    }
                });

            if (width, color, opacity) != (line_options.width, line_options.color, line_options.opacity) {
                commands.push(Command::SetLineOption(LineOptionsPatch {
                    width: Some(width),
                    color: Some(color),
                    opacity: Some(opacity),
                }));
            }

            // Grid options
            ui.separator();
            let mut size = grid_size;
            ui.label("Grid Size");
            egui::ComboBox::from_id_salt("grid_size")
                .selected_text(size.to_string())
                .width(40.0)
                .show_ui(ui, |ui| {
                    for s in CanvasOptions::MIN_GRID_SIZE..=CanvasOptions::MAX_GRID_SIZE {
                        ui.selectable_value(&mut size, s, s.to_string());
                    }
                });
            if size != grid_size {
                commands.push(Command::SetCanvasOption(CanvasOptionsPatch {
                    grid_size: Some(size),
                    ..Default::default()
                }));
            }

            // Undo redo
            ui.separator();
            if IconButton::new("⟲", "Undo").enabled(app.editor().can_undo()).show(ui) {
                commands.push(Command::Undo);
            }
            if IconButton::new("⟳", "Redo").enabled(app.editor().can_redo()).show(ui) {
                commands.push(Command::Redo);
            }

            ui.separator();
            let line_editor_open = app.editor().line_editor().is_open;
            if IconButton::new("☰", "Edit lines").selected(line_editor_open).show(ui) {
                commands.push(Command::SetLineEditor(LineEditorPatch {
                    is_open: Some(!line_editor_open),
                    ..Default::default()
                }));
            }

            if let (Some(active), Some(hover)) = (app.editor().active_position(), app.input().hover()) {
                let (dx, dy) = hover.delta_from(active);
                ui.label(format!("{dx} / {dy}"));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                image_controls(app, ui, &mut commands);
            });
        });
    });

    app.dispatch_all(commands);
    // A rename opened together with AddImage starts from the new image's name
    if app.name_draft.reset_pending {
        app.name_draft.reset_pending = false;
        app.reset_name_draft();
    }

    if app.confirm_delete {
        delete_confirmation(app, ctx);
    }
}

/// Image selector and its buttons, laid out right to left.
fn image_controls(app: &mut GridLinesApp, ui: &mut egui::Ui, commands: &mut Vec<Command>) {
    if app.name_draft.editing {
        if IconButton::new("💾", "Save name").show(ui) {
            commands.push(Command::RenameImage(app.name_draft.text.clone()));
            app.name_draft.editing = false;
        }
        if IconButton::new("🗙", "Cancel").show(ui) {
            app.name_draft.editing = false;
            app.reset_name_draft();
        }
        ui.add(
            egui::TextEdit::singleline(&mut app.name_draft.text)
                .char_limit(NAME_LIMIT)
                .desired_width(120.0),
        );
        return;
    }

    if IconButton::new("➕", "Add new image").show(ui) {
        commands.push(Command::AddImage);
        app.name_draft.editing = true;
        app.name_draft.reset_pending = true;
    }
    let has_image = app.editor().current_image().is_some();
    if IconButton::new("🗑", "Delete this image").enabled(has_image).show(ui) {
        app.confirm_delete = true;
    }
    if IconButton::new("🗐", "Duplicate this image").enabled(has_image).show(ui) {
        commands.push(Command::DuplicateImage);
    }
    if IconButton::new("✏", "Edit the image name").enabled(has_image).show(ui) {
        app.name_draft.editing = true;
        app.reset_name_draft();
    }

    let current = app.editor().current_image_id().cloned();
    let mut selected: Option<ImageId> = current.clone();
    let selected_text = app
        .editor()
        .current_image()
        .map(|image| image.name.clone())
        .unwrap_or_default();
    egui::ComboBox::from_id_salt("current_image")
        .selected_text(selected_text)
        .width(160.0)
        .show_ui(ui, |ui| {
            for (id, name) in app.editor().images() {
                ui.selectable_value(&mut selected, Some(id.clone()), name);
            }
        });
    if selected != current {
        if let Some(id) = selected {
            commands.push(Command::SelectImage(id));
        }
    }
}

fn delete_confirmation(app: &mut GridLinesApp, ctx: &egui::Context) {
    let mut confirmed = false;
    let mut cancelled = false;
    egui::Window::new("Delete image")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Do you really want to delete this image?");
            ui.horizontal(|ui| {
                confirmed = ui.button("Delete").clicked();
                cancelled = ui.button("Cancel").clicked();
            });
        });

    if confirmed {
        let _ = app.dispatch(Command::DeleteImage);
    }
    if confirmed || cancelled {
        app.confirm_delete = false;
    }
}
