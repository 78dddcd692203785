use crate::command::{Command, CommandResult};
use crate::input::InputHandler;
use crate::panels::{central_panel, line_editor_panel, options_panel};
use crate::renderer::Renderer;
use crate::state::{AppState, EditorContext};

/// Text field state while the current image is being renamed.
#[derive(Debug, Default)]
pub struct NameDraft {
    pub editing: bool,
    pub text: String,
    /// Refill `text` once pending commands have run
    pub reset_pending: bool,
}

/// The eframe application: the editing session plus UI-only state.
pub struct GridLinesApp {
    editor: EditorContext,
    renderer: Renderer,
    input: InputHandler,
    pub(crate) name_draft: NameDraft,
    pub(crate) confirm_delete: bool,
}

impl Default for GridLinesApp {
    fn default() -> Self {
        Self::with_state(AppState::default())
    }
}

impl GridLinesApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous session (if any).
        let state = cc
            .storage
            .and_then(|storage| eframe::get_value::<AppState>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!("Starting with {} images", state.images.len());
        Self::with_state(state)
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            editor: EditorContext::from_state(state),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            name_draft: NameDraft::default(),
            confirm_delete: false,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn input(&self) -> &InputHandler {
        &self.input
    }

    pub fn dispatch(&mut self, command: Command) -> CommandResult {
        self.editor.dispatch(command)
    }

    /// Dispatch commands collected while drawing a panel. Rejected ones are no-ops.
    pub fn dispatch_all(&mut self, commands: Vec<Command>) {
        for command in commands {
            let _ = self.dispatch(command);
        }
    }

    /// Reset the rename field to the current image's name.
    pub(crate) fn reset_name_draft(&mut self) {
        self.name_draft.text = self
            .editor
            .current_image()
            .map(|image| image.name.clone())
            .unwrap_or_default();
    }
}

impl eframe::App for GridLinesApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.editor.state());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        options_panel(self, ctx);
        line_editor_panel(self, ctx);
        central_panel(self, ctx);
    }
}
