use egui::{Context, Key, PointerButton, Pos2, Rect, Response};

use crate::command::Command;
use crate::geometry::{Position, pixel_to_grid};
use crate::line::{ColorHue, LineOptionsPatch, LineWidth, Opacity};
use crate::state::LineEditor;

const WIDTH_KEYS: [Key; 8] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
];

/// One key per hue, in [`ColorHue::ALL`] order; the tenth hue has no key.
const COLOR_KEYS: [Key; 9] = [Key::Q, Key::W, Key::E, Key::R, Key::T, Key::Y, Key::U, Key::I, Key::O];

const OPACITY_KEYS: [Key; 10] = [
    Key::A,
    Key::S,
    Key::D,
    Key::F,
    Key::G,
    Key::H,
    Key::J,
    Key::K,
    Key::L,
    Key::Semicolon,
];

/// Canvas input after snapping, before it becomes a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed over a grid intersection
    GridClick(Position),
    /// Secondary button pressed anywhere on the canvas
    Cancel,
    KeyDown(Key),
}

impl InputEvent {
    /// Translate to a command, given whether an endpoint edit is pending.
    pub fn to_command(self, line_editor: &LineEditor) -> Option<Command> {
        match self {
            InputEvent::GridClick(position) => Some(Command::ClickPosition(position)),
            InputEvent::Cancel | InputEvent::KeyDown(Key::Escape) => Some(if line_editor.is_editing_endpoint() {
                Command::CancelEndpointEdit
            } else {
                Command::ClearActivePosition
            }),
            InputEvent::KeyDown(key) => shortcut_command(key),
        }
    }
}

/// Line option shortcuts: `1`-`8` width, `q`-`o` colour, `a`-`;` opacity.
pub fn shortcut_command(key: Key) -> Option<Command> {
    let position = |keys: &[Key]| keys.iter().position(|k| *k == key);

    let patch = if let Some(i) = position(&WIDTH_KEYS) {
        LineOptionsPatch {
            width: Some(LineWidth::new(i as u8 + 1)),
            ..Default::default()
        }
    } else if let Some(i) = position(&COLOR_KEYS) {
        LineOptionsPatch {
            color: Some(ColorHue::ALL[i]),
            ..Default::default()
        }
    } else if let Some(i) = position(&OPACITY_KEYS) {
        LineOptionsPatch {
            opacity: Some(Opacity::from_tenths(i as u8 + 1)),
            ..Default::default()
        }
    } else {
        return None;
    };
    Some(Command::SetLineOption(patch))
}

/// Turns raw egui input on the canvas into [`InputEvent`]s and tracks the hovered intersection.
#[derive(Debug, Default)]
pub struct InputHandler {
    hover: Option<Position>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid intersection under the pointer, if it is over the canvas.
    pub fn hover(&self) -> Option<Position> {
        self.hover
    }

    fn to_grid(canvas_rect: Rect, pos: Pos2, grid_size: u32) -> Position {
        pixel_to_grid((pos - canvas_rect.min).to_pos2(), grid_size)
    }

    /// Process one frame of input for the canvas `response`.
    pub fn process_input(&mut self, ctx: &Context, response: &Response, grid_size: u32) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let rect = response.rect;

        self.hover = response
            .hover_pos()
            .map(|pos| Self::to_grid(rect, pos, grid_size));

        // Shortcuts are off while a text field has focus
        let keyboard_free = !ctx.wants_keyboard_input();

        ctx.input(|input| {
            if response.hovered() {
                if input.pointer.button_pressed(PointerButton::Primary) {
                    if let Some(pos) = input.pointer.interact_pos() {
                        events.push(InputEvent::GridClick(Self::to_grid(rect, pos, grid_size)));
                    }
                }
                if input.pointer.button_pressed(PointerButton::Secondary) {
                    events.push(InputEvent::Cancel);
                }
            }

            if keyboard_free {
                for event in &input.events {
                    if let egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } = event
                    {
                        if modifiers.is_none() {
                            events.push(InputEvent::KeyDown(*key));
                        }
                    }
                }
            }
        });

        events
    }
}
