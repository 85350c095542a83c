use macroquad::prelude::*;
use crate::application::{Command, Phase};
use crate::rendering::GridLayout;
use crate::ui::Button;

/// Keys handled on the grid screen
const BOUND_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::R, KeyCode::C];

/// Translate a key press into a command for the given phase.
/// The menu has no key bindings; it only reacts to the start button.
pub fn key_command(phase: Phase, key: KeyCode) -> Option<Command> {
    match (phase, key) {
        (Phase::Menu, _) => None,
        (Phase::Running, KeyCode::Space) => Some(Command::Pause),
        (Phase::Paused, KeyCode::Space) => Some(Command::Resume),
        (_, KeyCode::R) => Some(Command::Randomize),
        (_, KeyCode::C) => Some(Command::Clear),
        _ => None,
    }
}

/// A primary click over the grid becomes a toggle of the cell under the cursor
pub fn click_command(layout: &GridLayout, mouse_pos: (f32, f32)) -> Option<Command> {
    layout
        .cell_at(mouse_pos.0, mouse_pos.1)
        .map(|(row, col)| Command::Toggle { row, col })
}

/// Poll this frame's mouse and keyboard state into commands
pub fn poll_commands(
    phase: Phase,
    layout: &GridLayout,
    start_button: &Button,
    mouse_pos: (f32, f32),
) -> Vec<Command> {
    if phase == Phase::Menu {
        return if start_button.is_clicked(mouse_pos) {
            vec![Command::Start]
        } else {
            Vec::new()
        };
    }

    let click = is_mouse_button_pressed(MouseButton::Left)
        .then(|| click_command(layout, mouse_pos))
        .flatten();

    click
        .into_iter()
        .chain(
            BOUND_KEYS
                .iter()
                .filter(|key| is_key_pressed(**key))
                .filter_map(|key| key_command(phase, *key)),
        )
        .collect()
}
