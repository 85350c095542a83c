mod button;

pub use button::Button;

pub const TITLE: &str = "Life Sandbox";
pub const WINDOW_WIDTH: i32 = 1024;
pub const WINDOW_HEIGHT: i32 = 768;

pub const START_BUTTON_WIDTH: f32 = 300.0;
pub const START_BUTTON_HEIGHT: f32 = 50.0;

/// Start button centred horizontally, just above the middle of the screen
pub fn start_button(screen_width: f32, screen_height: f32) -> Button {
    Button::new(
        screen_width / 2.0 - START_BUTTON_WIDTH / 2.0,
        screen_height / 2.0 - 75.0,
        START_BUTTON_WIDTH,
        START_BUTTON_HEIGHT,
        "start",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_button_is_centred() {
        let button = start_button(1024.0, 768.0);
        assert!(button.is_hovered((512.0, 320.0)));
        assert!(!button.is_hovered((512.0, 384.0)));
        assert!(!button.is_hovered((361.0, 309.0)));
    }
}
