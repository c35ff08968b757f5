// editor/src/controls/editor_input.rs
use macroquad::prelude::*;

/// Mouse and keyboard state for one editor frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EditorInput {
    /// Cursor in display pixels.
    pub mouse: Vec2,
    pub left_down: bool,
    pub left_pressed: bool,
    pub right_down: bool,
    /// 1 to step forward through the palette, -1 to step back, 0 otherwise.
    pub wheel: i32,
    pub shift: bool,
    /// Scroll direction, each axis in -1..=1.
    pub pan: Vec2,
    pub toggle_grid: bool,
    pub autotile: bool,
    pub new_map: bool,
    pub save: bool,
    pub set_spawn: bool,
}

impl EditorInput {
    /// Polls mouse and keyboard. `scale` converts screen to display pixels.
    pub fn capture(scale: f32) -> Self {
        let (x, y) = mouse_position();
        let wheel = mouse_wheel().1;

        Self {
            mouse: vec2(x, y) / scale,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            right_down: is_mouse_button_down(MouseButton::Right),
            // Wheel up steps back
            wheel: if wheel > 0.0 { -1 } else if wheel < 0.0 { 1 } else { 0 },
            shift: is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
            pan: vec2(
                axis(KeyCode::A, KeyCode::D),
                axis(KeyCode::W, KeyCode::S),
            ),
            toggle_grid: is_key_pressed(KeyCode::G),
            autotile: is_key_pressed(KeyCode::T),
            new_map: is_key_pressed(KeyCode::N),
            save: is_key_pressed(KeyCode::O),
            set_spawn: is_key_pressed(KeyCode::P),
        }
    }
}

fn axis(negative: KeyCode, positive: KeyCode) -> f32 {
    is_key_down(positive) as i32 as f32 - is_key_down(negative) as i32 as f32
}
