// game/src/input/input_snapshot.rs
use macroquad::prelude::*;

/// Player controls for a single frame.
///
/// `jump` and `dash` are edge triggered: they are only set on the frame the
/// key goes down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub dash: bool,
}

impl InputSnapshot {
    /// Polls the keyboard.
    pub fn capture() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            jump: is_key_pressed(KeyCode::Up),
            dash: is_key_pressed(KeyCode::X),
        }
    }

    /// -1, 0 or 1.
    pub fn horizontal(&self) -> f32 {
        self.right as i32 as f32 - self.left as i32 as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_keys_cancel() {
        let both = InputSnapshot { left: true, right: true, ..Default::default() };
        assert_eq!(both.horizontal(), 0.0);

        let left = InputSnapshot { left: true, ..Default::default() };
        assert_eq!(left.horizontal(), -1.0);
    }
}
