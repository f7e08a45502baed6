//! Pointer input handling

use glam::Vec2;

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::sim::{InputState, Point2D};

/// A pointer event already rescaled to playfield coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Point2D),
    Move(Point2D),
    Release,
}

impl PointerEvent {
    /// Apply the event to the input state
    pub fn apply(self, input: &mut InputState) {
        match self {
            PointerEvent::Press(pos) => input.press(pos),
            PointerEvent::Move(pos) => input.pointer_moved(pos),
            PointerEvent::Release => input.release(),
        }
    }
}

/// Rescale an element-local offset into playfield coordinates.
///
/// The canvas may be displayed at any size; the playfield is stretched to
/// fill it. A zero-sized element maps everything to the origin.
pub fn element_to_playfield(offset: Vec2, element_size: Vec2) -> Point2D {
    if element_size.x <= 0.0 || element_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        offset.x / element_size.x * PLAYFIELD_WIDTH,
        offset.y / element_size.y * PLAYFIELD_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_to_playfield() {
        let size = Vec2::new(960.0, 540.0);
        assert_eq!(element_to_playfield(Vec2::ZERO, size), Vec2::ZERO);
        assert_eq!(
            element_to_playfield(Vec2::new(480.0, 270.0), size),
            Vec2::new(960.0, 540.0)
        );
        assert_eq!(
            element_to_playfield(size, size),
            Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
        );
    }

    #[test]
    fn test_zero_sized_element() {
        assert_eq!(
            element_to_playfield(Vec2::new(10.0, 10.0), Vec2::new(0.0, 540.0)),
            Vec2::ZERO
        );
    }

    #[test]
    fn test_event_sequence() {
        let mut input = InputState::default();
        PointerEvent::Press(Vec2::new(100.0, 100.0)).apply(&mut input);
        PointerEvent::Move(Vec2::new(200.0, 200.0)).apply(&mut input);
        assert!(input.dragging);
        assert_eq!(input.pointer, Vec2::new(100.0, 100.0));

        input.set_tracking_mode(true);
        PointerEvent::Move(Vec2::new(200.0, 200.0)).apply(&mut input);
        assert_eq!(input.pointer, Vec2::new(200.0, 200.0));

        PointerEvent::Release.apply(&mut input);
        assert!(!input.dragging);
    }
}
