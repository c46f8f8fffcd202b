//! Input events
//!
//! Key and button bindings belong to the frontend; the game only sees
//! these events.

use glam::Vec2;

use crate::sim::TickInput;

/// A discrete input event delivered for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Move left (held)
    MoveLeft,
    /// Move right (held)
    MoveRight,
    /// Fast drop (held)
    MoveDown,
    Jump,
    /// Escape: back out of the current screen or abandon the session
    Cancel,
    /// Window closed or equivalent: leave the application
    Quit,
    /// Keyboard menu navigation
    FocusPrev,
    FocusNext,
    /// Activate the focused button / submit text
    Confirm,
    /// Typed character
    Text(char),
    Backspace,
    /// Pointer press in viewport coordinates
    Click(Vec2),
}

/// Anything that can produce the events for the next tick
pub trait InputSource {
    /// Drain the events pending for this tick. Must not block.
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Collapse one tick's events into simulation input
pub fn tick_input(events: &[InputEvent]) -> TickInput {
    let mut input = TickInput::default();
    for event in events {
        match event {
            InputEvent::MoveLeft => input.left = true,
            InputEvent::MoveRight => input.right = true,
            InputEvent::MoveDown => input.down = true,
            InputEvent::Jump => input.jump = true,
            InputEvent::Cancel | InputEvent::Quit => input.cancel = true,
            _ => {}
        }
    }
    input
}
