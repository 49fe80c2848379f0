//! Event types delivered by an input session.

use crate::keycode::Key;

/// X server timestamp in milliseconds. Wraps around at `u32::MAX`.
pub type Timestamp = u32;

/// The type of input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A key was pressed down.
    KeyPressed,
    /// A key was released.
    KeyReleased,
    /// A pointer button (touch) went down.
    PointerPressed,
    /// A pointer button (touch) was released.
    PointerReleased,
}

/// Keyboard event data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardData {
    /// The resolved key.
    pub key: Key,
    /// The raw keysym at shift level 0.
    pub keysym: u32,
}

/// Pointer event data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerData {
    /// Button number (1-indexed).
    pub button: u8,
    /// X coordinate (screen coordinates).
    pub x: i32,
    /// Y coordinate (screen coordinates).
    pub y: i32,
}

/// A complete input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// The type of event.
    pub event_type: EventType,
    /// Server time when the event occurred.
    pub time: Timestamp,
    /// Keyboard-specific data.
    pub keyboard: Option<KeyboardData>,
    /// Pointer-specific data.
    pub pointer: Option<PointerData>,
}

impl Event {
    fn new(event_type: EventType, time: Timestamp) -> Self {
        Self {
            event_type,
            time,
            keyboard: None,
            pointer: None,
        }
    }

    /// Create a key pressed event.
    pub fn key_pressed(keysym: u32, time: Timestamp) -> Self {
        let mut event = Self::new(EventType::KeyPressed, time);
        event.keyboard = Some(KeyboardData {
            key: Key::from_keysym(keysym),
            keysym,
        });
        event
    }

    /// Create a key released event.
    pub fn key_released(keysym: u32, time: Timestamp) -> Self {
        let mut event = Self::new(EventType::KeyReleased, time);
        event.keyboard = Some(KeyboardData {
            key: Key::from_keysym(keysym),
            keysym,
        });
        event
    }

    /// Create a pointer pressed event.
    pub fn pointer_pressed(button: u8, x: i32, y: i32, time: Timestamp) -> Self {
        let mut event = Self::new(EventType::PointerPressed, time);
        event.pointer = Some(PointerData { button, x, y });
        event
    }

    /// Create a pointer released event.
    pub fn pointer_released(button: u8, x: i32, y: i32, time: Timestamp) -> Self {
        let mut event = Self::new(EventType::PointerReleased, time);
        event.pointer = Some(PointerData { button, x, y });
        event
    }
}
