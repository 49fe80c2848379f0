//! The input session: the seam between the filter and the windowing system.
//!
//! The filter never talks to the display server directly. Everything it needs
//! (blocking event retrieval, grabs, synthetic pointer events and the window
//! hierarchy walk that decides who receives them) goes through
//! [`InputSession`]. The X11 implementation lives in the platform module;
//! [`mock::MockSession`] records calls for tests.

pub mod mock;

use crate::error::Result;
use crate::event::Event;

/// Native window identifier.
pub type WindowId = u64;

/// Where a synthetic pointer event is delivered.
///
/// Resolved by walking the window tree from the root down to the innermost
/// window under the pointer, the same window a real touch would hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerTarget {
    /// Root window of the screen.
    pub root: WindowId,
    /// Innermost window under the pointer.
    pub window: WindowId,
    /// Current pointer position relative to the root.
    pub root_x: i32,
    /// Current pointer position relative to the root.
    pub root_y: i32,
    /// Modifier and button state at query time.
    pub state: u32,
}

/// One half of a synthetic tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticPointer {
    /// `true` for the press, `false` for the release.
    pub pressed: bool,
    /// Button number (1-indexed).
    pub button: u8,
    /// X coordinate delivered with the event.
    pub x: i32,
    /// Y coordinate delivered with the event.
    pub y: i32,
}

/// Connection to the windowing system.
///
/// Grab bookkeeping belongs to the session: releasing a grab that is not held
/// must be a no-op, so callers can never release twice.
pub trait InputSession {
    /// Screen size in pixels as `(width, height)`.
    fn screen_size(&self) -> (i32, i32);

    /// Block until the next key or pointer event arrives.
    fn next_event(&mut self) -> Result<Event>;

    /// Grab the keyboard so hardware buttons are delivered to this process.
    fn grab_keyboard(&mut self) -> Result<()>;

    /// Release the keyboard grab if held.
    fn ungrab_keyboard(&mut self) -> Result<()>;

    /// Grab all pointer buttons, suppressing touch input for other clients.
    fn grab_touch(&mut self) -> Result<()>;

    /// Release the touch grab if held.
    fn ungrab_touch(&mut self) -> Result<()>;

    /// Whether the keyboard grab is currently held.
    fn is_keyboard_grabbed(&self) -> bool;

    /// Whether the touch grab is currently held.
    fn is_touch_grabbed(&self) -> bool;

    /// Resolve the innermost window under the pointer.
    fn pointer_target(&mut self) -> Result<PointerTarget>;

    /// Submit a synthetic pointer event to `target`.
    fn send_pointer(&mut self, target: &PointerTarget, event: &SyntheticPointer) -> Result<()>;

    /// Force delivery of everything submitted so far.
    fn flush(&mut self);

    /// Release all grabs and close the connection. Safe to call repeatedly.
    fn close(&mut self);
}
