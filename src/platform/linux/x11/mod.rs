//! X11 input session using core Xlib grabs.

mod display;
mod listen;
mod simulate;

use crate::config::Config;
use crate::error::Result;
use crate::event::Event;
use crate::hook::Hook;
use crate::session::{InputSession, PointerTarget, SyntheticPointer};
use x11::xlib;

/// A connection to the X server on the default display.
///
/// Grabs are tracked here so each one is released exactly once, at the
/// latest when the session is dropped.
pub struct X11Session {
    display: *mut xlib::Display,
    root: xlib::Window,
    width: i32,
    height: i32,
    keyboard_grabbed: bool,
    touch_grabbed: bool,
}

impl InputSession for X11Session {
    fn screen_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn next_event(&mut self) -> Result<Event> {
        self.wait_event()
    }

    fn grab_keyboard(&mut self) -> Result<()> {
        self.grab_keyboard_inner()
    }

    fn ungrab_keyboard(&mut self) -> Result<()> {
        self.ungrab_keyboard_inner()
    }

    fn grab_touch(&mut self) -> Result<()> {
        self.grab_buttons()
    }

    fn ungrab_touch(&mut self) -> Result<()> {
        self.ungrab_buttons()
    }

    fn is_keyboard_grabbed(&self) -> bool {
        self.keyboard_grabbed
    }

    fn is_touch_grabbed(&self) -> bool {
        self.touch_grabbed
    }

    fn pointer_target(&mut self) -> Result<PointerTarget> {
        self.innermost_target()
    }

    fn send_pointer(&mut self, target: &PointerTarget, event: &SyntheticPointer) -> Result<()> {
        self.send_button_event(target, event)
    }

    fn flush(&mut self) {
        if !self.display.is_null() {
            unsafe { xlib::XFlush(self.display) };
        }
    }

    fn close(&mut self) {
        if self.display.is_null() {
            return;
        }
        if let Err(e) = self.ungrab_keyboard_inner() {
            log::warn!("Failed to release keyboard: {}", e);
        }
        if let Err(e) = self.ungrab_buttons() {
            log::warn!("Failed to release touch grab: {}", e);
        }
        self.close_display();
    }
}

impl Drop for X11Session {
    fn drop(&mut self) {
        self.close();
    }
}

/// Open the default display and filter input until the exit gesture (blocking).
pub fn run_filter(config: &Config) -> Result<()> {
    let session = X11Session::open()?;
    let mut hook = Hook::new(session, config)?;
    hook.run()
}
