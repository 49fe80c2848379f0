//! Opening and closing the X display.

use super::X11Session;
use crate::error::{Error, Result};
use std::os::raw::c_int;
use std::ptr::null;
use x11::xlib;

impl X11Session {
    /// Connect to the default display and read the screen geometry.
    pub fn open() -> Result<Self> {
        let display = unsafe { xlib::XOpenDisplay(null()) };
        if display.is_null() {
            return Err(Error::SessionUnavailable("could not open display".into()));
        }

        let (root, width, height) = unsafe {
            let screen = xlib::XDefaultScreen(display);
            (
                xlib::XRootWindow(display, screen),
                xlib::XDisplayWidth(display, screen),
                xlib::XDisplayHeight(display, screen),
            )
        };
        log::debug!("Screen width: {}", width);

        unsafe { xlib::XAllowEvents(display, xlib::AsyncBoth, xlib::CurrentTime) };

        // A held key then reports a single release, so the press window is
        // measured from the first press to the physical release.
        let mut supported: c_int = 0;
        unsafe { xlib::XkbSetDetectableAutoRepeat(display, xlib::True, &mut supported) };
        if supported == 0 {
            log::debug!("Detectable auto-repeat not supported");
        }

        Ok(Self {
            display,
            root,
            width,
            height,
            keyboard_grabbed: false,
            touch_grabbed: false,
        })
    }

    pub(super) fn close_display(&mut self) {
        if !self.display.is_null() {
            unsafe { xlib::XCloseDisplay(self.display) };
            self.display = std::ptr::null_mut();
        }
    }
}
