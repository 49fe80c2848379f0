//! Blocking event retrieval and core grabs.

use super::X11Session;
use crate::error::{Error, Result};
use crate::event::Event;
use std::mem;
use std::os::raw::c_uint;
use x11::xlib;

/// Convert an X11 event to our Event type.
fn convert_event(xev: &xlib::XEvent) -> Option<Event> {
    match xev.get_type() {
        t if t == xlib::KeyPress || t == xlib::KeyRelease => {
            let mut key = unsafe { xev.key };
            let keysym = unsafe { xlib::XLookupKeysym(&mut key, 0) } as u32;
            let time = key.time as u32;
            if t == xlib::KeyPress {
                Some(Event::key_pressed(keysym, time))
            } else {
                Some(Event::key_released(keysym, time))
            }
        }

        t if t == xlib::ButtonPress || t == xlib::ButtonRelease => {
            let button = unsafe { xev.button };
            let code = button.button as u8;
            let time = button.time as u32;
            if t == xlib::ButtonPress {
                Some(Event::pointer_pressed(code, button.x, button.y, time))
            } else {
                Some(Event::pointer_released(code, button.x, button.y, time))
            }
        }

        _ => None,
    }
}

impl X11Session {
    pub(super) fn wait_event(&mut self) -> Result<Event> {
        if self.display.is_null() {
            return Err(Error::SessionClosed);
        }
        loop {
            let mut xev: xlib::XEvent = unsafe { mem::zeroed() };
            unsafe { xlib::XNextEvent(self.display, &mut xev) };
            if let Some(event) = convert_event(&xev) {
                return Ok(event);
            }
        }
    }

    pub(super) fn grab_keyboard_inner(&mut self) -> Result<()> {
        if self.keyboard_grabbed {
            return Ok(());
        }
        if self.display.is_null() {
            return Err(Error::SessionClosed);
        }
        let status = unsafe {
            xlib::XGrabKeyboard(
                self.display,
                self.root,
                xlib::True,
                xlib::GrabModeAsync,
                xlib::GrabModeAsync,
                xlib::CurrentTime,
            )
        };
        if status != xlib::GrabSuccess {
            return Err(Error::GrabFailed(format!(
                "XGrabKeyboard returned {}",
                status
            )));
        }
        self.keyboard_grabbed = true;
        Ok(())
    }

    pub(super) fn ungrab_keyboard_inner(&mut self) -> Result<()> {
        if !self.keyboard_grabbed || self.display.is_null() {
            return Ok(());
        }
        unsafe {
            xlib::XUngrabKeyboard(self.display, xlib::CurrentTime);
            xlib::XFlush(self.display);
        }
        self.keyboard_grabbed = false;
        Ok(())
    }

    /// Grab every pointer button on the root window. Touches then reach us
    /// instead of the reader application.
    pub(super) fn grab_buttons(&mut self) -> Result<()> {
        if self.touch_grabbed {
            return Ok(());
        }
        if self.display.is_null() {
            return Err(Error::SessionClosed);
        }
        let mask = (xlib::ButtonPressMask | xlib::ButtonReleaseMask) as c_uint;
        let status = unsafe {
            xlib::XGrabButton(
                self.display,
                xlib::AnyButton as c_uint,
                xlib::AnyModifier as c_uint,
                self.root,
                xlib::True,
                mask,
                xlib::GrabModeAsync,
                xlib::GrabModeAsync,
                0,
                0,
            )
        };
        // Xlib reports BadAccess asynchronously; a zero return means the
        // request never left the client.
        if status == 0 {
            return Err(Error::GrabFailed("XGrabButton failed".into()));
        }
        unsafe { xlib::XFlush(self.display) };
        self.touch_grabbed = true;
        Ok(())
    }

    pub(super) fn ungrab_buttons(&mut self) -> Result<()> {
        if !self.touch_grabbed || self.display.is_null() {
            return Ok(());
        }
        unsafe {
            xlib::XUngrabButton(
                self.display,
                xlib::AnyButton as c_uint,
                xlib::AnyModifier as c_uint,
                self.root,
            );
            xlib::XFlush(self.display);
        }
        self.touch_grabbed = false;
        Ok(())
    }
}
