//! Synthetic pointer events via XSendEvent.

use super::X11Session;
use crate::error::{Error, Result};
use crate::session::{PointerTarget, SyntheticPointer, WindowId};
use std::mem;
use std::os::raw::{c_int, c_long, c_uint};
use x11::xlib;

const FALSE: c_int = 0;

/// `PointerWindow` destination: the window the pointer is in.
const POINTER_WINDOW: xlib::Window = 0;

/// Every event mask bit up to `ButtonMotionMask`.
const SEND_EVENT_MASK: c_long = 0xfff;

struct PointerQuery {
    root: xlib::Window,
    child: xlib::Window,
    root_x: c_int,
    root_y: c_int,
    state: c_uint,
}

impl X11Session {
    fn query_pointer(&self, window: xlib::Window) -> Option<PointerQuery> {
        let mut root: xlib::Window = 0;
        let mut child: xlib::Window = 0;
        let mut root_x: c_int = 0;
        let mut root_y: c_int = 0;
        let mut win_x: c_int = 0;
        let mut win_y: c_int = 0;
        let mut state: c_uint = 0;

        let result = unsafe {
            xlib::XQueryPointer(
                self.display,
                window,
                &mut root,
                &mut child,
                &mut root_x,
                &mut root_y,
                &mut win_x,
                &mut win_y,
                &mut state,
            )
        };

        (result != FALSE).then_some(PointerQuery {
            root,
            child,
            root_x,
            root_y,
            state,
        })
    }

    /// Walk from the root down through child windows under the pointer until
    /// there is no deeper child.
    pub(super) fn innermost_target(&mut self) -> Result<PointerTarget> {
        if self.display.is_null() {
            return Err(Error::SessionClosed);
        }
        let mut query = self
            .query_pointer(self.root)
            .ok_or_else(|| Error::SimulateFailed("XQueryPointer failed".into()))?;

        let mut window = self.root;
        while query.child != 0 {
            window = query.child;
            match self.query_pointer(window) {
                Some(next) => query = next,
                None => break,
            }
        }

        Ok(PointerTarget {
            root: query.root as WindowId,
            window: window as WindowId,
            root_x: query.root_x,
            root_y: query.root_y,
            state: query.state,
        })
    }

    pub(super) fn send_button_event(
        &mut self,
        target: &PointerTarget,
        event: &SyntheticPointer,
    ) -> Result<()> {
        if self.display.is_null() {
            return Err(Error::SessionClosed);
        }

        let mut button: xlib::XButtonEvent = unsafe { mem::zeroed() };
        button.type_ = if event.pressed {
            xlib::ButtonPress
        } else {
            xlib::ButtonRelease
        };
        button.button = event.button as c_uint;
        button.same_screen = xlib::True;
        button.root = target.root as xlib::Window;
        button.window = target.window as xlib::Window;
        button.x_root = target.root_x;
        button.y_root = target.root_y;
        button.x = event.x;
        button.y = event.y;
        button.state = target.state;

        let mut xev: xlib::XEvent = unsafe { mem::zeroed() };
        xev.button = button;

        let status = unsafe {
            xlib::XSendEvent(
                self.display,
                POINTER_WINDOW,
                xlib::True,
                SEND_EVENT_MASK,
                &mut xev,
            )
        };
        if status == 0 {
            Err(Error::SimulateFailed("XSendEvent failed".into()))
        } else {
            Ok(())
        }
    }
}
