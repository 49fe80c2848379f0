//! Linux platform implementation.
//!
//! The e-reader runs a plain X11 server, so the session talks Xlib directly:
//! core grabs for interception and `XSendEvent` for synthetic taps.

mod x11;

pub use self::x11::{X11Session, run_filter};
