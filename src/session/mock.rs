//! In-memory input session for tests.
//!
//! `MockSession` replays a scripted queue of events and records every call
//! the filter makes, so tests can assert the exact order of grabs and
//! synthetic events without a display server.
//!
//! ```
//! use untouchable::session::InputSession;
//! use untouchable::session::mock::{MockSession, SessionCall};
//!
//! let mut session = MockSession::new(600, 800);
//! session.grab_touch().unwrap();
//! session.ungrab_touch().unwrap();
//! session.ungrab_touch().unwrap();
//! assert_eq!(session.count(SessionCall::UngrabTouch), 2);
//! assert_eq!(session.touch_releases, 1);
//! ```

use std::collections::VecDeque;
use std::time::Instant;

use super::{InputSession, PointerTarget, SyntheticPointer};
use crate::error::{Error, Result};
use crate::event::Event;

/// A call made on the session, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCall {
    GrabKeyboard,
    UngrabKeyboard,
    GrabTouch,
    UngrabTouch,
    PointerTarget,
    SendPointer,
    Flush,
    Close,
}

/// A synthetic event that reached the session.
#[derive(Debug, Clone, Copy)]
pub struct SentPointer {
    /// The window it was routed to.
    pub target: PointerTarget,
    /// The event itself.
    pub event: SyntheticPointer,
    /// When it was submitted.
    pub at: Instant,
}

/// A recording session with a scripted event queue.
#[derive(Debug)]
pub struct MockSession {
    /// Screen size reported by `screen_size`.
    pub screen: (i32, i32),
    /// Events returned by `next_event`, front first.
    pub events: VecDeque<Event>,
    /// Every call, in order.
    pub calls: Vec<SessionCall>,
    /// Every synthetic event accepted.
    pub sent: Vec<SentPointer>,
    /// Target returned by `pointer_target`.
    pub target: PointerTarget,
    /// Number of times a held keyboard grab was actually released.
    pub keyboard_releases: usize,
    /// Number of times a held touch grab was actually released.
    pub touch_releases: usize,
    /// When `true`, `send_pointer` fails.
    pub fail_send: bool,
    /// When `true`, `grab_touch` and `ungrab_touch` fail.
    pub fail_touch_grab: bool,
    /// When `true`, `grab_keyboard` fails.
    pub fail_keyboard_grab: bool,
    keyboard_grabbed: bool,
    touch_grabbed: bool,
    closed: bool,
}

impl MockSession {
    /// Create a session for a screen of the given size with no events queued.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            screen: (width, height),
            events: VecDeque::new(),
            calls: Vec::new(),
            sent: Vec::new(),
            target: PointerTarget {
                root: 1,
                window: 0x40_0007,
                root_x: width / 2,
                root_y: height / 2,
                state: 0,
            },
            keyboard_releases: 0,
            touch_releases: 0,
            fail_send: false,
            fail_touch_grab: false,
            fail_keyboard_grab: false,
            keyboard_grabbed: false,
            touch_grabbed: false,
            closed: false,
        }
    }

    /// Queue events for `next_event`.
    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events.extend(events);
        self
    }

    /// Number of recorded calls of the given kind.
    pub fn count(&self, call: SessionCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl InputSession for MockSession {
    fn screen_size(&self) -> (i32, i32) {
        self.screen
    }

    fn next_event(&mut self) -> Result<Event> {
        if self.closed {
            return Err(Error::SessionClosed);
        }
        self.events.pop_front().ok_or(Error::SessionClosed)
    }

    fn grab_keyboard(&mut self) -> Result<()> {
        self.calls.push(SessionCall::GrabKeyboard);
        if self.fail_keyboard_grab {
            return Err(Error::GrabFailed("mock keyboard grab failure".into()));
        }
        self.keyboard_grabbed = true;
        Ok(())
    }

    fn ungrab_keyboard(&mut self) -> Result<()> {
        self.calls.push(SessionCall::UngrabKeyboard);
        if self.keyboard_grabbed {
            self.keyboard_grabbed = false;
            self.keyboard_releases += 1;
        }
        Ok(())
    }

    fn grab_touch(&mut self) -> Result<()> {
        self.calls.push(SessionCall::GrabTouch);
        if self.fail_touch_grab {
            return Err(Error::GrabFailed("mock touch grab failure".into()));
        }
        self.touch_grabbed = true;
        Ok(())
    }

    fn ungrab_touch(&mut self) -> Result<()> {
        self.calls.push(SessionCall::UngrabTouch);
        if self.fail_touch_grab {
            return Err(Error::GrabFailed("mock touch ungrab failure".into()));
        }
        if self.touch_grabbed {
            self.touch_grabbed = false;
            self.touch_releases += 1;
        }
        Ok(())
    }

    fn is_keyboard_grabbed(&self) -> bool {
        self.keyboard_grabbed
    }

    fn is_touch_grabbed(&self) -> bool {
        self.touch_grabbed
    }

    fn pointer_target(&mut self) -> Result<PointerTarget> {
        self.calls.push(SessionCall::PointerTarget);
        if self.closed {
            return Err(Error::SessionClosed);
        }
        Ok(self.target)
    }

    fn send_pointer(&mut self, target: &PointerTarget, event: &SyntheticPointer) -> Result<()> {
        self.calls.push(SessionCall::SendPointer);
        if self.closed {
            return Err(Error::SessionClosed);
        }
        if self.fail_send {
            return Err(Error::SimulateFailed("mock send failure".into()));
        }
        self.sent.push(SentPointer {
            target: *target,
            event: *event,
            at: Instant::now(),
        });
        Ok(())
    }

    fn flush(&mut self) {
        self.calls.push(SessionCall::Flush);
    }

    fn close(&mut self) {
        self.calls.push(SessionCall::Close);
        if self.keyboard_grabbed {
            self.keyboard_grabbed = false;
            self.keyboard_releases += 1;
        }
        if self.touch_grabbed {
            self.touch_grabbed = false;
            self.touch_releases += 1;
        }
        self.closed = true;
    }
}
