//! Gesture classification: turns key timing into page turns and grab toggles.
//!
//! The classifier owns the only mutable filter state: one press window per
//! held key and the interception flag. The flag is only ever flipped together
//! with the matching grab call on the session, so once [`GestureClassifier::on_event`]
//! returns, `is_intercepting()` always equals the session's touch grab state.

use std::collections::HashMap;
use std::time::Duration;

use crate::config::{Config, GestureScheme};
use crate::error::Result;
use crate::event::{Event, EventType, Timestamp};
use crate::keycode::Key;
use crate::session::InputSession;

/// What the filter should do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Tap the forward page region.
    PageForward,
    /// Tap the backward page region.
    PageBackward,
    /// Touch input is now suppressed.
    EnableInterception,
    /// Touch input is passed through again.
    DisableInterception,
    /// The exit gesture was seen.
    Exit,
}

/// Stateful gesture classifier.
#[derive(Debug)]
pub struct GestureClassifier {
    scheme: GestureScheme,
    long_press: Duration,
    screen_width: i32,
    exit_corner: i32,
    press_windows: HashMap<Key, Timestamp>,
    intercepting: bool,
}

impl GestureClassifier {
    /// Create a classifier for a screen `screen_width` pixels wide.
    pub fn new(config: &Config, screen_width: i32) -> Self {
        Self {
            scheme: config.scheme,
            long_press: config.long_press,
            screen_width,
            exit_corner: config.exit_corner,
            press_windows: HashMap::new(),
            intercepting: false,
        }
    }

    /// Whether touch input is currently being suppressed.
    pub fn is_intercepting(&self) -> bool {
        self.intercepting
    }

    /// Feed one event through the state machine.
    ///
    /// Grab transitions are applied on `session` before this returns. Events
    /// that match no rule yield `None`.
    pub fn on_event<S: InputSession + ?Sized>(
        &mut self,
        event: &Event,
        session: &mut S,
    ) -> Option<Action> {
        match event.event_type {
            EventType::KeyPressed => {
                let kb = event.keyboard?;
                log::debug!("Key press - {:#x}", kb.keysym);
                self.press_windows.entry(kb.key).or_insert(event.time);
                None
            }
            EventType::KeyReleased => {
                let kb = event.keyboard?;
                log::debug!("Key release - {:#x}", kb.keysym);
                let Some(start) = self.press_windows.remove(&kb.key) else {
                    log::debug!("No press recorded for {:?}, ignoring release", kb.key);
                    return None;
                };
                let held = Duration::from_millis(u64::from(event.time.wrapping_sub(start)));
                log::debug!("Key press duration - {} ms", held.as_millis());
                self.on_key_released(kb.key, held, session)
            }
            EventType::PointerPressed => {
                if let Some(pointer) = event.pointer {
                    log::debug!("Button press - {}", pointer.button);
                    log::debug!("Coordinates - {}, {}", pointer.x, pointer.y);
                }
                None
            }
            EventType::PointerReleased => {
                let pointer = event.pointer?;
                log::debug!("Button release - {}", pointer.button);
                self.is_exit_gesture(pointer.x, pointer.y)
                    .then_some(Action::Exit)
            }
        }
    }

    /// Drop the touch grab if held. Used on shutdown.
    pub fn release_interception<S: InputSession + ?Sized>(&mut self, session: &mut S) -> Result<()> {
        if self.intercepting {
            session.ungrab_touch()?;
            self.intercepting = false;
        }
        Ok(())
    }

    /// Forget the touch grab after the session has dropped it on close.
    pub fn reset_interception(&mut self) {
        self.intercepting = false;
    }

    fn on_key_released<S: InputSession + ?Sized>(
        &mut self,
        key: Key,
        held: Duration,
        session: &mut S,
    ) -> Option<Action> {
        let long = self.is_long_press(held);
        match self.scheme {
            GestureScheme::Single { key: button } if key == button => {
                if !self.intercepting {
                    self.enable_interception(session)
                } else if long {
                    Some(Action::PageBackward)
                } else {
                    Some(Action::PageForward)
                }
            }
            GestureScheme::Dual { backward, .. } if key == backward => {
                if long && self.intercepting {
                    self.disable_interception(session)
                } else {
                    Some(Action::PageBackward)
                }
            }
            GestureScheme::Dual { forward, .. } if key == forward => {
                if long && !self.intercepting {
                    self.enable_interception(session)
                } else {
                    Some(Action::PageForward)
                }
            }
            _ => None,
        }
    }

    fn is_long_press(&self, held: Duration) -> bool {
        held >= self.long_press
    }

    fn is_exit_gesture(&self, x: i32, y: i32) -> bool {
        x > self.screen_width - self.exit_corner && y < self.exit_corner
    }

    fn enable_interception<S: InputSession + ?Sized>(&mut self, session: &mut S) -> Option<Action> {
        log::debug!("Block touch events");
        match session.grab_touch() {
            Ok(()) => {
                self.intercepting = true;
                Some(Action::EnableInterception)
            }
            Err(e) => {
                log::warn!("Could not block touch events: {}", e);
                None
            }
        }
    }

    fn disable_interception<S: InputSession + ?Sized>(&mut self, session: &mut S) -> Option<Action> {
        log::debug!("Unblock touch events");
        match session.ungrab_touch() {
            Ok(()) => {
                self.intercepting = false;
                Some(Action::DisableInterception)
            }
            Err(e) => {
                log::warn!("Could not unblock touch events: {}", e);
                None
            }
        }
    }
}
