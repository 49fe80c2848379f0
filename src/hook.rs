//! The filter event loop.

use crate::classifier::{Action, GestureClassifier};
use crate::config::Config;
use crate::emitter::{Direction, GestureEmitter};
use crate::error::Result;
use crate::event::Event;
use crate::platform;
use crate::session::InputSession;

/// Event loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Events are being processed.
    Running,
    /// The exit gesture was seen and the session has been closed.
    Stopped,
}

/// Owns a session and runs every event through the classifier.
///
/// The keyboard grab is taken in [`Hook::new`] and released exactly once,
/// either by [`Hook::stop`] or when the hook is dropped.
pub struct Hook<S: InputSession> {
    session: S,
    classifier: GestureClassifier,
    emitter: GestureEmitter,
    state: LoopState,
}

impl<S: InputSession> Hook<S> {
    /// Grab the keyboard on `session` and get ready to filter.
    pub fn new(mut session: S, config: &Config) -> Result<Self> {
        let (width, height) = session.screen_size();
        log::debug!("Long press duration: {} ms", config.long_press.as_millis());
        log::debug!("Screen size: {}x{}", width, height);

        log::debug!("Grab key events");
        if let Err(e) = session.grab_keyboard() {
            session.close();
            return Err(e);
        }

        Ok(Self {
            session,
            classifier: GestureClassifier::new(config, width),
            emitter: GestureEmitter::new(config, width),
            state: LoopState::Running,
        })
    }

    /// Process events until the exit gesture is seen (blocking).
    ///
    /// Recoverable failures while handling a single event are logged and the
    /// loop keeps going. A broken session stops the loop after the grabs have
    /// been released; only a failed event read is returned as an error.
    pub fn run(&mut self) -> Result<()> {
        while self.state == LoopState::Running {
            let event = match self.session.next_event() {
                Ok(event) => event,
                Err(e) => {
                    self.stop();
                    return Err(e);
                }
            };
            self.handle_event(&event);
        }
        Ok(())
    }

    /// Handle one event to completion.
    pub fn handle_event(&mut self, event: &Event) -> Option<Action> {
        if self.state == LoopState::Stopped {
            return None;
        }

        let action = self.classifier.on_event(event, &mut self.session)?;
        match action {
            Action::PageForward => self.page(Direction::Forward),
            Action::PageBackward => self.page(Direction::Backward),
            Action::EnableInterception => log::info!("Touch events blocked"),
            Action::DisableInterception => log::info!("Touch events unblocked"),
            Action::Exit => {
                log::info!("Exit gesture received");
                self.stop();
            }
        }
        Some(action)
    }

    /// Release all grabs and close the session. Does nothing once stopped.
    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }
        self.state = LoopState::Stopped;

        if let Err(e) = self.session.ungrab_keyboard() {
            log::warn!("Failed to release keyboard: {}", e);
        }
        if let Err(e) = self.classifier.release_interception(&mut self.session) {
            log::warn!("Failed to release touch grab: {}", e);
        }
        self.session.close();
        // Closing the connection drops any grab the ungrab above missed.
        self.classifier.reset_interception();
    }

    /// Current loop state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Whether touch input is currently suppressed.
    pub fn is_intercepting(&self) -> bool {
        self.classifier.is_intercepting()
    }

    /// The underlying session.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Mutable access to the underlying session.
    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    fn page(&mut self, direction: Direction) {
        match self.emitter.emit(&mut self.session, direction) {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => log::warn!("Failed to send mouse event: {}", e),
            Err(e) => {
                log::error!("Failed to send mouse event: {}", e);
                self.stop();
            }
        }
    }
}

impl<S: InputSession> Drop for Hook<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Open the platform session and filter input until the exit gesture.
pub fn run(config: &Config) -> Result<()> {
    platform::run_filter(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GestureScheme;
    use crate::error::Error;
    use crate::keycode::XK_HOME;
    use crate::session::mock::{MockSession, SessionCall};
    use std::time::Duration;

    fn config() -> Config {
        Config::for_scheme(GestureScheme::single())
            .with_long_press(Duration::from_millis(1000))
            .with_settle_delay(Duration::ZERO)
    }

    #[test]
    fn test_new_grabs_keyboard() {
        let hook = Hook::new(MockSession::new(600, 800), &config()).unwrap();
        assert_eq!(hook.state(), LoopState::Running);
        assert!(hook.session().is_keyboard_grabbed());
        assert!(!hook.is_intercepting());
    }

    #[test]
    fn test_keyboard_grab_failure_closes_session() {
        let mut session = MockSession::new(600, 800);
        session.fail_keyboard_grab = true;
        let result = Hook::new(session, &config());
        assert!(matches!(result, Err(Error::GrabFailed(_))));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut hook = Hook::new(MockSession::new(600, 800), &config()).unwrap();
        hook.handle_event(&Event::key_pressed(XK_HOME, 0));
        hook.handle_event(&Event::key_released(XK_HOME, 10));
        assert!(hook.is_intercepting());

        let exit = Event::pointer_released(1, 590, 10, 20);
        assert_eq!(hook.handle_event(&exit), Some(Action::Exit));
        assert_eq!(hook.handle_event(&exit), None);
        hook.stop();

        let session = hook.session();
        assert_eq!(session.count(SessionCall::UngrabKeyboard), 1);
        assert_eq!(session.count(SessionCall::UngrabTouch), 1);
        assert_eq!(session.count(SessionCall::Close), 1);
        assert_eq!(session.keyboard_releases, 1);
        assert_eq!(session.touch_releases, 1);
        assert!(!hook.is_intercepting());
    }

    #[test]
    fn test_emit_failure_keeps_running() {
        let mut session = MockSession::new(600, 800);
        session.fail_send = true;
        let mut hook = Hook::new(session, &config()).unwrap();
        hook.handle_event(&Event::key_pressed(XK_HOME, 0));
        hook.handle_event(&Event::key_released(XK_HOME, 10));
        hook.handle_event(&Event::key_pressed(XK_HOME, 100));
        assert_eq!(
            hook.handle_event(&Event::key_released(XK_HOME, 200)),
            Some(Action::PageForward)
        );
        assert_eq!(hook.state(), LoopState::Running);
    }

    #[test]
    fn test_closed_session_stops_loop() {
        let mut hook = Hook::new(MockSession::new(600, 800), &config()).unwrap();
        assert!(matches!(hook.run(), Err(Error::SessionClosed)));
        assert_eq!(hook.state(), LoopState::Stopped);
        assert!(!hook.session().is_keyboard_grabbed());
    }

    #[test]
    fn test_failed_touch_release_on_exit_clears_flag() {
        let mut hook = Hook::new(MockSession::new(600, 800), &config()).unwrap();
        hook.handle_event(&Event::key_pressed(XK_HOME, 0));
        hook.handle_event(&Event::key_released(XK_HOME, 10));
        assert!(hook.is_intercepting());

        hook.session_mut().fail_touch_grab = true;
        let exit = Event::pointer_released(1, 590, 10, 20);
        assert_eq!(hook.handle_event(&exit), Some(Action::Exit));

        assert_eq!(hook.state(), LoopState::Stopped);
        assert!(!hook.session().is_touch_grabbed());
        assert_eq!(hook.is_intercepting(), hook.session().is_touch_grabbed());
    }

    #[test]
    fn test_emit_on_closed_session_stops() {
        let mut hook = Hook::new(MockSession::new(600, 800), &config()).unwrap();
        hook.handle_event(&Event::key_pressed(XK_HOME, 0));
        hook.handle_event(&Event::key_released(XK_HOME, 10));

        hook.session_mut().close();
        hook.handle_event(&Event::key_pressed(XK_HOME, 100));
        assert_eq!(
            hook.handle_event(&Event::key_released(XK_HOME, 200)),
            Some(Action::PageForward)
        );
        assert_eq!(hook.state(), LoopState::Stopped);
        assert!(!hook.is_intercepting());
        assert!(hook.session().sent.is_empty());
    }
}
