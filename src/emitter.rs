//! Synthetic page-turn taps.

use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::session::{InputSession, SyntheticPointer};

/// Button used for synthetic taps.
const TAP_BUTTON: u8 = 1;

/// Page-turn direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Next page, tapped near the right edge.
    Forward,
    /// Previous page, tapped near the left edge.
    Backward,
}

/// Emits a press/release pair that looks like a finger tap to the reader app.
#[derive(Debug, Clone)]
pub struct GestureEmitter {
    screen_width: i32,
    margin: i32,
    y: i32,
    settle_delay: Duration,
}

impl GestureEmitter {
    /// Create an emitter for a screen `screen_width` pixels wide.
    pub fn new(config: &Config, screen_width: i32) -> Self {
        Self {
            screen_width,
            margin: config.page_margin,
            y: config.page_y,
            settle_delay: config.settle_delay,
        }
    }

    /// Where a tap in `direction` lands.
    pub fn coordinates(&self, direction: Direction) -> (i32, i32) {
        match direction {
            Direction::Forward => (self.screen_width - self.margin, self.y),
            Direction::Backward => (self.margin, self.y),
        }
    }

    /// Tap once in `direction`.
    ///
    /// Blocks for the settle delay between press and release. The press and
    /// release go to the innermost window under the pointer.
    pub fn emit<S: InputSession + ?Sized>(&self, session: &mut S, direction: Direction) -> Result<()> {
        let (x, y) = self.coordinates(direction);
        log::debug!("Page {:?}", direction);

        self.send(session, true, x, y)?;
        thread::sleep(self.settle_delay);
        self.send(session, false, x, y)
    }

    fn send<S: InputSession + ?Sized>(&self, session: &mut S, pressed: bool, x: i32, y: i32) -> Result<()> {
        let target = session.pointer_target()?;
        let event = SyntheticPointer {
            pressed,
            button: TAP_BUTTON,
            x,
            y,
        };
        log::debug!(
            "Sending {} {} event: {}x{} to window {:#x}",
            if pressed { "press" } else { "release" },
            TAP_BUTTON,
            x,
            y,
            target.window
        );
        let result = session.send_pointer(&target, &event);
        session.flush();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::session::mock::{MockSession, SessionCall};

    fn emitter(settle_ms: u64) -> GestureEmitter {
        let config = Config::default().with_settle_delay(Duration::from_millis(settle_ms));
        GestureEmitter::new(&config, 600)
    }

    #[test]
    fn test_coordinates() {
        let emitter = emitter(0);
        assert_eq!(emitter.coordinates(Direction::Forward), (550, 300));
        assert_eq!(emitter.coordinates(Direction::Backward), (50, 300));
    }

    #[test]
    fn test_forward_then_backward_order() {
        let emitter = emitter(10);
        let mut session = MockSession::new(600, 800);

        emitter.emit(&mut session, Direction::Forward).unwrap();
        emitter.emit(&mut session, Direction::Backward).unwrap();

        let sent: Vec<_> = session
            .sent
            .iter()
            .map(|s| (s.event.pressed, s.event.x, s.event.y))
            .collect();
        assert_eq!(
            sent,
            vec![
                (true, 550, 300),
                (false, 550, 300),
                (true, 50, 300),
                (false, 50, 300),
            ]
        );
        assert!(session.sent.iter().all(|s| s.event.button == 1));
        assert!(session.sent.iter().all(|s| s.target == session.target));

        for pair in session.sent.chunks(2) {
            assert!(pair[1].at.duration_since(pair[0].at) >= Duration::from_millis(10));
        }
    }

    #[test]
    fn test_each_event_is_flushed() {
        let emitter = emitter(0);
        let mut session = MockSession::new(600, 800);
        emitter.emit(&mut session, Direction::Forward).unwrap();
        assert_eq!(
            session.calls,
            vec![
                SessionCall::PointerTarget,
                SessionCall::SendPointer,
                SessionCall::Flush,
                SessionCall::PointerTarget,
                SessionCall::SendPointer,
                SessionCall::Flush,
            ]
        );
    }

    #[test]
    fn test_send_failure_is_reported() {
        let emitter = emitter(0);
        let mut session = MockSession::new(600, 800);
        session.fail_send = true;
        let result = emitter.emit(&mut session, Direction::Backward);
        assert!(matches!(result, Err(Error::SimulateFailed(_))));
        assert!(session.sent.is_empty());
    }
}
