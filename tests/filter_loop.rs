//! End-to-end runs of the event loop over a scripted session.

use std::time::Duration;

use untouchable::keycode::{XK_HOME, XK_PAGE_DOWN, XK_PAGE_UP};
use untouchable::session::mock::{MockSession, SessionCall};
use untouchable::{Config, Event, GestureScheme, Hook, InputSession, LoopState};

const WIDTH: i32 = 600;
const HEIGHT: i32 = 800;

fn config(scheme: GestureScheme) -> Config {
    Config::for_scheme(scheme)
        .with_long_press(Duration::from_millis(1000))
        .with_settle_delay(Duration::from_millis(1))
}

fn tap(keysym: u32, at: u32, held: u32) -> [Event; 2] {
    [
        Event::key_pressed(keysym, at),
        Event::key_released(keysym, at + held),
    ]
}

fn exit_at(at: u32) -> Event {
    Event::pointer_released(1, WIDTH - 10, 10, at)
}

fn sent_taps(session: &MockSession) -> Vec<(bool, i32)> {
    session
        .sent
        .iter()
        .map(|s| (s.event.pressed, s.event.x))
        .collect()
}

#[test]
fn single_scheme_session() {
    let events = [
        tap(XK_HOME, 0, 50),
        tap(XK_HOME, 1000, 200),
        tap(XK_HOME, 2000, 1600),
    ]
    .into_iter()
    .flatten()
    .chain([
        Event::pointer_pressed(1, 300, 400, 4000),
        Event::pointer_released(1, 300, 400, 4050),
        exit_at(5000),
    ]);
    let session = MockSession::new(WIDTH, HEIGHT).with_events(events);

    let mut hook = Hook::new(session, &config(GestureScheme::single())).unwrap();
    hook.run().unwrap();

    assert_eq!(hook.state(), LoopState::Stopped);
    let session = hook.session();
    assert_eq!(
        sent_taps(session),
        vec![(true, 550), (false, 550), (true, 50), (false, 50)]
    );
    assert_eq!(session.count(SessionCall::GrabTouch), 1);
    assert_eq!(session.touch_releases, 1);
    assert_eq!(session.keyboard_releases, 1);
    assert!(!session.is_keyboard_grabbed());
    assert!(!session.is_touch_grabbed());
    assert!(session.is_closed());
}

#[test]
fn dual_scheme_session() {
    let events = [
        tap(XK_PAGE_DOWN, 0, 100),
        tap(XK_PAGE_DOWN, 1000, 1500),
        tap(XK_PAGE_UP, 4000, 100),
        tap(XK_PAGE_UP, 5000, 1000),
        tap(XK_PAGE_DOWN, 8000, 100),
    ]
    .into_iter()
    .flatten()
    .chain([exit_at(9000)]);
    let session = MockSession::new(WIDTH, HEIGHT).with_events(events);

    let mut hook = Hook::new(session, &config(GestureScheme::dual())).unwrap();
    hook.run().unwrap();

    let session = hook.session();
    assert_eq!(
        sent_taps(session),
        vec![
            (true, 550),
            (false, 550),
            (true, 50),
            (false, 50),
            (true, 550),
            (false, 550),
        ]
    );
    assert_eq!(session.count(SessionCall::GrabTouch), 1);
    assert_eq!(session.count(SessionCall::UngrabTouch), 1);
    // The long backward press already released the touch grab before exit.
    assert_eq!(session.touch_releases, 1);
    assert_eq!(session.keyboard_releases, 1);
}

#[test]
fn exit_without_interception() {
    let session = MockSession::new(WIDTH, HEIGHT).with_events([exit_at(0), exit_at(10)]);

    let mut hook = Hook::new(session, &config(GestureScheme::single())).unwrap();
    hook.run().unwrap();

    let session = hook.session();
    assert!(session.sent.is_empty());
    assert_eq!(session.count(SessionCall::GrabTouch), 0);
    assert_eq!(session.count(SessionCall::UngrabKeyboard), 1);
    assert_eq!(session.count(SessionCall::Close), 1);
    // The second corner release is never read.
    assert_eq!(session.events.len(), 1);
}

#[test]
fn emit_failures_do_not_stop_the_loop() {
    let events = [tap(XK_HOME, 0, 10), tap(XK_HOME, 100, 10)]
        .into_iter()
        .flatten()
        .chain([exit_at(500)]);
    let mut session = MockSession::new(WIDTH, HEIGHT).with_events(events);
    session.fail_send = true;

    let mut hook = Hook::new(session, &config(GestureScheme::single())).unwrap();
    hook.run().unwrap();

    let session = hook.session();
    assert!(session.sent.is_empty());
    assert_eq!(session.count(SessionCall::SendPointer), 1);
    assert_eq!(session.touch_releases, 1);
    assert!(session.is_closed());
}

#[test]
fn stop_while_intercepting_releases_grabs() {
    let session = MockSession::new(WIDTH, HEIGHT);
    let mut hook = Hook::new(session, &config(GestureScheme::single())).unwrap();
    hook.handle_event(&Event::key_pressed(XK_HOME, 0));
    hook.handle_event(&Event::key_released(XK_HOME, 10));
    assert!(hook.is_intercepting());
    assert!(hook.session().is_touch_grabbed());

    hook.stop();
    assert!(!hook.session().is_touch_grabbed());
    assert!(!hook.session().is_keyboard_grabbed());
    assert_eq!(hook.state(), LoopState::Stopped);
}
