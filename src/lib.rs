//! # untouchable
//!
//! Make an X11 e-reader touchscreen "untouchable": grab the hardware buttons,
//! optionally block all touch input, and turn pages by injecting synthetic
//! taps near the screen edges.
//!
//! ## Gesture schemes
//!
//! - **Single** (Kindle Touch): the first release of Home blocks touch input.
//!   After that a short press pages forward and a long press pages backward.
//! - **Dual** (Kindle Voyage): the page buttons turn pages. A long press on
//!   the forward button blocks touch input, a long press on the backward
//!   button unblocks it.
//!
//! A press counts as long when it is held for at least the configured
//! threshold. Releasing a touch in the top-right corner of the screen ends
//! the session and releases every grab.
//!
//! ## Architecture
//!
//! All display server access goes through the [`InputSession`] trait. The
//! [`GestureClassifier`] turns events into [`Action`]s and keeps the
//! interception flag in lockstep with the touch grab; the [`GestureEmitter`]
//! performs page turns; the [`Hook`] runs the blocking event loop.
//!
//! ```no_run
//! use untouchable::{Config, GestureScheme};
//!
//! let config = Config::for_scheme(GestureScheme::dual());
//! untouchable::run(&config).expect("failed to run filter");
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod event;
pub mod hook;
pub mod keycode;
pub mod session;

mod platform;

// Re-exports
pub use classifier::{Action, GestureClassifier};
pub use config::{Config, GestureScheme};
pub use emitter::{Direction, GestureEmitter};
pub use error::{Error, Result};
pub use event::{Event, EventType, KeyboardData, PointerData, Timestamp};
pub use hook::{Hook, LoopState, run};
pub use keycode::Key;
pub use session::{InputSession, PointerTarget, SyntheticPointer, WindowId};

#[cfg(all(target_os = "linux", feature = "x11"))]
pub use platform::X11Session;
