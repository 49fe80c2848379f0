//! Runtime configuration, fixed at startup.

use crate::keycode::Key;
use std::time::Duration;

/// Which button layout drives the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureScheme {
    /// One overloaded button. The first release arms interception; after
    /// that a short press pages forward and a long press pages backward.
    Single {
        /// The overloaded button.
        key: Key,
    },
    /// Two page buttons. A long press on `forward` enables interception,
    /// a long press on `backward` disables it; everything else pages.
    Dual {
        /// Button that pages backward and disables interception.
        backward: Key,
        /// Button that pages forward and enables interception.
        forward: Key,
    },
}

impl GestureScheme {
    /// Home button layout of the Kindle Touch.
    pub const fn single() -> Self {
        GestureScheme::Single { key: Key::Home }
    }

    /// Page button layout of the Kindle Voyage.
    pub const fn dual() -> Self {
        GestureScheme::Dual {
            backward: Key::PageUp,
            forward: Key::PageDown,
        }
    }

    /// Long-press threshold the device program shipped with for this layout.
    pub fn default_long_press(&self) -> Duration {
        match self {
            GestureScheme::Single { .. } => Duration::from_millis(1500),
            GestureScheme::Dual { .. } => Duration::from_millis(1000),
        }
    }
}

impl Default for GestureScheme {
    fn default() -> Self {
        Self::single()
    }
}

/// Filter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minimum hold time for a press to count as long.
    pub long_press: Duration,
    /// Whether debug logging was requested.
    pub debug: bool,
    /// Button layout.
    pub scheme: GestureScheme,
    /// Horizontal distance of synthetic taps from the screen edge.
    pub page_margin: i32,
    /// Vertical position of synthetic taps.
    pub page_y: i32,
    /// Pause between a synthetic press and its release.
    pub settle_delay: Duration,
    /// Size of the top-right square that ends the session when released in.
    pub exit_corner: i32,
}

impl Config {
    /// Configuration for `scheme` with that layout's default threshold.
    pub fn for_scheme(scheme: GestureScheme) -> Self {
        Self {
            long_press: scheme.default_long_press(),
            debug: false,
            scheme,
            page_margin: 50,
            page_y: 300,
            settle_delay: Duration::from_millis(10),
            exit_corner: 50,
        }
    }

    /// Override the long-press threshold.
    pub fn with_long_press(mut self, long_press: Duration) -> Self {
        self.long_press = long_press;
        self
    }

    /// Enable or disable debug logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Override the settle delay.
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_scheme(GestureScheme::default())
    }
}
