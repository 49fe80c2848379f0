//! Hardware keys of the supported e-reader family, identified by keysym.

/// X keysym of the Home button (Kindle Touch).
pub const XK_HOME: u32 = 0xff50;
/// X keysym of Page Up, reported by the Kindle Voyage "dot" button.
pub const XK_PAGE_UP: u32 = 0xff55;
/// X keysym of Page Down, reported by the Kindle Voyage "line" button.
pub const XK_PAGE_DOWN: u32 = 0xff56;

/// Keys the filter knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Home button.
    Home,
    /// Page Up (backward page-press button on the Voyage).
    PageUp,
    /// Page Down (forward page-press button on the Voyage).
    PageDown,
    /// Any other key, with its raw keysym.
    Unknown(u32),
}

impl Key {
    /// Resolve a key from its keysym.
    pub fn from_keysym(keysym: u32) -> Self {
        match keysym {
            XK_HOME => Key::Home,
            XK_PAGE_UP => Key::PageUp,
            XK_PAGE_DOWN => Key::PageDown,
            other => Key::Unknown(other),
        }
    }
}
