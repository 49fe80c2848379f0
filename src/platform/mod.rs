//! Platform-specific implementations.

#[cfg(all(target_os = "linux", feature = "x11"))]
mod linux;
#[cfg(all(target_os = "linux", feature = "x11"))]
pub use linux::*;

// Without an X server connection there is nothing to filter.
#[cfg(not(all(target_os = "linux", feature = "x11")))]
mod stub {
    use crate::config::Config;
    use crate::error::{Error, Result};

    pub fn run_filter(_config: &Config) -> Result<()> {
        Err(Error::NotSupported(
            "untouchable needs Linux with the 'x11' feature enabled".into(),
        ))
    }
}

#[cfg(not(all(target_os = "linux", feature = "x11")))]
pub use stub::*;
