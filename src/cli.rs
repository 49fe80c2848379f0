//! Command-line interface.

use clap::{Parser, ValueEnum};
use std::time::Duration;

use crate::config::{Config, GestureScheme};
use crate::error::{Error, Result};

#[derive(Debug, Parser)]
#[command(
    name = "untouchable",
    about = "Filter all touch input and turn pages with the hardware buttons"
)]
pub struct Cli {
    /// Minimal time the button should be held to be treated as a long press
    /// [default: 1500 for single, 1000 for dual]
    #[arg(short = 't', long = "threshold", value_name = "MILLISECONDS")]
    pub threshold: Option<u64>,

    /// Log every key and pointer event
    #[arg(short, long)]
    pub debug: bool,

    /// Button layout of the device
    #[arg(short, long, value_enum, default_value_t = Scheme::Single)]
    pub scheme: Scheme,
}

/// Button layouts selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    /// Kindle Touch: the Home button arms, then short/long presses page.
    Single,
    /// Kindle Voyage: two page buttons, long presses toggle blocking.
    Dual,
}

impl Cli {
    /// Build the runtime configuration.
    ///
    /// A zero threshold would turn every press into a long press and is
    /// rejected.
    pub fn config(&self) -> Result<Config> {
        let scheme = match self.scheme {
            Scheme::Single => GestureScheme::single(),
            Scheme::Dual => GestureScheme::dual(),
        };
        let mut config = Config::for_scheme(scheme).with_debug(self.debug);
        match self.threshold {
            Some(0) => {
                return Err(Error::Configuration(
                    "long-press threshold must be positive".into(),
                ));
            }
            Some(ms) => config = config.with_long_press(Duration::from_millis(ms)),
            None => {}
        }
        Ok(config)
    }
}

/// Process exit code for a failed parse: help is a success, anything else
/// is a usage error.
pub fn exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() { 1 } else { 0 }
}
