//! untouchable: block the touchscreen and turn pages with the hardware buttons.
//!
//! Release a touch in the top-right corner of the screen to quit.

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use untouchable::cli::{self, Cli};

fn init_logging(debug: bool) {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(cli::exit_code(&e));
        }
    };
    init_logging(cli.debug);
    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::from(1);
        }
    };

    match untouchable::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(1)
        }
    }
}
