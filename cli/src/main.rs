use crate::clap::cli;
use crate::config::Config;
use crate::logger::init_logger;
use crate::panic::setup_panic_handler;
use autonym_core::AResult;
use autonym_core::lookup::IsoLookup;
use autonym_core::probe::Probe;
use log::info;
use std::io::stdout;
use std::process::exit;
use std::time::Instant;

mod clap;
mod config;
mod logger;
mod panic;

fn main() -> AResult<()> {
    let args = cli().try_get_matches().unwrap_or_else(|err| {
        let _ = err.print();
        exit(err.exit_code());
    });
    let config = Config::from_matches(&args);

    if !config.color {
        colored::control::set_override(false);
    }
    init_logger(config.level, config.color)?;
    setup_panic_handler(!config.backtrace);

    let started = Instant::now();
    Probe::new(IsoLookup::new()).write_to(stdout().lock())?;

    if config.time {
        info!("finished in {:.2?}", started.elapsed());
    }

    Ok(())
}
