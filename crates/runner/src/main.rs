pub mod config;
pub mod error;
pub mod report;

use std::env;
use std::path::PathBuf;

use crate::config::Config;
use error::Error;
use qp_core::SemimonomialIdealFactory;
use report::IdealReporter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Runner Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = match parse_args() {
        Some(path) => config::load_config_from(&path)?,
        None => config::load_config()?,
    };

    report(&config)
}

/// Optional first argument: path to a configuration file.
fn parse_args() -> Option<PathBuf> {
    env::args().nth(1).map(PathBuf::from)
}

fn report(config: &Config) -> Result<(), Error> {
    let potential = config.potential.to_potential()?;
    let reporter = IdealReporter::new(SemimonomialIdealFactory, config.report.clone());

    for line in reporter.report(&config.potential.name, &potential)? {
        println!("{}", line);
    }
    Ok(())
}
