// crates/clean_daydetail/src/main.rs

use anyhow::Result;
use log::debug;
use marker_range_stripper::{strip_file, MarkerSet};

mod config;
mod logging;
mod report;

use config::{build_cli, AppConfig};

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = AppConfig::from_matches(&matches);
    logging::init_logging(config.verbose);
    debug!("{:?}", config);

    // Missing markers are not an error; I/O failures are.
    let removed = strip_file(&config.file_path, &MarkerSet::default())?;
    println!("{}", report::status_line(removed));

    Ok(())
}
