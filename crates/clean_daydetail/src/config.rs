// crates/clean_daydetail/src/config.rs

use clap::{Arg, ArgAction, ArgMatches, Command};
use legacy_markers::TARGET_FILE;
use std::path::PathBuf;

/// Runtime configuration composed once from the command line.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// File to edit, relative to the working directory.
    pub file_path: PathBuf,
    pub verbose: bool,
}

impl AppConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            file_path: PathBuf::from(TARGET_FILE),
            verbose: matches.get_flag("verbose"),
        }
    }
}

pub fn build_cli() -> Command {
    Command::new("clean_daydetail")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Removes the legacy reflection block from DayDetailModal.tsx in the current directory")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging on stderr")
                .action(ArgAction::SetTrue),
        )
}
