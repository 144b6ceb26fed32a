// crates/clean_daydetail/src/logging.rs

use env_logger::{Builder, Env, Target};
use std::io::Write;

/// Sends log records to stderr so stdout only carries the status line.
/// `RUST_LOG` wins over the default chosen from `verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let mut builder = Builder::from_env(Env::default().filter_or("RUST_LOG", default_filter));

    builder
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        });

    // A logger may already be installed when called more than once.
    let _ = builder.try_init();
}
