/*!

Console logging for the simulation crate, a thin wrapper over `log4rs`.

Logging is off until `enable_logging` (or `set_log_level`) is called. The
level can be changed at any time; repeated calls reconfigure the same global
handle.

*/
use std::sync::OnceLock;

use log::LevelFilter;
use log4rs::{
    Handle,
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
};

const APPENDER_NAME: &str = "stderr";

static LOG_HANDLE: OnceLock<Handle> = OnceLock::new();

fn build_config(level: LevelFilter) -> Config {
    let appender = ConsoleAppender::builder().target(Target::Stderr).build();
    // A single named appender with a valid root cannot fail to build.
    Config::builder()
        .appender(Appender::builder().build(APPENDER_NAME, Box::new(appender)))
        .build(Root::builder().appender(APPENDER_NAME).build(level))
        .unwrap()
}

/// Turns on console logging at the given level, installing the global logger
/// on first use.
pub fn enable_logging(level: LevelFilter) {
    let handle = LOG_HANDLE.get_or_init(|| {
        // First caller installs the logger; losing the race is impossible
        // under `OnceLock`.
        log4rs::init_config(build_config(level)).unwrap()
    });
    handle.set_config(build_config(level));
}

/// Changes (or initializes) the global log level.
pub fn set_log_level(level: LevelFilter) {
    enable_logging(level);
}

/// Silences all logging output.
pub fn disable_logging() {
    set_log_level(LevelFilter::Off);
}
