// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_ENV, LOG_FILE, STORE_DIR};

#[doc(hidden)]
pub use tracing;

fn filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "pickem_paste=debug,info" } else { "pickem_paste=info" };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// GUI logging: append to `.store/debug.log`, never to the console.
pub fn init_file() -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(STORE_DIR)?;
    let path = Path::new(STORE_DIR).join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(true))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| -> Box<dyn std::error::Error> { e })
}

/// CLI logging: compact lines on stderr so stdout stays clean for output.
pub fn init_stderr(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| -> Box<dyn std::error::Error> { e })
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
