//! Logger setup for applications built on this crate.
//!
//! Lines look like `[2024-01-31 23:59:59] INFO message`. The filter is read
//! from `RUST_LOG` and falls back to `info`.

use std::io::Write;

use chrono::Local;
use env_logger::{Builder, Env};
use log::SetLoggerError;

use crate::time::DEFAULT_DATE_TIME_FORMAT;

pub fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] {} {}",
            Local::now().format(DEFAULT_DATE_TIME_FORMAT),
            record.level(),
            record.args()
        )
    });
    builder
}

/// Install the logger.
///
/// # Panics
///
/// Panics if a logger was already installed; see [try_init].
pub fn init() {
    builder().init();
}

pub fn try_init() -> Result<(), SetLoggerError> {
    builder().try_init()
}
