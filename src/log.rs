// src/log.rs

// Append-only run log next to the output files. Log failures are
// swallowed: logging must never break a scrape.

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

const LOG_FILE: &str = "ratemap.log";

static LOG: Mutex<()> = Mutex::new(());
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// mm:ss.mmm since the first log line of the run.
fn stamp(ms: u64) -> String {
    format!("{:02}:{:02}.{:03}", ms / 60_000, (ms % 60_000) / 1_000, ms % 1_000)
}

pub fn write_log(level: &str, msg: &str) {
    let elapsed = EPOCH.get_or_init(Instant::now).elapsed();
    let line = format!("[{}][{level}] {msg}\n", stamp(elapsed.as_millis() as u64));

    let Ok(_guard) = LOG.lock() else { return };
    let Ok(mut file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) else {
        return;
    };
    let _ = file.write_all(line.as_bytes());
}

#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_rolls_over_minutes() {
        assert_eq!(stamp(0), "00:00.000");
        assert_eq!(stamp(61_234), "01:01.234");
        assert_eq!(stamp(59_999), "00:59.999");
    }
}
