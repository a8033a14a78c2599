// Debug logging module
// Provides file-based logging that can be enabled via --debug flag

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

// Global flag to track whether debug logging is enabled
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

const LOG_FILE_PATH: &str = "/tmp/pongtty-debug.log";

/// Initialize debug logging to file.
///
/// When disabled this returns immediately and no file is created; when
/// enabled the log file is truncated and a session header written.
pub fn init(enabled: bool) -> io::Result<()> {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);

    if !enabled {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_FILE_PATH)?;

    writeln!(file, "=== pongtty Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", LOG_FILE_PATH)?;
    writeln!(file, "========================================\n")?;

    Ok(())
}

/// Log a debug message to file as `[timestamp] [CATEGORY] message`.
/// No-op if debug logging is not enabled.
pub fn log(category: &str, message: &str) {
    if !DEBUG_ENABLED.load(Ordering::Relaxed) {
        return;
    }

    let timestamp = SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_PATH)
    {
        let _ = writeln!(file, "[{:013}] [{}] {}", timestamp, category, message);
    }
}
