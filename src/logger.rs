use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

pub const DEFAULT_LOG_FILE: &str = "lesson_pack.log";

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Open the log file in append mode. Logging stays silent until this succeeds.
pub fn init(path: impl AsRef<Path>) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none()
        && let Ok(file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())
    {
        *logger = Some(file);
    }
}

pub fn log(message: &str) {
    write_line("INFO", message);
}

pub fn log_error(message: &str) {
    write_line("ERROR", message);
}

fn write_line(level: &str, message: &str) {
    if let Ok(mut logger) = LOGGER.lock()
        && let Some(file) = logger.as_mut()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(file, "[{}] {:5} {}", timestamp, level, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_before_init_is_noop() {
        log("nobody is listening");
        log_error("still nobody");
    }

    #[test]
    fn test_logger_writes_after_init() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        init(&path);
        log("Test log message");
        log_error("Test error message");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("INFO  Test log message"));
        assert!(contents.contains("ERROR Test error message"));
    }
}
