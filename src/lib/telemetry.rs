//! Tracing setup for the browser. Events go through a `tracing-subscriber` fmt
//! layer that writes each formatted line to the devtools console. Timestamps are
//! dropped because `SystemTime` is unavailable on `wasm32-unknown-unknown`.

use tracing::level_filters::LevelFilter;

/// Parses a verbosity value: a level name or a number from 0 (error) to 4 (trace).
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    let level = level.trim();
    if let Ok(parsed) = level.parse::<u8>() {
        return match parsed {
            0 => Some(LevelFilter::ERROR),
            1 => Some(LevelFilter::WARN),
            2 => Some(LevelFilter::INFO),
            3 => Some(LevelFilter::DEBUG),
            4 => Some(LevelFilter::TRACE),
            _ => None,
        };
    }

    match level.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(level: &str) {
    let filter = parse_level(level).unwrap_or(LevelFilter::INFO);
    let builder = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .without_time();

    #[cfg(target_arch = "wasm32")]
    let builder = builder.with_writer(ConsoleWriter::default);

    if builder.try_init().is_ok() {
        tracing::debug!(%filter, "telemetry initialized");
    }
}

/// Buffers one formatted event and hands it to `console.log` when dropped.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct ConsoleWriter {
    buffer: Vec<u8>,
}

#[cfg(target_arch = "wasm32")]
impl std::io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buffer);
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line.trim_end()));
        self.buffer.clear();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = std::io::Write::flush(self);
    }
}

#[cfg(test)]
mod tests {
    use super::parse_level;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn parse_level_accepts_names_and_numbers() {
        assert_eq!(parse_level("error"), Some(LevelFilter::ERROR));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::WARN));
        assert_eq!(parse_level("Debug"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("2"), Some(LevelFilter::INFO));
        assert_eq!(parse_level("4"), Some(LevelFilter::TRACE));
    }

    #[test]
    fn parse_level_rejects_unknown_values() {
        assert_eq!(parse_level("5"), None);
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(""), None);
    }
}
