//! Tracing/logging initialization.
//!
//! Native builds emit JSON lines with timestamps. In the browser every event is
//! formatted as plain text and handed to the matching `console.*` method, so
//! the devtools console is the diagnostic channel.

use ::tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// `RUST_LOG` wins when present; otherwise `default_level` is used. Safe to
/// call multiple times (subsequent calls are no-ops).
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    install(filter);
}

#[cfg(not(target_arch = "wasm32"))]
fn install(filter: EnvFilter) {
    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
fn install(filter: EnvFilter) {
    // No timer: the system clock is unavailable on wasm32-unknown-unknown.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(console::ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Browser console method an event of a given level is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Log,
    Debug,
}

impl ConsoleMethod {
    pub fn for_level(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else if level == Level::INFO {
            Self::Log
        } else {
            Self::Debug
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use ::tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    use super::ConsoleMethod;

    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and flushes it to the console on drop.
    pub struct ConsoleWriter {
        method: ConsoleMethod,
        buffer: Vec<u8>,
    }

    impl ConsoleWriter {
        fn new(level: Level) -> Self {
            Self {
                method: ConsoleMethod::for_level(level),
                buffer: Vec::new(),
            }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buffer);
            let message = JsValue::from_str(line.trim_end());
            match self.method {
                ConsoleMethod::Error => web_sys::console::error_1(&message),
                ConsoleMethod::Warn => web_sys::console::warn_1(&message),
                ConsoleMethod::Log => web_sys::console::log_1(&message),
                ConsoleMethod::Debug => web_sys::console::debug_1(&message),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::new(Level::INFO)
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter::new(*meta.level())
        }
    }
}
