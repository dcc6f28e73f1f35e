/// Severity tag attached to every message sent through a [`Logger`] sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Sink for operational messages. The catalog service calls this purely for
/// observability; a failing sink must never abort a catalog operation, so
/// `log` is infallible from the caller's point of view and implementations
/// swallow their own I/O errors.
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}
