/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Failure when configuring the rolling file appender (e.g., invalid path).
    #[error("Rolling file appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// Occurs if a global tracing subscriber has already been initialized in the current process.
    #[error("Tracing subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// Filesystem failure while preparing the log directory.
    #[error("Logger I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration supplied to the logger builder.
    #[error("Invalid logger configuration: {0}")]
    InvalidConfiguration(String),
}
