use thiserror::Error;

/// Failures that stop the application before or while it runs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine a cache directory for the log file")]
    NoCacheDir,

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
