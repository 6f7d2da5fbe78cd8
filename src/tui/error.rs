use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal I/O failed")]
    Terminal(#[from] std::io::Error),

    #[error("Refresh ticker stopped unexpectedly")]
    TickerStopped,
}

/// Result type for TUI operations
pub type TuiResult<T> = Result<T, TuiError>;
