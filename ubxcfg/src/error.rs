use thiserror::Error;

/// Errors of the configuration codec. These never carry partial output: on
/// error the caller's buffers are to be considered untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CfgError {
    #[error("output buffer too small")]
    BufferTooSmall,
    #[error("truncated configuration data")]
    Truncated,
    #[error("empty key-value list")]
    Empty,
    #[error("bad value string: {0:?}")]
    BadValue(String),
    #[error("value out of range: {0:?}")]
    OutOfRange(String),
    #[error("unknown constant: {0:?}")]
    UnknownConstant(String),
    #[error("bad configuration line: {0:?}")]
    BadLine(String),
}

/// Outcome of a UBX request/response exchange that did not produce the
/// expected response.
#[derive(Debug, Error)]
pub enum PollError {
    /// No matching response within the timeout, after all retries
    #[error("timeout waiting for response")]
    Timeout,
    /// The receiver answered with a matching UBX-ACK-NAK
    #[error("receiver answered UBX-ACK-NAK")]
    Nak,
    /// The abort flag was raised while waiting
    #[error("aborted")]
    Aborted,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Receiver driver errors.
#[derive(Debug, Error)]
pub enum RxError {
    #[error("bad port spec: {0:?}")]
    BadSpec(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Poll(#[from] PollError),
    #[error("{0}")]
    Response(String),
}
