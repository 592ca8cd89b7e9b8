/// Errors that can occur in byte-level encoding operations.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// The stream ended before the requested byte count was read.
    #[error("unexpected end of stream (needed {needed} bytes, got {got})")]
    UnexpectedEof { needed: usize, got: usize },

    /// The sink accepted zero bytes; no further writes are possible.
    #[error("stream accepted no further bytes")]
    WriteZero,

    /// An I/O error occurred on the underlying stream.
    #[error("encoding I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EncodingError>;
