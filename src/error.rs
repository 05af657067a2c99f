//! use certpem::error::CertPemError;

use std::io;

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, CertPemError>;

/// Represents errors that can occur while transcoding PEM data.
///
/// Decoding failures always carry their lower-level cause, reachable through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum CertPemError {
    /// The underlying stream failed to read, write or flush.
    #[error("Stream error: {0}")]
    StreamError(#[from] io::Error),

    /// PEM framing, base64 body or ASN.1 structure is invalid.
    #[error("Failed to decode data: {0}")]
    DecodingError(#[source] DecodeCause),

    /// The input decoded cleanly but holds a different kind of object.
    #[error("Format mismatch: {0}")]
    FormatMismatch(String),

    /// A structured object could not be DER encoded.
    #[error("Failed to encode data: {0}")]
    EncodingError(String),

    /// Error due to invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// The lower-level reason behind a [`CertPemError::DecodingError`].
#[derive(Debug, Error)]
pub enum DecodeCause {
    /// Malformed PEM framing or base64 body.
    #[error("malformed PEM: {0}")]
    Pem(#[from] pem::PemError),

    /// The DER payload is not a valid structure of the expected type.
    #[error("invalid ASN.1 structure: {0}")]
    Der(#[from] der::Error),

    /// The first PEM block carries a label the decoder does not accept.
    #[error("unexpected PEM label \"{0}\"")]
    UnexpectedLabel(String),

    /// The stream held nothing but whitespace.
    #[error("no data to decode")]
    Empty,
}

impl From<der::Error> for CertPemError {
    /// Converts a `der::Error` into a `CertPemError`.
    fn from(err: der::Error) -> Self {
        CertPemError::DecodingError(DecodeCause::Der(err))
    }
}

impl From<pem::PemError> for CertPemError {
    fn from(err: pem::PemError) -> Self {
        CertPemError::DecodingError(DecodeCause::Pem(err))
    }
}

impl From<DecodeCause> for CertPemError {
    fn from(cause: DecodeCause) -> Self {
        CertPemError::DecodingError(cause)
    }
}

/// Collapses every failure into a single I/O-class error.
///
/// Stream failures keep their original `io::Error`; everything else becomes
/// `InvalidData` with the `CertPemError` attached as the source.
impl From<CertPemError> for io::Error {
    fn from(err: CertPemError) -> Self {
        match err {
            CertPemError::StreamError(inner) => inner,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
