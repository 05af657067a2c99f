//! # certpem - PEM Transcoding for Certificates and CSRs
//!
//! certpem converts between PEM text and the structured X.509 objects of the
//! RustCrypto [`x509_cert`] crate. It handles single certificates, certificate
//! chains and PKCS#10 certificate signing requests. It is a serialization
//! boundary only: it does not generate keys, verify signatures or build trust
//! chains.
//!
//! ## Supported Formats
//!
//! - **PEM**: RFC 7468 blocks labeled `CERTIFICATE` or `CERTIFICATE REQUEST`.
//!   The legacy `X509 CERTIFICATE`, `X.509 CERTIFICATE` and
//!   `NEW CERTIFICATE REQUEST` labels are accepted on input.
//! - **DER**: a bare DER certificate is accepted by
//!   [`PemCodec::read_certificate`].
//!
//! ## Stream Ownership
//!
//! Every operation takes its reader or writer by value and drops it before
//! returning, whether the call succeeded or not. Decoders read the whole
//! stream and release it before parsing; encoders flush on success. Pass
//! `&mut stream` to keep using a handle afterwards.
//!
//! ## Quick Start
//!
//! ### Reading a Certificate and Writing a Chain
//!
//! ```rust,no_run
//! use std::fs::File;
//!
//! use certpem::PemCodec;
//!
//! # fn main() -> certpem::Result<()> {
//! let codec = PemCodec::default();
//! let leaf = codec.read_certificate(File::open("cert.pem")?)?;
//! let issuer = codec.read_certificate(File::open("issuer.pem")?)?;
//!
//! // `None` entries are skipped.
//! codec.write_certificates(File::create("fullchain.pem")?, [Some(&leaf), None, Some(&issuer)])?;
//!
//! let chain = codec.read_certificates(File::open("fullchain.pem")?)?;
//! assert_eq!(chain.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ### Custom Formatting
//!
//! ```rust,no_run
//! use certpem::{LineEnding, PemCodec};
//!
//! # fn main() -> certpem::Result<()> {
//! let codec = PemCodec::builder()
//!     .line_ending(LineEnding::CRLF)
//!     .line_wrap(76)
//!     .build();
//! let csr = codec.read_csr(std::fs::File::open("request.pem")?)?;
//! codec.write_csr(std::io::stdout(), &csr)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use certpem::{CertPemError, PemCodec};
//!
//! match PemCodec::default().read_csr("".as_bytes()) {
//!     Ok(_) => println!("CSR read"),
//!     Err(CertPemError::FormatMismatch(msg)) => println!("Wrong object: {}", msg),
//!     Err(CertPemError::DecodingError(cause)) => println!("Bad input: {}", cause),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! Callers that want a single I/O-class failure can convert any
//! [`CertPemError`] into [`std::io::Error`].
//!
//! ## Module Organization
//!
//! - [`codec`]: the [`PemCodec`] and its read/write operations
//! - [`error`]: error types
//! - [`pem_utils`]: label vocabulary and low-level PEM framing

pub mod codec;
pub mod error;
pub mod pem_utils;

pub use codec::PemCodec;
pub use error::{CertPemError, DecodeCause, Result};
pub use pem::LineEnding;
pub use x509_cert::Certificate;
pub use x509_cert::request::CertReq;
