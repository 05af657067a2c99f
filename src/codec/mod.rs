mod read;
mod text;
mod write;

use bon::Builder;
use pem::LineEnding;

use crate::error::{CertPemError, Result};
use crate::pem_utils;

/// Base64 column width mandated by RFC 7468.
pub const DEFAULT_LINE_WRAP: usize = 64;

/// Stateless PEM transcoder for certificates, certificate chains and CSRs.
///
/// A `PemCodec` only carries formatting options. Every operation takes its
/// stream by value and releases it before returning, on success and on error.
/// Pass `&mut reader` or `&mut writer` to keep a handle.
///
/// # Fields
/// * `line_ending` - Line terminator used for emitted blocks.
/// * `line_wrap` - Base64 body column width, a positive multiple of 4.
/// * `accept_der` - Whether [`PemCodec::read_certificate`] accepts raw DER input.
#[derive(Clone, Debug, Builder)]
pub struct PemCodec {
    #[builder(default = LineEnding::LF)]
    pub line_ending: LineEnding,
    #[builder(default = DEFAULT_LINE_WRAP)]
    pub line_wrap: usize,
    #[builder(default = true)]
    pub accept_der: bool,
}

impl Default for PemCodec {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PemCodec {
    fn check_line_wrap(&self) -> Result<()> {
        if self.line_wrap == 0 || self.line_wrap % 4 != 0 {
            return Err(CertPemError::InvalidInput(format!(
                "line wrap must be a positive multiple of 4, got {}",
                self.line_wrap
            )));
        }
        Ok(())
    }

    fn encode_block(&self, label: &str, der: &[u8]) -> String {
        pem_utils::der_to_pem(der, label, self.line_ending, self.line_wrap)
    }
}
