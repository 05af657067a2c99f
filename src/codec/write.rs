use std::fmt;
use std::io;

use der::Encode;
use x509_cert::Certificate;
use x509_cert::request::CertReq;

use super::PemCodec;
use super::text::Utf8Writer;
use crate::error::{CertPemError, Result};
use crate::pem_utils::{CERTIFICATE_LABEL, CSR_LABEL};

impl PemCodec {
    /// Writes one certificate as a PEM `CERTIFICATE` block to a byte sink.
    ///
    /// The writer is flushed on success and dropped on every path.
    pub fn write_certificate<W: io::Write>(&self, writer: W, cert: &Certificate) -> Result<()> {
        self.write_certificates(writer, [Some(cert)])
    }

    /// Writes one certificate as a PEM `CERTIFICATE` block to a text sink.
    pub fn write_certificate_text<W: fmt::Write>(
        &self,
        writer: W,
        cert: &Certificate,
    ) -> Result<()> {
        self.write_certificates_text(writer, [Some(cert)])
    }

    /// Writes certificates to a byte sink as concatenated PEM blocks, in order.
    ///
    /// `None` entries are skipped without emitting anything. An empty
    /// sequence writes nothing and succeeds. Bytes written before a failure
    /// stay written.
    ///
    /// # Example
    /// ```rust,no_run
    /// # fn demo(leaf: &certpem::Certificate, issuer: Option<&certpem::Certificate>) -> certpem::Result<()> {
    /// let file = std::fs::File::create("fullchain.pem")?;
    /// certpem::PemCodec::default().write_certificates(file, [Some(leaf), issuer])?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_certificates<'a, W, I>(&self, writer: W, certs: I) -> Result<()>
    where
        W: io::Write,
        I: IntoIterator<Item = Option<&'a Certificate>>,
    {
        let mut sink = Utf8Writer::new(writer);
        let result = self.write_certificates_text(&mut sink, certs);
        sink.finish(result)
    }

    /// Writes certificates to a text sink as concatenated PEM blocks, in order.
    ///
    /// Same semantics as [`PemCodec::write_certificates`].
    pub fn write_certificates_text<'a, W, I>(&self, mut writer: W, certs: I) -> Result<()>
    where
        W: fmt::Write,
        I: IntoIterator<Item = Option<&'a Certificate>>,
    {
        self.check_line_wrap()?;

        let present = certs.into_iter().enumerate().filter_map(|(index, cert)| {
            if cert.is_none() {
                log::trace!("skipping absent certificate at position {index}");
            }
            cert
        });

        let mut written = 0usize;
        for cert in present {
            let der = cert
                .to_der()
                .map_err(|e| CertPemError::EncodingError(e.to_string()))?;
            self.emit(&mut writer, CERTIFICATE_LABEL, &der)?;
            written += 1;
        }

        log::debug!("wrote {written} PEM certificate block(s)");
        Ok(())
    }

    /// Writes `cert` followed by `chain` as PEM blocks.
    ///
    /// `None` entries, including `cert`, are skipped. Produces exactly the
    /// bytes of `write_certificates` over `[cert, chain[0], chain[1], ..]`.
    #[deprecated(note = "download the full chain and use `write_certificates` instead")]
    pub fn write_certificate_chain<W: io::Write>(
        &self,
        writer: W,
        cert: Option<&Certificate>,
        chain: &[Option<&Certificate>],
    ) -> Result<()> {
        self.write_certificates(writer, std::iter::once(cert).chain(chain.iter().copied()))
    }

    /// Writes a certification request as a PEM `CERTIFICATE REQUEST` block.
    pub fn write_csr<W: io::Write>(&self, writer: W, csr: &CertReq) -> Result<()> {
        let mut sink = Utf8Writer::new(writer);
        let result = self.check_line_wrap().and_then(|()| {
            let der = csr
                .to_der()
                .map_err(|e| CertPemError::EncodingError(e.to_string()))?;
            self.emit(&mut sink, CSR_LABEL, &der)
        });
        if result.is_ok() {
            log::debug!("wrote PEM certificate request block");
        }
        sink.finish(result)
    }

    /// Renders certificates into a `String` of concatenated PEM blocks.
    pub fn certificates_to_pem<'a, I>(&self, certs: I) -> Result<String>
    where
        I: IntoIterator<Item = Option<&'a Certificate>>,
    {
        let mut out = String::new();
        self.write_certificates_text(&mut out, certs)?;
        Ok(out)
    }

    fn emit<W: fmt::Write>(&self, writer: &mut W, label: &str, der: &[u8]) -> Result<()> {
        writer
            .write_str(&self.encode_block(label, der))
            .map_err(|_| CertPemError::StreamError(io::Error::other("text sink rejected PEM output")))
    }
}
