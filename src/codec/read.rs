use std::io::Read;

use der::{Decode, SliceReader};
use x509_cert::Certificate;
use x509_cert::request::CertReq;

use super::PemCodec;
use crate::error::{CertPemError, DecodeCause, Result};
use crate::pem_utils;

const NOT_A_CSR: &str = "not a PKCS10 CSR";

impl PemCodec {
    /// Reads one X.509 certificate from `reader`.
    ///
    /// The stream is read to its end and dropped before parsing starts. Only
    /// the first object is decoded; any further blocks are ignored. Accepts a
    /// `CERTIFICATE` block (or one of its legacy label variants) and, unless
    /// `accept_der` is off, a bare DER certificate.
    ///
    /// # Errors
    /// * [`CertPemError::StreamError`] if reading fails.
    /// * [`CertPemError::DecodingError`] for empty input, bad framing, a
    ///   non-certificate label or an invalid certificate structure.
    pub fn read_certificate<R: Read>(&self, reader: R) -> Result<Certificate> {
        let input = read_all(reader)?;

        if self.accept_der && pem_utils::looks_like_der(&input) {
            log::debug!("decoding certificate from {} bytes of raw DER", input.len());
            return decode_first_der(pem_utils::trim_leading_whitespace(&input));
        }

        let block = pem_utils::parse_first(&input)?;
        if !pem_utils::is_certificate_label(block.tag()) {
            return Err(DecodeCause::UnexpectedLabel(block.tag().to_string()).into());
        }
        log::debug!(
            "decoding certificate from PEM block labeled {:?} ({} bytes)",
            block.tag(),
            block.contents().len()
        );
        Ok(Certificate::from_der(block.contents())?)
    }

    /// Reads every certificate in `reader`, in stream order.
    ///
    /// Blocks with a non-certificate label are skipped. A stream without any
    /// certificate block yields an empty vector. A single malformed block
    /// fails the whole call.
    pub fn read_certificates<R: Read>(&self, reader: R) -> Result<Vec<Certificate>> {
        let input = read_all(reader)?;
        if pem_utils::is_blank(&input) {
            return Ok(Vec::new());
        }

        let certs = pem_utils::parse_all(&input)?
            .iter()
            .filter(|block| {
                let keep = pem_utils::is_certificate_label(block.tag());
                if !keep {
                    log::trace!("skipping PEM block labeled {:?}", block.tag());
                }
                keep
            })
            .map(|block| Certificate::from_der(block.contents()).map_err(CertPemError::from))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("decoded {} certificate(s)", certs.len());
        Ok(certs)
    }

    /// Reads one PKCS#10 certification request from `reader`.
    ///
    /// Only the first PEM object is considered. The stream is released before
    /// parsing, on every path.
    ///
    /// # Errors
    /// * [`CertPemError::FormatMismatch`] if the stream holds no complete
    ///   `-----BEGIN` line or the first object is not a certification request.
    /// * [`CertPemError::DecodingError`] if framing or the request structure
    ///   is invalid.
    /// * [`CertPemError::StreamError`] if reading fails.
    pub fn read_csr<R: Read>(&self, reader: R) -> Result<CertReq> {
        let input = read_all(reader)?;
        if !pem_utils::has_begin_line(&input) {
            log::debug!("no PEM object in {} bytes of input", input.len());
            return Err(CertPemError::FormatMismatch(NOT_A_CSR.to_string()));
        }

        let block = pem_utils::parse_first(&input)?;
        if !pem_utils::is_csr_label(block.tag()) {
            log::debug!("first PEM object is labeled {:?}", block.tag());
            return Err(CertPemError::FormatMismatch(NOT_A_CSR.to_string()));
        }
        Ok(CertReq::from_der(block.contents())?)
    }
}

fn read_all<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    Ok(input)
}

fn decode_first_der(input: &[u8]) -> Result<Certificate> {
    let mut reader = SliceReader::new(input)?;
    Ok(Certificate::decode(&mut reader)?)
}
