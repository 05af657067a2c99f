//! Label vocabulary and block framing on top of the `pem` crate.

use pem::{EncodeConfig, LineEnding, Pem};

use crate::error::{DecodeCause, Result};

/// Canonical label written for X.509 certificates.
pub const CERTIFICATE_LABEL: &str = "CERTIFICATE";

/// Canonical label written for PKCS#10 certification requests.
pub const CSR_LABEL: &str = "CERTIFICATE REQUEST";

// RFC 7468 section 5.3 and section 7 legacy variants.
const CERTIFICATE_LABELS: &[&str] = &[CERTIFICATE_LABEL, "X509 CERTIFICATE", "X.509 CERTIFICATE"];
const CSR_LABELS: &[&str] = &[CSR_LABEL, "NEW CERTIFICATE REQUEST"];

const BEGIN_MARKER: &[u8] = b"-----BEGIN ";
const BOUNDARY_DASHES: &[u8] = b"-----";

// ASN.1 SEQUENCE, constructed.
const DER_SEQUENCE_TAG: u8 = 0x30;

/// Returns `true` if `label` names an X.509 certificate block.
pub fn is_certificate_label(label: &str) -> bool {
    CERTIFICATE_LABELS.contains(&label)
}

/// Returns `true` if `label` names a PKCS#10 request block.
pub fn is_csr_label(label: &str) -> bool {
    CSR_LABELS.contains(&label)
}

/// Convert DER‑encoded data into a PEM‑encoded string with the provided label.
pub fn der_to_pem(der: &[u8], label: &str, line_ending: LineEnding, line_wrap: usize) -> String {
    let pem = Pem::new(label, der);
    let config = EncodeConfig::new()
        .set_line_ending(line_ending)
        .set_line_wrap(line_wrap);
    pem::encode_config(&pem, config)
}

/// Parses the first PEM block in `input`, ignoring anything after it.
///
/// Text before the first line that starts with `-----BEGIN ` is skipped, as
/// RFC 7468 allows.
pub fn parse_first(input: &[u8]) -> Result<Pem> {
    if is_blank(input) {
        return Err(DecodeCause::Empty.into());
    }
    let start = begin_line_offsets(input).next().unwrap_or(0);
    Ok(pem::parse(&input[start..])?)
}

/// Parses every PEM block in `input`.
///
/// `pem::parse_many` stops silently at a block it cannot frame, so the number
/// of blocks found is checked against the number of lines starting with
/// `-----BEGIN `.
pub fn parse_all(input: &[u8]) -> Result<Vec<Pem>> {
    let Some(start) = begin_line_offsets(input).next() else {
        return Ok(Vec::new());
    };
    let blocks = pem::parse_many(&input[start..])?;
    let markers = begin_line_offsets(input).count();
    if blocks.len() != markers {
        log::debug!(
            "found {markers} BEGIN line(s) but only {} well-framed PEM block(s)",
            blocks.len()
        );
        return Err(pem::PemError::MalformedFraming.into());
    }
    Ok(blocks)
}

/// Returns `true` if some line of `input` is a complete
/// `-----BEGIN <label>-----` boundary.
pub fn has_begin_line(input: &[u8]) -> bool {
    begin_line_offsets(input).any(|start| {
        let line = input[start..]
            .split(|b| *b == b'\n')
            .next()
            .unwrap_or_default()
            .trim_ascii_end();
        line.len() > BEGIN_MARKER.len() + BOUNDARY_DASHES.len() && line.ends_with(BOUNDARY_DASHES)
    })
}

/// Returns `true` if `input` is empty or holds only ASCII whitespace.
pub fn is_blank(input: &[u8]) -> bool {
    input.iter().all(u8::is_ascii_whitespace)
}

/// Returns the slice starting at the first non-whitespace byte.
pub fn trim_leading_whitespace(input: &[u8]) -> &[u8] {
    let start = input
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(input.len());
    &input[start..]
}

/// Heuristic for raw DER input: an outer SEQUENCE tag and no BEGIN line.
pub fn looks_like_der(input: &[u8]) -> bool {
    trim_leading_whitespace(input).first() == Some(&DER_SEQUENCE_TAG)
        && begin_line_offsets(input).next().is_none()
}

// Offsets of lines starting with `-----BEGIN `. A mention inside a line of
// explanatory text is not a boundary.
fn begin_line_offsets(input: &[u8]) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0)
        .chain(
            input
                .iter()
                .enumerate()
                .filter(|(_, b)| **b == b'\n')
                .map(|(i, _)| i + 1),
        )
        .filter(move |&start| input[start..].starts_with(BEGIN_MARKER))
}
