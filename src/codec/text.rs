use std::fmt;
use std::io;

use crate::error::Result;

/// Presents a byte sink as a UTF-8 text sink.
///
/// `fmt::Write` cannot carry an `io::Error`, so the first one is stashed and
/// handed back by [`Utf8Writer::finish`].
pub(crate) struct Utf8Writer<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> Utf8Writer<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// Settles the outcome of a text write and releases the byte sink.
    ///
    /// A stashed I/O error wins over `result`, since it is the root cause of
    /// any formatting failure. The sink is flushed only when nothing failed.
    pub(crate) fn finish(mut self, result: Result<()>) -> Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err.into());
        }
        result?;
        self.inner.flush()?;
        Ok(())
    }
}

impl<W: io::Write> fmt::Write for Utf8Writer<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}
