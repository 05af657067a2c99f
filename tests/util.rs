#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::io::{self, Cursor, Read, Write};
use std::rc::Rc;

use certpem::{Certificate, PemCodec};

pub const ROOT_PEM: &str = include_str!("data/root.pem");
pub const INTERMEDIATE_PEM: &str = include_str!("data/int.pem");
pub const LEAF_PEM: &str = include_str!("data/leaf.pem");
pub const LEAF_DER: &[u8] = include_bytes!("data/leaf.der");
pub const CSR_PEM: &str = include_str!("data/leaf_csr.pem");
pub const CSR_LEGACY_PEM: &str = include_str!("data/leaf_csr_legacy.pem");
pub const PUBLIC_KEY_PEM: &str = include_str!("data/leaf_pub.pem");

pub fn load(pem: &str) -> Certificate {
    PemCodec::default()
        .read_certificate(pem.as_bytes())
        .expect("fixture certificate should decode")
}

/// Leaf, intermediate and root, in the order a server presents them.
pub fn chain() -> Vec<Certificate> {
    vec![load(LEAF_PEM), load(INTERMEDIATE_PEM), load(ROOT_PEM)]
}

/// Shared counter incremented whenever a tracked stream is dropped.
#[derive(Clone, Default)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn count(&self) -> usize {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Reader over fixed bytes that records its drop, optionally failing mid-read.
pub struct TrackedReader {
    inner: Cursor<Vec<u8>>,
    fail: bool,
    drops: DropCounter,
}

impl TrackedReader {
    pub fn new(data: impl Into<Vec<u8>>, drops: &DropCounter) -> Self {
        Self {
            inner: Cursor::new(data.into()),
            fail: false,
            drops: drops.clone(),
        }
    }

    pub fn failing(drops: &DropCounter) -> Self {
        Self {
            inner: Cursor::new(Vec::new()),
            fail: true,
            drops: drops.clone(),
        }
    }
}

impl Read for TrackedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer went away"));
        }
        self.inner.read(buf)
    }
}

impl Drop for TrackedReader {
    fn drop(&mut self) {
        self.drops.bump();
    }
}

/// Writer into shared memory that records drops and flushes, and can be
/// told to fail once a byte budget is used up.
pub struct TrackedWriter {
    sink: Rc<RefCell<Vec<u8>>>,
    budget: Option<usize>,
    flushes: Rc<Cell<usize>>,
    drops: DropCounter,
}

impl TrackedWriter {
    pub fn new(drops: &DropCounter) -> Self {
        Self {
            sink: Rc::default(),
            budget: None,
            flushes: Rc::default(),
            drops: drops.clone(),
        }
    }

    pub fn failing_after(budget: usize, drops: &DropCounter) -> Self {
        Self {
            sink: Rc::default(),
            budget: Some(budget),
            flushes: Rc::default(),
            drops: drops.clone(),
        }
    }

    pub fn contents(&self) -> Rc<RefCell<Vec<u8>>> {
        Rc::clone(&self.sink)
    }

    pub fn flushes(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.flushes)
    }
}

impl Write for TrackedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut sink = self.sink.borrow_mut();
        let room = match self.budget {
            Some(budget) => budget.saturating_sub(sink.len()),
            None => usize::MAX,
        };
        if room == 0 {
            return Err(io::Error::other("disk full"));
        }
        let n = room.min(buf.len());
        sink.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes.set(self.flushes.get() + 1);
        Ok(())
    }
}

impl Drop for TrackedWriter {
    fn drop(&mut self) {
        self.drops.bump();
    }
}
