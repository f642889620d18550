use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Cloneable handle to a terminal stream.
///
/// Every block is written under one lock so concurrent uploads never
/// interleave their output.
#[derive(Clone)]
pub struct TerminalOut {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl TerminalOut {
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::from_writer(io::stderr())
    }

    /// Discards everything.
    pub fn sink() -> Self {
        Self::from_writer(io::sink())
    }

    /// Write `block` followed by a newline.
    pub fn write_block(&self, block: &str) {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = writeln!(guard, "{block}").and_then(|_| guard.flush()) {
            tracing::warn!(error = %err, "failed to write to terminal");
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// In-memory stream whose content can be read back.
    #[derive(Clone, Default)]
    pub(crate) struct Captured(pub Arc<Mutex<Vec<u8>>>);

    impl Captured {
        pub(crate) fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
