use std::io::{self, Write};

/// Append-only writer the scanner emits into.
pub struct OutputSink<W: Write> {
    inner: W,
    chars_written: usize,
}

impl<W: Write> OutputSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            chars_written: 0,
        }
    }

    pub fn write_char(&mut self, ch: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.inner.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        self.chars_written += 1;
        Ok(())
    }

    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_all(s.as_bytes())?;
        self.chars_written += s.chars().count();
        Ok(())
    }

    pub fn chars_written(&self) -> usize {
        self.chars_written
    }

    /// Flush and hand the writer back.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
