//! Output channel
//!
//! `PRN` values are always recorded; when a writer is attached each value is
//! also written to it immediately as a decimal line.

use std::fmt;
use std::io::Write;

pub struct IOHandler {
    outputs: Vec<u8>,
    sink: Option<Box<dyn Write + Send>>,
}

impl IOHandler {
    /// Record outputs without writing them anywhere
    pub fn new() -> Self {
        IOHandler {
            outputs: Vec::new(),
            sink: None,
        }
    }

    /// Record outputs and stream them to `writer`
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        IOHandler {
            outputs: Vec::new(),
            sink: Some(Box::new(writer)),
        }
    }

    /// Stream to the process's standard output
    pub fn stdout() -> Self {
        Self::with_writer(std::io::stdout())
    }

    pub fn write(&mut self, value: u8) -> std::io::Result<()> {
        self.outputs.push(value);
        if let Some(sink) = self.sink.as_mut() {
            writeln!(sink, "{}", value)?;
            sink.flush()?;
        }
        Ok(())
    }

    pub fn outputs(&self) -> &[u8] {
        &self.outputs
    }

    pub fn take_outputs(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.outputs)
    }
}

impl Default for IOHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IOHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IOHandler")
            .field("outputs", &self.outputs)
            .field("streaming", &self.sink.is_some())
            .finish()
    }
}
