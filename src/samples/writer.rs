use std::io::{BufWriter, Write};

use crate::errors::FilterError;

/// Writes filtered samples as text, one fixed-point value per line.
pub struct SampleWriter<W: Write> {
    writer: BufWriter<W>,
    written: usize,
}

impl<W: Write> SampleWriter<W> {
    pub fn new(writer: W) -> Self {
        SampleWriter { writer: BufWriter::new(writer), written: 0 }
    }

    pub fn write_sample(&mut self, value: f32) -> Result<(), FilterError> {
        writeln!(self.writer, "{:.6}", value)?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes buffered output and hands back the underlying sink.
    pub fn finish(self) -> Result<W, FilterError> {
        self.writer
            .into_inner()
            .map_err(|e| FilterError::Io(e.into_error()))
    }
}
