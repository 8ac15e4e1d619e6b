use std::collections::VecDeque;
use std::io::BufRead;

use crate::errors::FilterError;

/// Pulls whitespace-separated samples out of a text stream, one at a time.
///
/// Each token is parsed as a 32-bit float. The stream is read before the
/// end-of-input check, so a trailing newline never produces an extra sample.
pub struct SampleReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: usize,
    buf: String,
    done: bool,
}

impl<R: BufRead> SampleReader<R> {
    pub fn new(reader: R) -> Self {
        SampleReader {
            reader,
            pending: VecDeque::new(),
            line: 0,
            buf: String::new(),
            done: false,
        }
    }

    /// 1-based number of the last line read.
    pub fn line(&self) -> usize {
        self.line
    }

    fn fill(&mut self) -> Result<bool, FilterError> {
        while self.pending.is_empty() {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(false);
            }
            self.line += 1;
            self.pending
                .extend(self.buf.split_whitespace().map(str::to_owned));
        }
        Ok(true)
    }
}

impl<R: BufRead> Iterator for SampleReader<R> {
    type Item = Result<f32, FilterError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.fill() {
            Ok(true) => {}
            Ok(false) => {
                self.done = true;
                return None;
            }
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        }
        let token = self.pending.pop_front()?;
        match token.parse::<f32>() {
            Ok(v) => Some(Ok(v)),
            Err(_) => {
                self.done = true;
                Some(Err(FilterError::MalformedToken { token, line: self.line }))
            }
        }
    }
}
