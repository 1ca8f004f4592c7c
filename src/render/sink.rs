//! The seam between the animation core and presentation.

use std::io;
use std::io::Write;

use thiserror::Error;

use super::frame::Frame;

/// Errors surfaced by presentation sinks.
#[derive(Debug, Error)]
pub enum SinkError {
    /// IO error while writing a frame.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Receives one frame per tick.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame<'_>) -> Result<(), SinkError>;
}

/// Minimal plain-text sink: token texts concatenated per line, with an
/// optional `|` marker on the cursor-eligible line. Used by tests and
/// demos; real consumers bring their own sink.
pub struct TextSink<W: Write> {
    writer: W,
    cursor_marker: bool,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            cursor_marker: true,
        }
    }

    /// Suppress the `|` cursor marker.
    pub fn without_cursor(mut self) -> Self {
        self.cursor_marker = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for TextSink<W> {
    fn present(&mut self, frame: &Frame<'_>) -> Result<(), SinkError> {
        tracing::trace!(
            lines = frame.lines.len(),
            complete = frame.complete,
            "presenting frame"
        );
        for line in &frame.lines {
            for token in &line.tokens {
                self.writer.write_all(token.text.as_bytes())?;
            }
            if self.cursor_marker && line.cursor {
                self.writer.write_all(b"|")?;
            }
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }
}
