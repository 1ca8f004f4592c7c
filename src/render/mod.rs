//! Frame assembly for a presentation sink.
//!
//! Thin composition over the core: on every tick the visible prefix is
//! split into lines, each line is tokenized from scratch, and the result is
//! packaged as a [`Frame`] together with cursor eligibility and status
//! information. Sinks and themes live here too; both are deliberately
//! minimal — real presentation belongs to the consumer.

mod frame;
mod player;
mod sink;
mod theme;

pub use frame::{Frame, FrameLine, render_frame};
pub use player::Player;
pub use sink::{FrameSink, SinkError, TextSink};
pub use theme::{Rgb, Style, Theme, styled_spans};
