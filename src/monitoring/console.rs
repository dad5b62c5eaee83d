/*!
 * Console Sink
 * Terminal presentation of scheduler events
 */

use super::events::Event;
use super::sink::EventSink;
use std::io::Write;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Output style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable lines, optionally colored
    Text { color: bool },
    /// One JSON object per line
    Json,
}

/// Renders events to a writer
///
/// Write failures are counted, not propagated.
pub struct ConsoleSink<W: Write> {
    out: W,
    format: Format,
    write_errors: usize,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout(format: Format) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, format: Format) -> Self {
        Self {
            out,
            format,
            write_errors: 0,
        }
    }

    pub fn write_errors(&self) -> usize {
        self.write_errors
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render a single event without the trailing newline
    pub fn render(&self, event: &Event) -> Result<String, serde_json::Error> {
        match self.format {
            Format::Json => serde_json::to_string(event),
            Format::Text { color } => Ok(render_text(event, color)),
        }
    }
}

fn render_text(event: &Event, color: bool) -> String {
    let paint = |code: &str, text: String| {
        if color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text
        }
    };

    match event {
        Event::Running {
            id,
            label,
            level,
            quantum,
            size_before,
            size_after,
        } => format!(
            " Process {} with pid = {} is running at level {} with a time slice of {}ms; size start = {}; size left = {}",
            label, id, level, quantum, size_before, size_after
        ),
        Event::Demoted {
            id,
            label,
            to_level,
            ..
        } => paint(
            RED,
            format!(" Process {} with pid = {} is demoted to level {}", label, id, to_level),
        ),
        Event::Retired { label, .. } => {
            paint(GREEN, format!(" ########### Process {} is finished", label))
        }
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn emit(&mut self, event: &Event) {
        let written = match self.render(event) {
            Ok(line) => writeln!(self.out, "{}", line).is_ok(),
            Err(_) => false,
        };
        if !written {
            self.write_errors += 1;
        }
    }
}
