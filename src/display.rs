//! Styled narration and the sink it is rendered through.
//!
//! Game logic never prints. Every operation produces `Message` values made
//! of toned spans, and the caller hands them to a `MessageSink`. The sink is
//! fire and forget: nothing it does feeds back into the rules.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};

/// Emphasis hint attached to a span of narration. Sinks may render these as
/// colors or ignore them entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Victories and friendly towns.
    Good,
    /// Losses, warnings, rough towns.
    Bad,
    /// Neutral notices.
    Info,
    /// Gold amounts and treasure.
    Gold,
    /// Proper nouns: the hunter, items changing hands.
    Name,
}

impl Tone {
    fn color(&self) -> Option<Color> {
        match self {
            Tone::Plain => None,
            Tone::Good => Some(Color::Green),
            Tone::Bad => Some(Color::Red),
            Tone::Info => Some(Color::Blue),
            Tone::Gold => Some(Color::Yellow),
            Tone::Name => Some(Color::Magenta),
        }
    }
}

/// One styled fragment of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

/// A renderable unit of narration: spans in emission order. Newlines live
/// inside span text, so a single message can cover several display lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub spans: Vec<Span>,
}

impl Message {
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().with(text, Tone::Plain)
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self::new().with(text, tone)
    }

    /// Appends a span, builder style.
    pub fn with(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.push(text, tone);
        self
    }

    pub fn push(&mut self, text: impl Into<String>, tone: Tone) {
        self.spans.push(Span {
            text: text.into(),
            tone,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The message text with all color hints dropped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Where narration goes. Implementations render spans in emission order and
/// may interpret `clear` however suits their surface.
pub trait MessageSink {
    /// Renders one styled fragment. Text owns its newlines.
    fn emit(&mut self, text: &str, tone: Tone);

    /// Wipes the display surface before a fresh block of text.
    fn clear(&mut self);

    /// Renders a whole message followed by a newline.
    fn line(&mut self, message: &Message) {
        for span in &message.spans {
            self.emit(&span.text, span.tone);
        }
        self.emit("\n", Tone::Plain);
    }

    /// Renders unstyled text followed by a newline.
    fn plain_line(&mut self, text: &str) {
        self.emit(text, Tone::Plain);
        self.emit("\n", Tone::Plain);
    }
}

/// Terminal sink. Colors are optional so piped output stays readable.
pub struct ConsoleSink {
    colored: bool,
}

impl ConsoleSink {
    pub fn colored() -> Self {
        Self { colored: true }
    }

    pub fn plain() -> Self {
        Self { colored: false }
    }
}

impl MessageSink for ConsoleSink {
    fn emit(&mut self, text: &str, tone: Tone) {
        match tone.color() {
            Some(color) if self.colored => print!("{}", text.with(color)),
            _ => print!("{}", text),
        }
        // Prompts end mid-line, so flush every fragment.
        let _ = io::stdout().flush();
    }

    fn clear(&mut self) {
        if self.colored {
            let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
        } else {
            println!();
        }
    }
}

/// Capturing sink for tests and headless runs: keeps every span and counts
/// screen clears.
#[derive(Debug, Default)]
pub struct TranscriptSink {
    pub spans: Vec<Span>,
    pub clears: usize,
}

impl TranscriptSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, with color hints dropped.
    pub fn transcript(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl MessageSink for TranscriptSink {
    fn emit(&mut self, text: &str, tone: Tone) {
        self.spans.push(Span {
            text: text.to_string(),
            tone,
        });
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_keeps_span_order() {
        let message = Message::plain("You found a ").with("crown", Tone::Gold);
        assert_eq!(message.spans.len(), 2);
        assert_eq!(message.spans[0].tone, Tone::Plain);
        assert_eq!(message.spans[1].tone, Tone::Gold);
        assert_eq!(message.plain_text(), "You found a crown");
    }

    #[test]
    fn test_empty_message() {
        let message = Message::new();
        assert!(message.is_empty());
        assert_eq!(message.plain_text(), "");
    }

    #[test]
    fn test_transcript_sink_captures_in_order() {
        let mut sink = TranscriptSink::new();
        sink.emit("hello ", Tone::Plain);
        sink.emit("world", Tone::Good);
        sink.clear();
        sink.emit("again", Tone::Bad);

        assert_eq!(sink.transcript(), "hello worldagain");
        assert_eq!(sink.clears, 1);
        assert_eq!(sink.spans[1].tone, Tone::Good);
    }

    #[test]
    fn test_line_appends_newline() {
        let mut sink = TranscriptSink::new();
        sink.line(&Message::plain("news"));
        sink.plain_line("menu");
        assert_eq!(sink.transcript(), "news\nmenu\n");
    }
}
