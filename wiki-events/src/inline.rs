//! The inline sub-parser fed with normalized text runs.
//!
//! Text content never produces structural events: an inline parser only
//! returns words, spaces, new lines and special symbols, which the converter
//! forwards to the listener in order. A parser failure drops the text run.

use crate::error::InlineParseError;
use crate::listener::Listener;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineEvent {
    Word(String),
    Space,
    NewLine,
    SpecialSymbol(char),
}

impl InlineEvent {
    pub fn emit(&self, listener: &mut dyn Listener) {
        match self {
            InlineEvent::Word(word) => listener.on_word(word),
            InlineEvent::Space => listener.on_space(),
            InlineEvent::NewLine => listener.on_new_line(),
            InlineEvent::SpecialSymbol(symbol) => listener.on_special_symbol(*symbol),
        }
    }
}

pub trait InlineParser {
    fn parse(&self, text: &str) -> Result<Vec<InlineEvent>, InlineParseError>;
}

/// Splits text into words, spaces, new lines and ASCII punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextParser;

impl InlineParser for PlainTextParser {
    fn parse(&self, text: &str) -> Result<Vec<InlineEvent>, InlineParseError> {
        let mut events = Vec::new();
        let mut word = String::new();

        for c in text.chars() {
            let event = match c {
                '\r' => continue,
                '\n' => InlineEvent::NewLine,
                ' ' => InlineEvent::Space,
                c if c.is_ascii_punctuation() => InlineEvent::SpecialSymbol(c),
                c => {
                    word.push(c);
                    continue;
                }
            };
            if !word.is_empty() {
                events.push(InlineEvent::Word(std::mem::take(&mut word)));
            }
            events.push(event);
        }
        if !word.is_empty() {
            events.push(InlineEvent::Word(word));
        }

        Ok(events)
    }
}
