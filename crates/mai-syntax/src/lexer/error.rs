//! Lexical diagnostics and the sinks that receive them.
//!
//! The scanner never stops on bad input. Every problem it finds is handed
//! to a [`Reporter`] and scanning carries on with the next character.

use thiserror::Error;

/// A lexical error found while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A quote was opened and the input ended before it was closed.
    #[error("Unterminated string")]
    UnterminatedString {
        /// Line at which the input ran out
        line: usize,
    },

    /// A character that starts no token.
    #[error("Unexpected character '{ch}'")]
    UnexpectedCharacter {
        /// The offending character
        ch: char,
        /// Line of the character
        line: usize,
    },
}

impl LexError {
    /// Returns the 1-based line the error was reported on.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnterminatedString { line } => *line,
            LexError::UnexpectedCharacter { line, .. } => *line,
        }
    }
}

/// A sink for lexical diagnostics.
///
/// Any `FnMut(usize, &str)` closure is a reporter and receives the line
/// and the rendered message.
pub trait Reporter {
    /// Records one diagnostic. The scanner ignores the outcome.
    fn report(&mut self, error: &LexError);
}

impl<F> Reporter for F
where
    F: FnMut(usize, &str),
{
    fn report(&mut self, error: &LexError) {
        self(error.line(), &error.to_string());
    }
}

/// Reporter that keeps every diagnostic in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Diagnostics {
    errors: Vec<LexError>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of reported diagnostics.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The reported diagnostics, oldest first.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Consumes the collector and returns the diagnostics.
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, error: &LexError) {
        self.errors.push(error.clone());
    }
}

/// Reporter that forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, error: &LexError) {
        tracing::warn!(line = error.line(), "{}", error);
    }
}
