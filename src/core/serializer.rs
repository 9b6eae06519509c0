//! Token serializer
//!
//! Single-pass, append-only transducer from [`Event`]s to regex text. The
//! grammar guarantees well-nested, correctly-counted events, so the only state
//! kept is the most recently opened construct and how many attributes it has
//! received. That is enough to pick the right literal for constructs whose
//! closing text depends on which attribute is arriving.

use super::construct::{Construct, Event};

/// Appends the literal text of a construct event stream to an owned buffer
#[derive(Debug, Default)]
pub struct Serializer {
    buffer: String,
    /// Most recently opened construct and the attributes it has received so far
    pending: Option<(Construct, u8)>,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the opening literal of `kind`
    pub fn open(&mut self, kind: Construct) {
        self.buffer.push_str(kind.opening());
        self.pending = Some((kind, 0));
    }

    /// Append an attribute value followed by the literal that closes its position
    pub fn attribute(&mut self, kind: Construct, value: &str) {
        let position = match self.pending {
            Some((open, seen)) if open == kind => seen,
            _ => 0,
        };
        if let Some((open, seen)) = self.pending.as_mut() {
            if *open == kind {
                *seen = seen.saturating_add(1);
            }
        }

        use Construct::*;
        let buf = &mut self.buffer;
        match (kind, position) {
            (Octal | Hexadecimal | Unicode, _) => {
                let width = kind.digit_width().unwrap_or(0);
                buf.push_str(&pad_digits(value, width));
            }

            (CharacterGroup | CharacterNotGroup, _) => {
                buf.push_str(value);
                buf.push(']');
            }
            (CharacterRange, 0) => buf.push_str(value),
            (CharacterRange, _) => {
                buf.push('-');
                buf.push_str(value);
                buf.push(']');
            }
            (UnicodeBlock | UnicodeNotBlock, _) => {
                buf.push_str(value);
                buf.push('}');
            }

            (NamedSubExpression, 0) | (NamedBackReference, _) => {
                buf.push_str(value);
                buf.push('>');
            }
            (
                SubExpression | NamedSubExpression | NonCapturingGroup | PositiveLookAhead
                | NegativeLookAhead | PositiveLookBehind | NegativeLookBehind | AtomicGroup
                | InlineOptions,
                _,
            ) => {
                buf.push_str(value);
                buf.push(')');
            }
            (OptionsGroup, 0) => buf.push_str(value),
            (OptionsGroup, _) => {
                buf.push(':');
                buf.push_str(value);
                buf.push(')');
            }

            (MatchPreviousNTimes | LazyMatchPreviousNTimes, _) => {
                buf.push_str(value);
                buf.push('}');
            }
            (MatchPreviousAtLeast | LazyMatchPreviousAtLeast, _) => {
                buf.push_str(value);
                buf.push_str(",}");
            }
            (MatchPreviousBetween | LazyMatchPreviousBetween, 0) => {
                buf.push_str(value);
                buf.push(',');
            }
            (MatchPreviousBetween | LazyMatchPreviousBetween, _) => {
                buf.push_str(value);
                buf.push('}');
            }

            (IfMatch, 0) => {
                buf.push_str(value);
                buf.push_str("))");
            }
            (IfGroupMatch, 0) => {
                buf.push_str(value);
                buf.push_str(">)");
            }

            (NumberSubstitution | NameSubstitution, _) => {
                buf.push_str(value);
                buf.push('}');
            }

            // Text, back-reference numbers, escaped characters, conditional
            // branches and comment bodies are appended as-is.
            _ => buf.push_str(value),
        }

        if kind.is_lazy() && closes_on_attribute(kind, position) {
            buf.push('?');
        }
    }

    /// Append the fixed closing literal of `kind`
    pub fn close(&mut self, kind: Construct) {
        self.buffer.push_str(kind.closing());
        self.pending = None;
    }

    /// Feed one event through the matching entry point
    pub fn emit(&mut self, event: &Event) {
        match event {
            Event::Open(kind) => self.open(*kind),
            Event::Attribute(kind, value) => self.attribute(*kind, value),
            Event::Close(kind) => self.close(*kind),
        }
    }

    /// Finish configuration and hand back the assembled text
    pub fn into_pattern(self) -> String {
        self.buffer
    }
}

/// Whether the attribute at `position` is the one that writes the closing brace
fn closes_on_attribute(kind: Construct, position: u8) -> bool {
    match kind {
        Construct::LazyMatchPreviousBetween => position >= 1,
        Construct::LazyMatchPreviousNTimes | Construct::LazyMatchPreviousAtLeast => true,
        _ => false,
    }
}

/// Left-pad `value` with `'0'` up to `width` characters.
///
/// Values already at or beyond `width` are returned unchanged.
pub fn pad_digits(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    let mut padded = "0".repeat(width - len);
    padded.push_str(value);
    padded
}
