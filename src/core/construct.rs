//! Construct kinds and emission events
//!
//! A [`Construct`] tags one regex grammar element. The typed grammar reports
//! each element's lifecycle to a serializer as a sequence of [`Event`]s.

use serde::{Deserialize, Serialize};

/// Closed set of regex grammar elements understood by the serializer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Construct {
    /// Raw text, appended verbatim
    Text,

    // Character escapes
    Bell,
    Backspace,
    Tab,
    CarriageReturn,
    VerticalTab,
    FormFeed,
    NewLine,
    Escape,
    Octal,
    Hexadecimal,
    Unicode,
    /// Backslash followed by a single character (`\.`, `\(`, ...)
    OtherChar,

    // Character classes
    CharacterGroup,
    CharacterNotGroup,
    /// `[first-last]`, takes two attributes
    CharacterRange,
    AnyChar,
    UnicodeBlock,
    UnicodeNotBlock,
    AnyLetterOrDigit,
    AnyNonLetterOrDigit,
    AnyWhiteSpace,
    AnyNonWhiteSpace,
    AnyDigit,
    AnyNonDigit,

    // Anchors
    AtBeginning,
    AtEnd,
    AtStringBeginning,
    AtStringEndOrNewline,
    AtStringEnd,
    ConsecutiveMatch,
    Boundary,
    NoBoundary,

    // Grouping constructs
    SubExpression,
    /// `(?<name>expr)`, takes two attributes
    NamedSubExpression,
    NonCapturingGroup,
    PositiveLookAhead,
    NegativeLookAhead,
    PositiveLookBehind,
    NegativeLookBehind,
    AtomicGroup,
    /// `(?flags:expr)`, takes two attributes
    OptionsGroup,
    /// `(?flags)`, applies to the rest of the enclosing group
    InlineOptions,

    // Quantifiers
    ZeroOrMore,
    OneOrMore,
    ZeroOrOne,
    MatchPreviousNTimes,
    MatchPreviousAtLeast,
    /// `{n,m}`, takes two attributes
    MatchPreviousBetween,
    LazyZeroOrMore,
    LazyOneOrMore,
    LazyZeroOrOne,
    LazyMatchPreviousNTimes,
    LazyMatchPreviousAtLeast,
    LazyMatchPreviousBetween,

    // Back-references
    BackReference,
    NamedBackReference,

    // Alternation
    And,
    Or,
    /// `(?((?=cond))then|else)`
    IfMatch,
    /// `(?(<name>)then|else)`
    IfGroupMatch,
    ElseBranch,

    // Substitution tokens
    NumberSubstitution,
    NameSubstitution,
    WholeMatchSubstitution,
    DollarSign,

    // Miscellaneous
    LineComment,
}

impl Construct {
    /// Literal appended when the construct is opened.
    ///
    /// Leaf constructs carry their whole literal here; kinds that are never
    /// opened (plain text) return the empty string.
    pub fn opening(self) -> &'static str {
        use Construct::*;
        match self {
            Text => "",

            Bell => r"\a",
            Backspace => r"\x08",
            Tab => r"\t",
            CarriageReturn => r"\r",
            VerticalTab => r"\v",
            FormFeed => r"\f",
            NewLine => r"\n",
            Escape => r"\x1B",
            Octal => r"\0",
            Hexadecimal => r"\x",
            Unicode => r"\u",
            OtherChar => r"\",

            CharacterGroup | CharacterRange => "[",
            CharacterNotGroup => "[^",
            AnyChar => ".",
            UnicodeBlock => r"\p{",
            UnicodeNotBlock => r"\P{",
            AnyLetterOrDigit => r"\w",
            AnyNonLetterOrDigit => r"\W",
            AnyWhiteSpace => r"\s",
            AnyNonWhiteSpace => r"\S",
            AnyDigit => r"\d",
            AnyNonDigit => r"\D",

            AtBeginning => "^",
            AtEnd => "$",
            AtStringBeginning => r"\A",
            AtStringEndOrNewline => r"\Z",
            AtStringEnd => r"\z",
            ConsecutiveMatch => r"\G",
            Boundary => r"\b",
            NoBoundary => r"\B",

            SubExpression => "(",
            NamedSubExpression => "(?<",
            NonCapturingGroup => "(?:",
            PositiveLookAhead => "(?=",
            NegativeLookAhead => "(?!",
            PositiveLookBehind => "(?<=",
            NegativeLookBehind => "(?<!",
            AtomicGroup => "(?>",
            OptionsGroup | InlineOptions => "(?",

            ZeroOrMore => "*",
            OneOrMore => "+",
            ZeroOrOne => "?",
            LazyZeroOrMore => "*?",
            LazyOneOrMore => "+?",
            LazyZeroOrOne => "??",
            MatchPreviousNTimes
            | MatchPreviousAtLeast
            | MatchPreviousBetween
            | LazyMatchPreviousNTimes
            | LazyMatchPreviousAtLeast
            | LazyMatchPreviousBetween => "{",

            BackReference => r"\",
            NamedBackReference => r"\k<",

            And => "&&",
            Or => "|",
            IfMatch => "(?((?=",
            IfGroupMatch => "(?(<",
            ElseBranch => "|",

            NumberSubstitution | NameSubstitution => "${",
            WholeMatchSubstitution => "${0}",
            DollarSign => "$$",

            LineComment => "#",
        }
    }

    /// Literal appended by a value-less close event.
    pub fn closing(self) -> &'static str {
        use Construct::*;
        match self {
            ElseBranch | IfMatch | IfGroupMatch | SubExpression | NonCapturingGroup => ")",
            LineComment => "\n",
            _ => "",
        }
    }

    /// Number of digits an escape-code attribute is zero-padded to, if any.
    pub fn digit_width(self) -> Option<usize> {
        match self {
            Construct::Octal | Construct::Hexadecimal => Some(2),
            Construct::Unicode => Some(4),
            _ => None,
        }
    }

    /// Whether this kind is a minimal ("lazy") quantifier
    pub fn is_lazy(self) -> bool {
        matches!(
            self,
            Construct::LazyZeroOrMore
                | Construct::LazyOneOrMore
                | Construct::LazyZeroOrOne
                | Construct::LazyMatchPreviousNTimes
                | Construct::LazyMatchPreviousAtLeast
                | Construct::LazyMatchPreviousBetween
        )
    }
}

/// One step of a construct's lifecycle, in the order the grammar produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    Open(Construct),
    Attribute(Construct, String),
    Close(Construct),
}

/// Inline matching options usable in `(?flags)` and `(?flags:expr)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineOption {
    /// `i`
    CaseInsensitive,
    /// `m`: `^`/`$` match at line boundaries
    MultiLine,
    /// `s`: `.` matches `\n`
    DotMatchesNewLine,
    /// `x`: unescaped whitespace ignored, `#` starts a comment
    IgnoreWhitespace,
    /// `U`: greedy and lazy quantifiers swap meaning
    SwapGreed,
}

impl InlineOption {
    pub fn flag(self) -> char {
        match self {
            InlineOption::CaseInsensitive => 'i',
            InlineOption::MultiLine => 'm',
            InlineOption::DotMatchesNewLine => 's',
            InlineOption::IgnoreWhitespace => 'x',
            InlineOption::SwapGreed => 'U',
        }
    }

    /// Render a list of options as the flag string of an inline group
    pub fn flags(options: &[InlineOption]) -> String {
        options.iter().map(|o| o.flag()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_constructs_carry_whole_literal() {
        assert_eq!(Construct::AnyDigit.opening(), r"\d");
        assert_eq!(Construct::Boundary.opening(), r"\b");
        assert_eq!(Construct::LazyZeroOrOne.opening(), "??");
        assert_eq!(Construct::AnyDigit.closing(), "");
    }

    #[test]
    fn test_digit_widths() {
        assert_eq!(Construct::Hexadecimal.digit_width(), Some(2));
        assert_eq!(Construct::Octal.digit_width(), Some(2));
        assert_eq!(Construct::Unicode.digit_width(), Some(4));
        assert_eq!(Construct::Text.digit_width(), None);
    }

    #[test]
    fn test_event_json_shape() {
        let event = Event::Attribute(Construct::MatchPreviousNTimes, "2".to_string());
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"attribute":["match_previous_n_times","2"]}"#);

        let parsed: Event = serde_json::from_str(r#"{"open":"any_digit"}"#).unwrap();
        assert_eq!(parsed, Event::Open(Construct::AnyDigit));
    }

    #[test]
    fn test_option_flags() {
        let flags = InlineOption::flags(&[InlineOption::CaseInsensitive, InlineOption::SwapGreed]);
        assert_eq!(flags, "iU");
    }
}
