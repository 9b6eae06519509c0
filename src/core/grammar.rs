//! Typed fluent grammar
//!
//! Builder states that only offer the calls legal at each point of a pattern.
//! Every method consumes the current state and reports the constructs it adds
//! to the underlying [`Serializer`]; multi-step constructs hand back an
//! intermediate state that must be completed before the expression continues.

use super::code::{BmpChar, OctalCode};
use super::construct::{Construct, InlineOption};
use super::serializer::Serializer;

/// Entry point of the match-pattern grammar
pub struct MatchExpression<'a> {
    serializer: &'a mut Serializer,
}

impl<'a> MatchExpression<'a> {
    pub(crate) fn new(serializer: &'a mut Serializer) -> Self {
        Self { serializer }
    }

    fn leaf(self, kind: Construct) -> Self {
        self.serializer.open(kind);
        self
    }

    fn with_value(self, kind: Construct, value: &str) -> Self {
        self.serializer.open(kind);
        self.serializer.attribute(kind, value);
        self
    }

    /// Append raw pattern text. Nothing is escaped or checked.
    pub fn text(self, raw: &str) -> Self {
        self.serializer.attribute(Construct::Text, raw);
        self
    }

    /// Append text that matches itself literally
    pub fn literal(self, text: &str) -> Self {
        let escaped = regex_syntax::escape(text);
        self.text(&escaped)
    }

    // Character escapes

    pub fn bell(self) -> Self {
        self.leaf(Construct::Bell)
    }

    pub fn backspace(self) -> Self {
        self.leaf(Construct::Backspace)
    }

    pub fn tab(self) -> Self {
        self.leaf(Construct::Tab)
    }

    pub fn carriage_return(self) -> Self {
        self.leaf(Construct::CarriageReturn)
    }

    pub fn vertical_tab(self) -> Self {
        self.leaf(Construct::VerticalTab)
    }

    pub fn form_feed(self) -> Self {
        self.leaf(Construct::FormFeed)
    }

    pub fn new_line(self) -> Self {
        self.leaf(Construct::NewLine)
    }

    /// The ESC control character (U+001B)
    pub fn escape(self) -> Self {
        self.leaf(Construct::Escape)
    }

    /// Character given by its octal code, e.g. `0o40` for a space
    pub fn octal(self, code: OctalCode) -> Self {
        self.with_value(Construct::Octal, &format!("{:o}", code.get()))
    }

    /// Character given by its hexadecimal code, e.g. `0x20` for a space
    pub fn hexadecimal(self, code: u8) -> Self {
        self.with_value(Construct::Hexadecimal, &format!("{:X}", code))
    }

    /// Character given by its code point, e.g. `0x0020` for a space
    pub fn unicode(self, code: BmpChar) -> Self {
        self.with_value(Construct::Unicode, &format!("{:X}", code.get()))
    }

    /// Backslash-escape a single character, typically a metacharacter
    pub fn other_char(self, c: char) -> Self {
        self.with_value(Construct::OtherChar, c.encode_utf8(&mut [0; 4]))
    }

    // Character classes

    /// `[chars]`
    pub fn character_group(self, chars: &str) -> Self {
        self.with_value(Construct::CharacterGroup, chars)
    }

    /// `[^chars]`
    pub fn character_not_group(self, chars: &str) -> Self {
        self.with_value(Construct::CharacterNotGroup, chars)
    }

    /// `[first-last]`
    pub fn character_range(self) -> RangeFirst<'a> {
        self.serializer.open(Construct::CharacterRange);
        RangeFirst { expr: self }
    }

    pub fn any_char(self) -> Self {
        self.leaf(Construct::AnyChar)
    }

    /// `\p{name}`
    pub fn unicode_block(self, name: &str) -> Self {
        self.with_value(Construct::UnicodeBlock, name)
    }

    /// `\P{name}`
    pub fn unicode_not_block(self, name: &str) -> Self {
        self.with_value(Construct::UnicodeNotBlock, name)
    }

    pub fn any_letter_or_digit(self) -> Self {
        self.leaf(Construct::AnyLetterOrDigit)
    }

    pub fn any_non_letter_or_digit(self) -> Self {
        self.leaf(Construct::AnyNonLetterOrDigit)
    }

    pub fn any_white_space(self) -> Self {
        self.leaf(Construct::AnyWhiteSpace)
    }

    pub fn any_non_white_space(self) -> Self {
        self.leaf(Construct::AnyNonWhiteSpace)
    }

    pub fn any_digit(self) -> Self {
        self.leaf(Construct::AnyDigit)
    }

    pub fn any_non_digit(self) -> Self {
        self.leaf(Construct::AnyNonDigit)
    }

    // Anchors

    pub fn at_beginning(self) -> Self {
        self.leaf(Construct::AtBeginning)
    }

    pub fn at_end(self) -> Self {
        self.leaf(Construct::AtEnd)
    }

    pub fn at_string_beginning(self) -> Self {
        self.leaf(Construct::AtStringBeginning)
    }

    pub fn at_string_end_or_newline(self) -> Self {
        self.leaf(Construct::AtStringEndOrNewline)
    }

    pub fn at_string_end(self) -> Self {
        self.leaf(Construct::AtStringEnd)
    }

    /// `\G`: where the previous match ended
    pub fn consecutive_match(self) -> Self {
        self.leaf(Construct::ConsecutiveMatch)
    }

    pub fn boundary(self) -> Self {
        self.leaf(Construct::Boundary)
    }

    pub fn no_boundary(self) -> Self {
        self.leaf(Construct::NoBoundary)
    }

    // Grouping constructs

    /// `(expr)`
    pub fn sub_expression(self, expr: &str) -> Self {
        self.with_value(Construct::SubExpression, expr)
    }

    /// `(...)` whose body is built in place rather than composed from text
    pub fn sub_expression_of<F>(self, build: F) -> Self
    where
        F: FnOnce(MatchExpression<'_>) -> MatchExpression<'_>,
    {
        self.nested(Construct::SubExpression, build)
    }

    /// `(?<name>expr)`
    pub fn named_sub_expression(self) -> GroupName<'a> {
        self.serializer.open(Construct::NamedSubExpression);
        GroupName { expr: self }
    }

    /// `(?:expr)`
    pub fn non_capturing_group(self, expr: &str) -> Self {
        self.with_value(Construct::NonCapturingGroup, expr)
    }

    /// `(?:...)` whose body is built in place
    pub fn non_capturing_group_of<F>(self, build: F) -> Self
    where
        F: FnOnce(MatchExpression<'_>) -> MatchExpression<'_>,
    {
        self.nested(Construct::NonCapturingGroup, build)
    }

    pub fn positive_look_ahead(self, expr: &str) -> Self {
        self.with_value(Construct::PositiveLookAhead, expr)
    }

    pub fn negative_look_ahead(self, expr: &str) -> Self {
        self.with_value(Construct::NegativeLookAhead, expr)
    }

    pub fn positive_look_behind(self, expr: &str) -> Self {
        self.with_value(Construct::PositiveLookBehind, expr)
    }

    pub fn negative_look_behind(self, expr: &str) -> Self {
        self.with_value(Construct::NegativeLookBehind, expr)
    }

    /// `(?>expr)`: atomic group, never backtracked into
    pub fn non_backtracking(self, expr: &str) -> Self {
        self.with_value(Construct::AtomicGroup, expr)
    }

    /// `(?flags:expr)`
    pub fn expression_with_options(self, options: &[InlineOption]) -> OptionsBody<'a> {
        self.serializer.open(Construct::OptionsGroup);
        self.serializer
            .attribute(Construct::OptionsGroup, &InlineOption::flags(options));
        OptionsBody { expr: self }
    }

    /// `(?flags)`: switch options on for the rest of the enclosing group
    pub fn activate_options(self, options: &[InlineOption]) -> Self {
        self.with_value(Construct::InlineOptions, &InlineOption::flags(options))
    }

    fn nested<F>(self, kind: Construct, build: F) -> Self
    where
        F: FnOnce(MatchExpression<'_>) -> MatchExpression<'_>,
    {
        self.serializer.open(kind);
        build(MatchExpression::new(&mut *self.serializer));
        self.serializer.close(kind);
        self
    }

    // Quantifiers

    pub fn zero_or_more(self) -> Self {
        self.leaf(Construct::ZeroOrMore)
    }

    pub fn one_or_more(self) -> Self {
        self.leaf(Construct::OneOrMore)
    }

    pub fn zero_or_one(self) -> Self {
        self.leaf(Construct::ZeroOrOne)
    }

    /// `{n}`
    pub fn match_previous_n_times(self, n: u32) -> Self {
        self.with_value(Construct::MatchPreviousNTimes, &n.to_string())
    }

    /// `{n,}`
    pub fn match_previous_at_least(self, n: u32) -> Self {
        self.with_value(Construct::MatchPreviousAtLeast, &n.to_string())
    }

    /// `{n,m}`
    pub fn match_previous_between(self) -> BetweenMin<'a> {
        self.between(Construct::MatchPreviousBetween)
    }

    pub fn min_match_zero_or_more(self) -> Self {
        self.leaf(Construct::LazyZeroOrMore)
    }

    pub fn min_match_one_or_more(self) -> Self {
        self.leaf(Construct::LazyOneOrMore)
    }

    pub fn min_match_zero_or_one(self) -> Self {
        self.leaf(Construct::LazyZeroOrOne)
    }

    /// `{n}?`
    pub fn min_match_previous_n_times(self, n: u32) -> Self {
        self.with_value(Construct::LazyMatchPreviousNTimes, &n.to_string())
    }

    /// `{n,}?`
    pub fn min_match_previous_at_least(self, n: u32) -> Self {
        self.with_value(Construct::LazyMatchPreviousAtLeast, &n.to_string())
    }

    /// `{n,m}?`
    pub fn min_match_previous_between(self) -> BetweenMin<'a> {
        self.between(Construct::LazyMatchPreviousBetween)
    }

    fn between(self, kind: Construct) -> BetweenMin<'a> {
        self.serializer.open(kind);
        BetweenMin { expr: self, kind }
    }

    // Back-references

    /// `\n`
    pub fn back_reference(self, group: u32) -> Self {
        self.with_value(Construct::BackReference, &group.to_string())
    }

    /// `\k<name>`
    pub fn named_back_reference(self, name: &str) -> Self {
        self.with_value(Construct::NamedBackReference, name)
    }

    // Alternation

    /// `&&`: class intersection, used inside a character group body
    pub fn and(self) -> Self {
        self.leaf(Construct::And)
    }

    pub fn or(self) -> Self {
        self.leaf(Construct::Or)
    }

    /// `(?((?=condition))then|else)`
    pub fn if_match(self) -> Condition<'a> {
        self.serializer.open(Construct::IfMatch);
        Condition { expr: self }
    }

    /// `(?(<name>)then|else)`: branch on whether a named group took part
    pub fn if_group_match(self) -> ConditionGroup<'a> {
        self.serializer.open(Construct::IfGroupMatch);
        ConditionGroup { expr: self }
    }

    // Miscellaneous

    /// `# comment` up to the end of the line; only valid under
    /// [`InlineOption::IgnoreWhitespace`]
    pub fn line_comment(self, comment: &str) -> Self {
        self.serializer.open(Construct::LineComment);
        self.serializer.attribute(Construct::LineComment, comment);
        self.serializer.close(Construct::LineComment);
        self
    }
}

/// Awaiting the lower end of a character range
pub struct RangeFirst<'a> {
    expr: MatchExpression<'a>,
}

impl<'a> RangeFirst<'a> {
    pub fn first(self, first: &str) -> RangeLast<'a> {
        self.expr
            .serializer
            .attribute(Construct::CharacterRange, first);
        RangeLast { expr: self.expr }
    }
}

/// Awaiting the upper end of a character range
pub struct RangeLast<'a> {
    expr: MatchExpression<'a>,
}

impl<'a> RangeLast<'a> {
    pub fn last(self, last: &str) -> MatchExpression<'a> {
        self.expr
            .serializer
            .attribute(Construct::CharacterRange, last);
        self.expr
    }
}

/// Awaiting the minimum of a `{n,m}` quantifier
pub struct BetweenMin<'a> {
    expr: MatchExpression<'a>,
    kind: Construct,
}

impl<'a> BetweenMin<'a> {
    pub fn n(self, n: u32) -> BetweenMax<'a> {
        self.expr.serializer.attribute(self.kind, &n.to_string());
        BetweenMax {
            expr: self.expr,
            kind: self.kind,
        }
    }
}

/// Awaiting the maximum of a `{n,m}` quantifier
pub struct BetweenMax<'a> {
    expr: MatchExpression<'a>,
    kind: Construct,
}

impl<'a> BetweenMax<'a> {
    pub fn m(self, m: u32) -> MatchExpression<'a> {
        self.expr.serializer.attribute(self.kind, &m.to_string());
        self.expr
    }
}

/// Awaiting the name of a named group
pub struct GroupName<'a> {
    expr: MatchExpression<'a>,
}

impl<'a> GroupName<'a> {
    pub fn name(self, name: &str) -> GroupBody<'a> {
        self.expr
            .serializer
            .attribute(Construct::NamedSubExpression, name);
        GroupBody { expr: self.expr }
    }
}

/// Awaiting the body of a named group
pub struct GroupBody<'a> {
    expr: MatchExpression<'a>,
}

impl<'a> GroupBody<'a> {
    pub fn expression(self, expr: &str) -> MatchExpression<'a> {
        self.expr
            .serializer
            .attribute(Construct::NamedSubExpression, expr);
        self.expr
    }
}

/// Awaiting the body of an options group
pub struct OptionsBody<'a> {
    expr: MatchExpression<'a>,
}

impl<'a> OptionsBody<'a> {
    pub fn expression(self, expr: &str) -> MatchExpression<'a> {
        self.expr
            .serializer
            .attribute(Construct::OptionsGroup, expr);
        self.expr
    }
}

/// Awaiting the look-ahead condition of an `if_match`
pub struct Condition<'a> {
    expr: MatchExpression<'a>,
}

impl<'a> Condition<'a> {
    pub fn condition(self, condition: &str) -> Then<'a> {
        self.expr.serializer.attribute(Construct::IfMatch, condition);
        Then {
            expr: self.expr,
            kind: Construct::IfMatch,
        }
    }
}

/// Awaiting the group name of an `if_group_match`
pub struct ConditionGroup<'a> {
    expr: MatchExpression<'a>,
}

impl<'a> ConditionGroup<'a> {
    pub fn group_name(self, name: &str) -> Then<'a> {
        self.expr
            .serializer
            .attribute(Construct::IfGroupMatch, name);
        Then {
            expr: self.expr,
            kind: Construct::IfGroupMatch,
        }
    }
}

/// Awaiting the branch taken when the condition holds
pub struct Then<'a> {
    expr: MatchExpression<'a>,
    kind: Construct,
}

impl<'a> Then<'a> {
    pub fn then_expression(self, then: &str) -> Else<'a> {
        self.expr.serializer.attribute(self.kind, then);
        Else {
            expr: self.expr,
            kind: self.kind,
        }
    }
}

/// Conditional with its `then` branch written; an `else` branch is optional
pub struct Else<'a> {
    expr: MatchExpression<'a>,
    kind: Construct,
}

impl<'a> Else<'a> {
    pub fn else_expression(self, otherwise: &str) -> MatchExpression<'a> {
        let serializer = &mut *self.expr.serializer;
        serializer.open(Construct::ElseBranch);
        serializer.attribute(Construct::ElseBranch, otherwise);
        serializer.close(Construct::ElseBranch);
        self.expr
    }

    /// Close the conditional without an `else` branch
    pub fn end(self) -> MatchExpression<'a> {
        self.expr.serializer.close(self.kind);
        self.expr
    }
}

/// Entry point of the substitution-template grammar
pub struct SubstitutionExpression<'a> {
    serializer: &'a mut Serializer,
}

impl<'a> SubstitutionExpression<'a> {
    pub(crate) fn new(serializer: &'a mut Serializer) -> Self {
        Self { serializer }
    }

    /// Literal template text
    pub fn text(self, raw: &str) -> Self {
        self.serializer.attribute(Construct::Text, raw);
        self
    }

    /// Text captured by group number `group`
    pub fn number_substitution(self, group: u32) -> Self {
        self.serializer.open(Construct::NumberSubstitution);
        self.serializer
            .attribute(Construct::NumberSubstitution, &group.to_string());
        self
    }

    /// Text captured by the group called `name`
    pub fn name_substitution(self, name: &str) -> Self {
        self.serializer.open(Construct::NameSubstitution);
        self.serializer.attribute(Construct::NameSubstitution, name);
        self
    }

    /// The whole match
    pub fn whole_match(self) -> Self {
        self.serializer.open(Construct::WholeMatchSubstitution);
        self
    }

    /// A literal `$`
    pub fn dollar(self) -> Self {
        self.serializer.open(Construct::DollarSign);
        self
    }
}
