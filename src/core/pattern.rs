//! Pattern facade
//!
//! A [`Pattern`] is built once from a configuration routine that drives both
//! grammars, then frozen as a pair of strings. Every operation compiles the
//! match pattern afresh, so a pattern can be shared freely between threads.

use serde::Serialize;
use thiserror::Error;

use super::engine::{Backend, CompiledRegex, EngineError, EngineType};
use super::grammar::{MatchExpression, SubstitutionExpression};
use super::replace::replace_each;
use super::scan::collect_matches;
use super::script::PatternScript;
use super::serializer::Serializer;
use crate::output::Match;

/// Errors surfaced by the facade operations
#[allow(clippy::result_large_err)]
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid pattern '{pattern}': {source}")]
    Compile {
        pattern: String,
        #[source]
        source: EngineError,
    },

    #[error("Matching '{pattern}' failed: {source}")]
    Scan {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },
}

/// Options for the match, replace and conditional-match operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Write the pattern text(s) to stderr before scanning
    pub diagnostic_print: bool,
    /// Skip zero-length matches
    pub drop_empty: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            diagnostic_print: false,
            drop_empty: true,
        }
    }
}

/// Access to both grammars while a [`Pattern`] is being configured
#[derive(Debug, Default)]
pub struct PatternBuilder {
    match_serializer: Serializer,
    substitution_serializer: Serializer,
}

impl PatternBuilder {
    /// Grammar for the match pattern
    pub fn match_regex(&mut self) -> MatchExpression<'_> {
        MatchExpression::new(&mut self.match_serializer)
    }

    /// Grammar for the substitution template
    pub fn substitution_regex(&mut self) -> SubstitutionExpression<'_> {
        SubstitutionExpression::new(&mut self.substitution_serializer)
    }

    fn freeze(self) -> Pattern {
        Pattern {
            match_pattern: self.match_serializer.into_pattern(),
            substitution_pattern: self.substitution_serializer.into_pattern(),
        }
    }
}

/// A frozen match pattern and substitution template
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pattern {
    match_pattern: String,
    substitution_pattern: String,
}

#[allow(clippy::result_large_err)]
impl Pattern {
    /// Build a pattern by running `configure` once against a fresh builder.
    ///
    /// ```
    /// use re_fluent::Pattern;
    ///
    /// let pattern = Pattern::new(|p| {
    ///     p.match_regex().any_digit().match_previous_n_times(2);
    /// });
    /// assert_eq!(pattern.pattern_text(), r"\d{2}");
    /// ```
    pub fn new<F>(configure: F) -> Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        let mut builder = PatternBuilder::default();
        configure(&mut builder);
        builder.freeze()
    }

    /// Build a throwaway pattern and return its match text, for use as a
    /// sub-expression of another pattern.
    pub fn quick_expr<F>(build: F) -> String
    where
        F: FnOnce(MatchExpression<'_>) -> MatchExpression<'_>,
    {
        Self::new(|p| {
            build(p.match_regex());
        })
        .match_pattern
    }

    /// Replay a recorded event script into a new pattern
    pub fn from_script(script: &PatternScript) -> Self {
        let mut builder = PatternBuilder::default();
        for event in &script.match_events {
            builder.match_serializer.emit(event);
        }
        for event in &script.substitution {
            builder.substitution_serializer.emit(event);
        }
        builder.freeze()
    }

    /// The match pattern
    pub fn pattern_text(&self) -> &str {
        &self.match_pattern
    }

    /// The substitution template
    pub fn substitution_text(&self) -> &str {
        &self.substitution_pattern
    }

    /// All non-empty matches, in order, using the primary backend
    pub fn matches(&self, subject: &str) -> Result<Vec<String>, PatternError> {
        self.matches_with(subject, &ScanOptions::default())
    }

    pub fn matches_with(
        &self,
        subject: &str,
        options: &ScanOptions,
    ) -> Result<Vec<String>, PatternError> {
        let (_, matches) = self.scan(subject, Backend::Primary, options)?;
        Ok(into_texts(matches))
    }

    /// The substitution template expanded once per match
    pub fn replace(&self, subject: &str) -> Result<Vec<String>, PatternError> {
        self.replace_with(subject, &ScanOptions::default())
    }

    pub fn replace_with(
        &self,
        subject: &str,
        options: &ScanOptions,
    ) -> Result<Vec<String>, PatternError> {
        let (_, matches) = self.scan(subject, Backend::Primary, options)?;
        if options.diagnostic_print {
            eprintln!("Substitution regex: {}", self.substitution_pattern);
        }
        Ok(replace_each(&matches, &self.substitution_pattern))
    }

    /// Like [`matches`](Self::matches), compiled with the backend that
    /// understands conditionals
    pub fn conditional_match(&self, subject: &str) -> Result<Vec<String>, PatternError> {
        self.conditional_match_with(subject, &ScanOptions::default())
    }

    pub fn conditional_match_with(
        &self,
        subject: &str,
        options: &ScanOptions,
    ) -> Result<Vec<String>, PatternError> {
        let (_, matches) = self.scan(subject, Backend::Conditional, options)?;
        Ok(into_texts(matches))
    }

    /// Compile with `backend` and collect full match records.
    ///
    /// Returns the engine that actually ran, which for the primary backend
    /// depends on the pattern.
    pub fn scan(
        &self,
        subject: &str,
        backend: Backend,
        options: &ScanOptions,
    ) -> Result<(EngineType, Vec<Match>), PatternError> {
        if options.diagnostic_print {
            eprintln!("Match regex: {}", self.match_pattern);
        }

        let compiled = CompiledRegex::for_backend(&self.match_pattern, backend).map_err(|e| {
            PatternError::Compile {
                pattern: self.match_pattern.clone(),
                source: e,
            }
        })?;

        let matches = collect_matches(&compiled, subject, options.drop_empty).map_err(|e| {
            PatternError::Scan {
                pattern: self.match_pattern.clone(),
                source: e,
            }
        })?;

        Ok((compiled.engine_type(), matches))
    }
}

fn into_texts(matches: Vec<Match>) -> Vec<String> {
    matches.into_iter().map(|m| m.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::code::OctalCode;
    use crate::core::construct::{Construct, Event};
    use proptest::prelude::*;

    fn two_digits() -> Pattern {
        Pattern::new(|p| {
            p.match_regex().any_digit().match_previous_n_times(2);
        })
    }

    #[test]
    fn test_build_and_match() {
        let pattern = two_digits();
        assert_eq!(pattern.pattern_text(), r"\d{2}");
        assert_eq!(pattern.substitution_text(), "");
        assert_eq!(
            pattern.matches("1, 20, 300, 4050").unwrap(),
            vec!["20", "30", "40", "50"]
        );
    }

    #[test]
    fn test_identical_routines_build_equal_patterns() {
        assert_eq!(two_digits(), two_digits());
        let other = Pattern::new(|p| {
            p.match_regex().any_digit().match_previous_n_times(3);
        });
        assert_ne!(two_digits(), other);
    }

    #[test]
    fn test_quick_expr_composes() {
        let word = Pattern::quick_expr(|e| e.any_letter_or_digit().one_or_more());
        assert_eq!(word, r"\w+");

        let pattern = Pattern::new(|p| {
            p.match_regex()
                .boundary()
                .sub_expression(&word)
                .any_white_space()
                .sub_expression(&word)
                .boundary();
        });
        assert_eq!(pattern.pattern_text(), r"\b(\w+)\s(\w+)\b");
    }

    #[test]
    fn test_replace_is_per_match() {
        let pattern = Pattern::new(|p| {
            p.match_regex()
                .sub_expression(r"\w+")
                .character_group("=")
                .sub_expression(r"\w+");
            p.substitution_regex()
                .number_substitution(2)
                .text("=")
                .number_substitution(1);
        });
        assert_eq!(pattern.substitution_text(), "${2}=${1}");
        assert_eq!(
            pattern.replace("a=1, b=2, c=3").unwrap(),
            vec!["1=a", "2=b", "3=c"]
        );
    }

    #[test]
    fn test_keep_empty_matches() {
        let pattern = Pattern::new(|p| {
            p.match_regex().any_digit().zero_or_more();
        });
        let kept = pattern.matches("5+7=12").unwrap();
        assert_eq!(kept, vec!["5", "7", "12"]);

        let options = ScanOptions {
            drop_empty: false,
            ..ScanOptions::default()
        };
        // The empty match at offset 0 follows no earlier match
        let all = pattern.matches_with("x5+7=12", &options).unwrap();
        assert_eq!(all[0], "");
        assert_eq!(
            all.iter().filter(|m| !m.is_empty()).collect::<Vec<_>>(),
            vec!["5", "7", "12"]
        );
    }

    #[test]
    fn test_octal_escape_on_both_backends() {
        let space = OctalCode::try_from(0o40).unwrap();
        let pattern = Pattern::new(|p| {
            p.match_regex()
                .any_letter_or_digit()
                .octal(space)
                .any_letter_or_digit();
        });
        let subject = "a bc d";
        assert_eq!(pattern.matches(subject).unwrap(), vec!["a b", "c d"]);
        assert_eq!(
            pattern.conditional_match(subject).unwrap(),
            vec!["a b", "c d"]
        );

        let nul = OctalCode::try_from(0).unwrap();
        let pattern = Pattern::new(|p| {
            p.match_regex().octal(nul);
        });
        assert_eq!(pattern.matches("a\0b").unwrap(), vec!["\0"]);
        assert_eq!(pattern.conditional_match("a\0b").unwrap(), vec!["\0"]);
    }

    #[test]
    fn test_octal_escape_next_to_look_ahead() {
        let space = OctalCode::try_from(0o40).unwrap();
        let pattern = Pattern::new(|p| {
            p.match_regex()
                .any_letter_or_digit()
                .octal(space)
                .positive_look_ahead("c");
        });
        let (engine, matches) = pattern
            .scan("a b c", Backend::Primary, &ScanOptions::default())
            .unwrap();
        assert_eq!(engine, EngineType::FancyRegex);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "b ");
        assert_eq!(pattern.conditional_match("a b c").unwrap(), vec!["b "]);
    }

    #[test]
    fn test_conditional_match() {
        let pattern = Pattern::new(|p| {
            p.match_regex()
                .if_match()
                .condition("A")
                .then_expression(r"A\d{2}\b")
                .else_expression(r"\b\d{3}\b");
        });
        assert_eq!(
            pattern.conditional_match("A10 C103 910").unwrap(),
            vec!["A10", "910"]
        );
    }

    #[test]
    fn test_compile_error_carries_pattern() {
        let pattern = Pattern::new(|p| {
            p.match_regex().text("(unclosed");
        });
        let err = pattern.matches("anything").unwrap_err();
        match &err {
            PatternError::Compile { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn test_scan_reports_engine() {
        let pattern = Pattern::new(|p| {
            p.match_regex().any_letter_or_digit().positive_look_ahead(r"\.");
        });
        let (engine, matches) = pattern
            .scan("is. ran.", Backend::Primary, &ScanOptions::default())
            .unwrap();
        assert_eq!(engine, EngineType::FancyRegex);
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_from_script_matches_builder() {
        let script = PatternScript {
            match_events: vec![
                Event::Open(Construct::AnyDigit),
                Event::Open(Construct::MatchPreviousNTimes),
                Event::Attribute(Construct::MatchPreviousNTimes, "2".to_string()),
            ],
            substitution: Vec::new(),
        };
        assert_eq!(Pattern::from_script(&script), two_digits());
    }

    proptest! {
        #[test]
        fn identical_routines_build_identical_pairs(n in 0u32..1000, word in "[a-z]{0,8}") {
            let routine = |p: &mut PatternBuilder| {
                p.match_regex().literal(&word).any_digit().match_previous_at_least(n);
                p.substitution_regex().text(&word).whole_match();
            };
            let first = Pattern::new(routine);
            let second = Pattern::new(routine);
            prop_assert_eq!(first.pattern_text(), format!(r"{}\d{{{},}}", word, n));
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn test_shared_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pattern>();

        let pattern = two_digits();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| pattern.matches("1, 20, 300, 4050").unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), vec!["20", "30", "40", "50"]);
            }
        });
    }
}
