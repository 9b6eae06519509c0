//! Regex engine selection and compilation
//!
//! The primary backend chooses between `regex` (fast, linear time) and
//! `fancy-regex` (backtracking, lookaround, back-references) from the pattern
//! text. The conditional backend always uses `fancy-regex`, the only engine
//! here that understands `(?(cond)then|else)`.

use std::borrow::Cow;
use std::fmt::Write;
use std::sync::LazyLock;

use thiserror::Error;

static BACKREFERENCE_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"\\[1-9]|\\k<").expect("BUG: backreference detection pattern is invalid")
});

/// Engine types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineType {
    /// Standard regex crate (linear time guaranteed)
    Regex,
    /// Fancy-regex (supports lookaround, backreferences, conditionals)
    FancyRegex,
}

impl std::fmt::Display for EngineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineType::Regex => write!(f, "regex"),
            EngineType::FancyRegex => write!(f, "fancy-regex"),
        }
    }
}

/// Which backend a facade operation compiles its pattern with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Automatic engine selection, used by `matches` and `replace`
    #[default]
    Primary,
    /// Always fancy-regex, used by `conditional_match`
    Conditional,
}

/// Errors that can occur during engine operations
#[allow(clippy::result_large_err)]
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Fancy-regex error: {0}")]
    FancyRegexError(#[from] fancy_regex::Error),
}

/// Returns true if the pattern uses a construct only fancy-regex supports
pub fn needs_fancy(pattern: &str) -> bool {
    // regex_syntax cannot parse any of these, so detection is textual.
    const MARKERS: [&str; 8] = ["(?(", "(?=", "(?!", "(?<=", "(?<!", "(?>", r"\G", r"\Z"];

    // \1, \2, ... and \k<name>
    MARKERS.iter().any(|m| pattern.contains(m)) || BACKREFERENCE_RE.is_match(pattern)
}

/// Select the appropriate engine for a pattern
pub fn select_engine(pattern: &str) -> EngineType {
    if needs_fancy(pattern) {
        EngineType::FancyRegex
    } else {
        EngineType::Regex
    }
}

/// A compiled regex that can use either engine
pub enum CompiledRegex {
    Regex(regex::Regex),
    FancyRegex(fancy_regex::Regex),
}

#[allow(clippy::result_large_err)]
impl CompiledRegex {
    /// Compile a pattern with automatic engine selection
    pub fn new(pattern: &str) -> Result<Self, EngineError> {
        match select_engine(pattern) {
            EngineType::Regex => match try_regex_crate(pattern) {
                Ok(re) => Ok(CompiledRegex::Regex(re)),
                Err(_) => {
                    // Fall back to fancy-regex if standard regex fails
                    Ok(CompiledRegex::FancyRegex(try_fancy_regex(pattern)?))
                }
            },
            EngineType::FancyRegex => Ok(CompiledRegex::FancyRegex(try_fancy_regex(pattern)?)),
        }
    }

    /// Compile for the given facade backend
    pub fn for_backend(pattern: &str, backend: Backend) -> Result<Self, EngineError> {
        match backend {
            Backend::Primary => Self::new(pattern),
            Backend::Conditional => Ok(CompiledRegex::FancyRegex(try_fancy_regex(pattern)?)),
        }
    }

    /// Get the engine type
    pub fn engine_type(&self) -> EngineType {
        match self {
            CompiledRegex::Regex(_) => EngineType::Regex,
            CompiledRegex::FancyRegex(_) => EngineType::FancyRegex,
        }
    }
}

/// Try to compile with standard regex crate.
///
/// Octal escapes are enabled so `\0nn` reaches the engine as a character code;
/// numbered back-references never get here because detection routes them to
/// fancy-regex first.
pub fn try_regex_crate(pattern: &str) -> Result<regex::Regex, regex::Error> {
    regex::RegexBuilder::new(pattern).octal(true).build()
}

/// Compile with fancy-regex, which reads every `\digit` as a back-reference.
/// Octal escapes are handed over in hexadecimal form.
pub fn try_fancy_regex(pattern: &str) -> Result<fancy_regex::Regex, fancy_regex::Error> {
    fancy_regex::Regex::new(&octal_to_hex(pattern))
}

/// Rewrite every `\0`, `\0o` and `\0oo` escape as `\x{hh}`.
///
/// The escape is read the way the `regex` crate reads it with octal enabled:
/// `\0` plus at most two more octal digits. Escaped backslashes are skipped.
pub fn octal_to_hex(pattern: &str) -> Cow<'_, str> {
    if !pattern.contains(r"\0") {
        return Cow::Borrowed(pattern);
    }

    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => {
                let mut code = 0;
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            code = code * 8 + d;
                            chars.next();
                        }
                        None => break,
                    }
                }
                let _ = write!(out, r"\x{{{:02X}}}", code);
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    Cow::Owned(out)
}
