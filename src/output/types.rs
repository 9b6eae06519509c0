//! Output types for re-fluent commands
//!
//! All output structures are JSON-first; the text formatter renders the same
//! data for humans.

use serde::{Deserialize, Serialize};

/// A single capture group within a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Group number (1-indexed for capturing groups)
    pub group: usize,
    /// Named group name (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Captured text
    pub text: String,
    /// Start byte position (0-indexed)
    pub start: usize,
    /// End byte position (exclusive)
    pub end: usize,
}

/// A single match result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Full matched text
    pub text: String,
    /// Start byte position (0-indexed)
    pub start: usize,
    /// End byte position (exclusive)
    pub end: usize,
    /// Participating capture groups (empty if none)
    pub captures: Vec<Capture>,
}

impl Match {
    /// Whether this is a zero-length match
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Result of `re-fluent build`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildResult {
    /// The match pattern
    pub pattern: String,
    /// The substitution template (empty if none was scripted)
    pub substitution: String,
}

/// Result of `re-fluent match` and `re-fluent conditional-match`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// The pattern that was run
    pub pattern: String,
    /// Which engine was used (regex or fancy-regex)
    pub engine: String,
    /// Length of input in bytes
    pub input_length: usize,
    /// Whether any match was found
    pub matched: bool,
    /// Number of matches found
    pub match_count: usize,
    /// All matches with positions and captures
    pub matches: Vec<Match>,
}

/// One expanded substitution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Replacement {
    /// Text of the match the template was expanded against
    pub matched: String,
    /// Start byte position of the match
    pub start: usize,
    /// End byte position of the match
    pub end: usize,
    /// Expanded template
    pub result: String,
}

/// Result of `re-fluent replace`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceResult {
    /// The match pattern
    pub pattern: String,
    /// The substitution template
    pub substitution: String,
    /// Which engine was used (regex or fancy-regex)
    pub engine: String,
    /// Number of expansions, one per match
    pub replacements_made: usize,
    /// Expansions in match order
    pub replacements: Vec<Replacement>,
}

/// Error response (JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always true for errors
    pub error: bool,
    /// Error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Offending pattern (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Suggested fix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: true,
            code: code.into(),
            message: message.into(),
            pattern: None,
            suggestion: None,
        }
    }

    /// Attach the pattern that failed
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Error codes used throughout re-fluent
pub mod error_codes {
    pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
    pub const MATCH_FAILED: &str = "MATCH_FAILED";
    pub const INVALID_SCRIPT: &str = "INVALID_SCRIPT";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
}
