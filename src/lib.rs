//! re-fluent: build regular expressions and substitution templates through a
//! typed fluent grammar instead of writing regex syntax by hand.
//!
//! ```
//! use re_fluent::Pattern;
//!
//! let pattern = Pattern::new(|p| {
//!     p.match_regex()
//!         .boundary()
//!         .sub_expression(r"\w+")
//!         .sub_expression(r"\s")
//!         .sub_expression(r"\w+")
//!         .boundary();
//!     p.substitution_regex()
//!         .number_substitution(3)
//!         .number_substitution(2)
//!         .number_substitution(1);
//! });
//! assert_eq!(pattern.replace("one two").unwrap(), vec!["two one"]);
//! ```

pub mod core;
pub mod output;

pub use crate::core::{
    Backend, BmpChar, CodeError, Construct, EngineType, Event, InlineOption, MatchExpression,
    OctalCode, Pattern, PatternBuilder, PatternError, PatternScript, ScanOptions,
    SubstitutionExpression,
};
