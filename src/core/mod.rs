//! Core pattern construction and matching
//!
//! The typed grammar reports constructs to a serializer, the facade freezes the
//! resulting text and runs it on one of the regex engines.

pub mod code;
pub mod construct;
pub mod engine;
pub mod grammar;
pub mod pattern;
pub mod replace;
pub mod scan;
pub mod script;
pub mod serializer;

// Re-export commonly used types
pub use code::{BmpChar, CodeError, OctalCode};
pub use construct::{Construct, Event, InlineOption};
pub use engine::{Backend, EngineType};
pub use grammar::{MatchExpression, SubstitutionExpression};
pub use pattern::{Pattern, PatternBuilder, PatternError, ScanOptions};
pub use script::PatternScript;
pub use serializer::Serializer;
