//! JSON event scripts
//!
//! A script is the recorded event stream of both grammars, replayable into a
//! [`Pattern`](super::pattern::Pattern) without writing Rust code.
//!
//! ```json
//! {
//!   "match": [{"open": "any_digit"}, {"open": "match_previous_n_times"},
//!             {"attribute": ["match_previous_n_times", "2"]}],
//!   "substitution": []
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::construct::Event;

/// Event streams for the match pattern and the substitution template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternScript {
    /// Events replayed into the match serializer
    #[serde(rename = "match", default)]
    pub match_events: Vec<Event>,
    /// Events replayed into the substitution serializer
    #[serde(default)]
    pub substitution: Vec<Event>,
}

impl PatternScript {
    /// Parse a script from its JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
