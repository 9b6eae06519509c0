//! Match collection
//!
//! Walks every non-overlapping match of a compiled pattern, left to right, and
//! records its text, byte positions and participating capture groups.

use super::engine::CompiledRegex;
use crate::output::{Capture, Match};

/// Collect all matches of `compiled` in `subject`.
///
/// Zero-length matches are skipped when `drop_empty` is set. Only fancy-regex
/// can fail here (backtrack limit); the `regex` engine never does.
pub fn collect_matches(
    compiled: &CompiledRegex,
    subject: &str,
    drop_empty: bool,
) -> Result<Vec<Match>, fancy_regex::Error> {
    let mut matches = Vec::new();

    match compiled {
        CompiledRegex::Regex(re) => {
            let names: Vec<Option<&str>> = re.capture_names().collect();
            for caps in re.captures_iter(subject) {
                let found = build_match(&names, caps.len(), |i| {
                    caps.get(i).map(|c| (c.as_str(), c.start(), c.end()))
                });
                if let Some(m) = found {
                    if !(drop_empty && m.is_empty()) {
                        matches.push(m);
                    }
                }
            }
        }

        CompiledRegex::FancyRegex(re) => {
            let names: Vec<Option<&str>> = re.capture_names().collect();
            for caps in re.captures_iter(subject) {
                let caps = caps?;
                let found = build_match(&names, caps.len(), |i| {
                    caps.get(i).map(|c| (c.as_str(), c.start(), c.end()))
                });
                if let Some(m) = found {
                    if !(drop_empty && m.is_empty()) {
                        matches.push(m);
                    }
                }
            }
        }
    }

    Ok(matches)
}

/// Turn one engine's capture set into a [`Match`] record.
///
/// `get(i)` yields the text and span of group `i`, or `None` when the group did
/// not participate. Group 0 is the whole match.
fn build_match<'t, G>(names: &[Option<&str>], group_count: usize, get: G) -> Option<Match>
where
    G: Fn(usize) -> Option<(&'t str, usize, usize)>,
{
    let (text, start, end) = get(0)?;

    let captures = (1..group_count)
        .filter_map(|i| {
            get(i).map(|(text, start, end)| Capture {
                group: i,
                name: names.get(i).copied().flatten().map(str::to_string),
                text: text.to_string(),
                start,
                end,
            })
        })
        .collect();

    Some(Match {
        text: text.to_string(),
        start,
        end,
        captures,
    })
}
