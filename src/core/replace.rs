//! Per-match substitution
//!
//! A substitution template is expanded separately against each match, yielding
//! one output string per match rather than a rewritten subject.

use crate::output::Match;

/// Expand `template` once for every match, in match order
pub fn replace_each(matches: &[Match], template: &str) -> Vec<String> {
    matches
        .iter()
        .map(|m| expand_replacement(template, m))
        .collect()
}

/// Expand a replacement template with the capture groups of one match.
///
/// Supports `$1`, `$12` (digits are read greedily), `${1}`, `${name}` and `$$`.
/// References to groups that did not participate expand to nothing; a `$`
/// that starts no reference is kept as-is.
pub fn expand_replacement(template: &str, found: &Match) -> String {
    let mut result = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        match chars.peek() {
            Some(d) if d.is_ascii_digit() => {
                let mut digits = String::new();
                while let Some(&d) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    digits.push(d);
                    chars.next();
                }
                if let Ok(num) = digits.parse::<usize>() {
                    result.push_str(group_text(found, num));
                }
            }
            Some(&'{') => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    // Unterminated reference, keep the text
                    result.push_str("${");
                    result.push_str(&name);
                } else if let Ok(num) = name.parse::<usize>() {
                    result.push_str(group_text(found, num));
                } else {
                    result.push_str(named_text(found, &name));
                }
            }
            Some(&'$') => {
                chars.next();
                result.push('$');
            }
            _ => result.push('$'),
        }
    }

    result
}

fn group_text(found: &Match, group: usize) -> &str {
    if group == 0 {
        return &found.text;
    }
    found
        .captures
        .iter()
        .find(|c| c.group == group)
        .map_or("", |c| c.text.as_str())
}

fn named_text<'m>(found: &'m Match, name: &str) -> &'m str {
    found
        .captures
        .iter()
        .find(|c| c.name.as_deref() == Some(name))
        .map_or("", |c| c.text.as_str())
}
