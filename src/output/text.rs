//! Human-friendly text output formatting
//!
//! Used when --format text is specified.

use super::types::*;

/// Format BuildResult as human-readable text
pub fn format_build_result(result: &BuildResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Pattern:      {}\n", result.pattern));
    if !result.substitution.is_empty() {
        output.push_str(&format!("Substitution: {}\n", result.substitution));
    }

    output
}

/// Format ScanResult as human-readable text
pub fn format_scan_result(result: &ScanResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Pattern: {}\n", result.pattern));
    output.push_str(&format!(
        "Engine:  {} ({})\n",
        result.engine,
        if result.engine == "regex" {
            "linear time"
        } else {
            "backtracking"
        }
    ));
    output.push('\n');

    if result.matched {
        for (i, m) in result.matches.iter().enumerate() {
            output.push_str(&format!(
                "Match {}: \"{}\" [{}..{}]\n",
                i + 1,
                m.text,
                m.start,
                m.end
            ));

            for cap in &m.captures {
                let name_str = cap
                    .name
                    .as_ref()
                    .map(|n| format!(" ({})", n))
                    .unwrap_or_default();
                output.push_str(&format!(
                    "  Group {}{}: \"{}\" [{}..{}]\n",
                    cap.group, name_str, cap.text, cap.start, cap.end
                ));
            }
        }
        output.push('\n');
        output.push_str(&format!(
            "{} match{} found\n",
            result.match_count,
            if result.match_count == 1 { "" } else { "es" },
        ));
    } else {
        output.push_str("No matches found\n");
    }

    output
}

/// Format ReplaceResult as human-readable text
pub fn format_replace_result(result: &ReplaceResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Pattern:      {}\n", result.pattern));
    output.push_str(&format!("Substitution: {}\n", result.substitution));
    output.push('\n');

    for r in &result.replacements {
        output.push_str(&format!(
            "\"{}\" [{}..{}] -> \"{}\"\n",
            r.matched, r.start, r.end, r.result
        ));
    }
    if !result.replacements.is_empty() {
        output.push('\n');
    }

    output.push_str(&format!(
        "{} replacement{} made\n",
        result.replacements_made,
        if result.replacements_made == 1 {
            ""
        } else {
            "s"
        }
    ));

    output
}
