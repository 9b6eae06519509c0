//! CLI interface using clap
//!
//! Defines all command-line arguments and subcommands. Patterns are given as
//! JSON event scripts, either inline or from a file.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use re_fluent::core::replace::replace_each;
use re_fluent::output::json::format_json;
use re_fluent::output::text::{format_build_result, format_replace_result, format_scan_result};
use re_fluent::output::{
    error_codes, BuildResult, ErrorResponse, Replacement, ReplaceResult, ScanResult,
};
use re_fluent::{Backend, Pattern, PatternError, PatternScript, ScanOptions};

#[derive(Parser)]
#[command(name = "re-fluent")]
#[command(author, version, about = "Build regex patterns and substitution templates from event scripts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON output (default)
    Json,
    /// Human-readable text
    Text,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serialize a script into its match pattern and substitution template
    Build(ScriptArgs),

    /// Run the match pattern against input
    Match(ScanArgs),

    /// Expand the substitution template once per match
    Replace(ScanArgs),

    /// Run the match pattern with the conditional-capable engine
    ConditionalMatch(ScanArgs),
}

/// Where the event script comes from
#[derive(Args)]
pub struct ScriptArgs {
    /// Event script as inline JSON
    pub script: Option<String>,

    /// Read the event script from a JSON file
    #[arg(long, short = 's')]
    pub script_file: Option<PathBuf>,
}

/// Arguments shared by the matching commands
#[derive(Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub script: ScriptArgs,

    /// Input text (reads stdin when omitted)
    pub input: Option<String>,

    /// File to match against
    #[arg(long, short = 'F')]
    pub file: Option<PathBuf>,

    /// Keep zero-length matches
    #[arg(long)]
    pub keep_empty: bool,

    /// Print the pattern (and substitution) to stderr before matching
    #[arg(long)]
    pub print_pattern: bool,
}

impl ScanArgs {
    fn options(&self) -> ScanOptions {
        ScanOptions {
            diagnostic_print: self.print_pattern,
            drop_empty: !self.keep_empty,
        }
    }
}

/// Parse CLI arguments
pub fn parse() -> Cli {
    Cli::parse()
}

/// Handle the build command
pub fn handle_build(args: &ScriptArgs, format: OutputFormat) -> Result<String> {
    let (json, extra) = resolve_script(args, None)?;
    if let Some(extra) = extra {
        bail!("Unexpected argument '{}': build takes no input", extra);
    }
    let pattern = load_pattern(&json)?;

    let result = BuildResult {
        pattern: pattern.pattern_text().to_string(),
        substitution: pattern.substitution_text().to_string(),
    };

    match format {
        OutputFormat::Json => Ok(format_json(&result)),
        OutputFormat::Text => Ok(format_build_result(&result)),
    }
}

/// Handle the match and conditional-match commands
pub fn handle_match(args: &ScanArgs, backend: Backend, format: OutputFormat) -> Result<String> {
    let (json, input) = resolve_script(&args.script, args.input.as_deref())?;
    let pattern = load_pattern(&json)?;
    let subject = read_subject(input, args.file.as_deref(), "match")?;

    let (engine, matches) = pattern.scan(&subject, backend, &args.options())?;

    let result = ScanResult {
        pattern: pattern.pattern_text().to_string(),
        engine: engine.to_string(),
        input_length: subject.len(),
        matched: !matches.is_empty(),
        match_count: matches.len(),
        matches,
    };

    match format {
        OutputFormat::Json => Ok(format_json(&result)),
        OutputFormat::Text => Ok(format_scan_result(&result)),
    }
}

/// Handle the replace command
pub fn handle_replace(args: &ScanArgs, format: OutputFormat) -> Result<String> {
    let (json, input) = resolve_script(&args.script, args.input.as_deref())?;
    let pattern = load_pattern(&json)?;
    let subject = read_subject(input, args.file.as_deref(), "replace")?;

    let options = args.options();
    let (engine, matches) = pattern.scan(&subject, Backend::Primary, &options)?;
    if options.diagnostic_print {
        eprintln!("Substitution regex: {}", pattern.substitution_text());
    }

    let expanded = replace_each(&matches, pattern.substitution_text());
    let replacements: Vec<Replacement> = matches
        .into_iter()
        .zip(expanded)
        .map(|(m, result)| Replacement {
            matched: m.text,
            start: m.start,
            end: m.end,
            result,
        })
        .collect();

    let result = ReplaceResult {
        pattern: pattern.pattern_text().to_string(),
        substitution: pattern.substitution_text().to_string(),
        engine: engine.to_string(),
        replacements_made: replacements.len(),
        replacements,
    };

    match format {
        OutputFormat::Json => Ok(format_json(&result)),
        OutputFormat::Text => Ok(format_replace_result(&result)),
    }
}

/// Build the structured error printed on failure
pub fn error_response(err: &anyhow::Error) -> ErrorResponse {
    let message = format!("{:#}", err);

    if let Some(pattern_err) = err.downcast_ref::<PatternError>() {
        return match pattern_err {
            PatternError::Compile { pattern, .. } => {
                ErrorResponse::new(error_codes::INVALID_PATTERN, message)
                    .with_pattern(pattern.as_str())
                    .with_suggestion("Raw text fragments are inserted verbatim; check them for unbalanced groups or unsupported syntax")
            }
            PatternError::Scan { pattern, .. } => {
                ErrorResponse::new(error_codes::MATCH_FAILED, message).with_pattern(pattern.as_str())
            }
        };
    }

    if err.downcast_ref::<serde_json::Error>().is_some() {
        return ErrorResponse::new(error_codes::INVALID_SCRIPT, message).with_suggestion(
            r#"Scripts look like {"match": [{"open": "any_digit"}], "substitution": []}"#,
        );
    }

    ErrorResponse::new(error_codes::INVALID_INPUT, message)
}

/// Pick the script JSON and the input text out of the positional arguments.
///
/// With `--script-file`, the first positional is the input.
fn resolve_script(args: &ScriptArgs, input: Option<&str>) -> Result<(String, Option<String>)> {
    match (&args.script_file, &args.script) {
        (Some(path), positional) => {
            if let (Some(_), Some(extra)) = (positional, input) {
                bail!(
                    "Unexpected argument '{}': the script already comes from --script-file",
                    extra
                );
            }
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read script file {}", path.display()))?;
            let input = positional.clone().or_else(|| input.map(str::to_string));
            Ok((json, input))
        }
        (None, Some(json)) => Ok((json.clone(), input.map(str::to_string))),
        (None, None) => bail!("No script given: pass inline JSON or --script-file <FILE>"),
    }
}

fn load_pattern(json: &str) -> Result<Pattern> {
    let script = PatternScript::from_json(json).context("Invalid event script")?;
    Ok(Pattern::from_script(&script))
}

fn read_subject(input: Option<String>, file: Option<&Path>, command: &str) -> Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.display()));
    }
    if let Some(text) = input {
        return Ok(text);
    }

    // Read from stdin, but warn if it's a terminal (no pipe)
    if io::stdin().is_terminal() {
        eprintln!("re-fluent: reading from stdin (pipe data or press Ctrl-D when done)");
        eprintln!(
            "  hint: re-fluent {} '<script>' \"text\"  or  cat file | re-fluent {} '<script>'",
            command, command
        );
    }
    let mut subject = String::new();
    io::stdin()
        .read_to_string(&mut subject)
        .context("Failed to read stdin")?;
    Ok(subject)
}
