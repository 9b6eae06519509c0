//! re-fluent - typed regex builder CLI
//!
//! Serialize event scripts into regex patterns and run them.

#[cfg(feature = "cli")]
mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(feature = "cli")]
    {
        use cli::{parse, Commands};
        use re_fluent::Backend;

        let args = parse();

        // If no command, show help
        let Some(command) = args.command else {
            eprintln!("re-fluent: typed regex builder");
            eprintln!();
            eprintln!("Usage: re-fluent <COMMAND>");
            eprintln!();
            eprintln!("Commands:");
            eprintln!("  build              Serialize a script into pattern and substitution");
            eprintln!("  match              Run the match pattern against input");
            eprintln!("  replace            Expand the substitution template once per match");
            eprintln!("  conditional-match  Match with the conditional-capable engine");
            eprintln!();
            eprintln!("Options:");
            eprintln!("  -f, --format <FORMAT>  Output format [json|text] (default: json)");
            eprintln!("  -h, --help             Print help");
            eprintln!("  -V, --version          Print version");
            return ExitCode::SUCCESS;
        };

        let format = args.format;

        let result = match &command {
            Commands::Build(script) => cli::handle_build(script, format),
            Commands::Match(scan) => cli::handle_match(scan, Backend::Primary, format),
            Commands::Replace(scan) => cli::handle_replace(scan, format),
            Commands::ConditionalMatch(scan) => {
                cli::handle_match(scan, Backend::Conditional, format)
            }
        };

        match result {
            Ok(output) => {
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(e) => {
                // Output error as structured JSON
                let error = cli::error_response(&e);
                let error_json = serde_json::to_string(&error)
                    .unwrap_or_else(|_| format!(r#"{{"error":true,"message":"{}"}}"#, e));
                eprintln!("{}", error_json);
                ExitCode::FAILURE
            }
        }
    }

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("CLI feature not enabled. Build with --features cli");
        ExitCode::FAILURE
    }
}
