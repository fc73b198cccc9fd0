mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use qanoon_core::error::Stage;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "qanoon",
    version,
    about = "AI legal document analyzer: summary, key clauses and risks in English and Urdu"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a legal document (.txt, .pdf, .docx) with Gemini
    Analyze {
        /// Path to the document
        input_file: PathBuf,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Also write <name>_english_report.md and <name>_urdu_report.md here
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Gemini model (overrides GEMINI_MODEL)
        #[arg(long, env = "GEMINI_MODEL")]
        model: Option<String>,

        /// Request timeout in seconds (default: HTTP client default)
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },
    /// Extract and print a document's text (without analyzing)
    Extract {
        /// Path to the document
        input_file: PathBuf,

        /// Only print the first N characters and a character count
        #[arg(long, value_name = "N")]
        preview: Option<usize>,
    },
    /// Print the prompt that would be sent for a document (dry run)
    Prompt {
        /// Path to the document
        input_file: PathBuf,
    },
}

fn main() {
    dotenvy::dotenv().ok(); // loads variables from .env if present
    logging::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input_file,
            output,
            out_dir,
            model,
            timeout,
        } => commands::analyze::run(input_file, &output, out_dir, model, timeout),
        Commands::Extract {
            input_file,
            preview,
        } => commands::extract::run(input_file, preview),
        Commands::Prompt { input_file } => commands::prompt::run(input_file),
    };

    if let Err(e) = result {
        tracing::debug!(stage = ?e.stage(), "command failed");
        eprintln!("{}: {e}", error_prefix(e.stage()));
        std::process::exit(1);
    }
}

fn error_prefix(stage: Stage) -> &'static str {
    match stage {
        Stage::Extraction => "Error reading document",
        Stage::Service => "Error during AI analysis",
        Stage::Pipeline => "Error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qanoon_core::error::QanoonError;

    #[test]
    fn prefix_follows_failure_stage() {
        assert_eq!(
            error_prefix(QanoonError::Format("bad".into()).stage()),
            "Error reading document"
        );
        assert_eq!(
            error_prefix(QanoonError::RateLimit("quota".into()).stage()),
            "Error during AI analysis"
        );
        assert_eq!(error_prefix(QanoonError::EmptyText.stage()), "Error");
    }

    #[test]
    fn analyze_accepts_timeout_flag() {
        let cli = Cli::try_parse_from(["qanoon", "analyze", "lease.pdf", "--timeout", "90"]).unwrap();
        match cli.command {
            Commands::Analyze { timeout, .. } => assert_eq!(timeout, Some(90)),
            _ => panic!("expected analyze"),
        }
    }
}
