use qanoon_core::config::GeminiConfig;
use qanoon_core::extraction::pdftotext::PdftotextExtractor;
use qanoon_core::model::ReportLanguage;
use qanoon_core::service::gemini::GeminiClient;
use std::path::PathBuf;
use std::time::Duration;

use super::{ensure_pdf_backend, read_upload};
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    out_dir: Option<PathBuf>,
    model: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<(), qanoon_core::error::QanoonError> {
    // Fail on a missing key before reading or extracting anything.
    let mut config = GeminiConfig::from_env();
    if let Some(model) = model {
        config = config.with_model(model);
    }
    if let Some(secs) = timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let client = GeminiClient::new(config)?;

    let (name, bytes) = read_upload(&input_file)?;
    let extractor = PdftotextExtractor::new();
    ensure_pdf_backend(&name, &extractor)?;

    eprintln!(
        "Analyzing '{}' with {}... This may take a moment for long documents.",
        name,
        client.model()
    );
    let analysis = qanoon_core::analyze_document(&bytes, &name, &extractor, &client)?;

    match output_format {
        "json" => output::json::print(&analysis)?,
        _ => output::text::print(&analysis),
    }

    if let Some(dir) = out_dir {
        let written = qanoon_core::export::write_reports(&analysis.report, &name, &dir)?;
        for (language, path) in [
            (ReportLanguage::English, &written.english),
            (ReportLanguage::Urdu, &written.urdu),
        ] {
            eprintln!("{language} report written to {}", path.display());
        }
    }

    Ok(())
}
