use qanoon_core::error::QanoonError;
use qanoon_core::model::Analysis;

pub fn print(analysis: &Analysis) -> Result<(), QanoonError> {
    let json = serde_json::to_string_pretty(analysis)?;
    println!("{json}");
    Ok(())
}
