use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::QanoonError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract the text of every body-level paragraph of a .docx file, in
/// document order, each followed by a newline.
///
/// Paragraphs nested in tables, text boxes or content controls are not
/// part of the body's paragraph list and are skipped.
pub fn extract_paragraphs(bytes: &[u8]) -> Result<String, QanoonError> {
    let xml = read_document_part(bytes)?;
    let paragraphs = parse_body_paragraphs(&xml)?;
    tracing::debug!(paragraphs = paragraphs.len(), "docx paragraphs parsed");

    let mut out = String::new();
    for p in &paragraphs {
        out.push_str(p);
        out.push('\n');
    }
    Ok(out)
}

fn read_document_part(bytes: &[u8]) -> Result<String, QanoonError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| QanoonError::Format(format!("not a valid .docx archive: {e}")))?;

    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| QanoonError::Format(format!("{DOCUMENT_PART} missing from archive: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| QanoonError::Format(format!("failed to read {DOCUMENT_PART}: {e}")))?;
    Ok(xml)
}

fn parse_body_paragraphs(xml: &str) -> Result<Vec<String>, QanoonError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            QanoonError::Format(format!(
                "malformed {DOCUMENT_PART} at byte {}: {e}",
                reader.buffer_position()
            ))
        })?;

        match event {
            Event::Start(e) => {
                let name = local_name(&e);
                if name == "p" && is_body(&stack) {
                    current = Some(String::new());
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                let name = local_name(&e);
                if name == "p" && is_body(&stack) {
                    paragraphs.push(String::new());
                } else if let Some(text) = current.as_mut().filter(|_| is_body_run(&stack)) {
                    match name.as_str() {
                        "tab" | "ptab" => text.push('\t'),
                        "br" | "cr" => text.push('\n'),
                        "noBreakHyphen" => text.push('-'),
                        _ => {}
                    }
                }
            }
            Event::Text(e) => {
                if let Some(text) = current.as_mut().filter(|_| is_run_text(&stack)) {
                    let unescaped = e.unescape().map_err(|e| {
                        QanoonError::Format(format!("bad text in {DOCUMENT_PART}: {e}"))
                    })?;
                    text.push_str(&unescaped);
                }
            }
            Event::CData(e) => {
                if let Some(text) = current.as_mut().filter(|_| is_run_text(&stack)) {
                    let raw = e.into_inner();
                    let cdata = std::str::from_utf8(&raw).map_err(|e| {
                        QanoonError::Format(format!("bad CDATA in {DOCUMENT_PART}: {e}"))
                    })?;
                    text.push_str(cdata);
                }
            }
            Event::End(_) => {
                let closed = stack.pop();
                if closed.as_deref() == Some("p") && is_body(&stack) {
                    if let Some(text) = current.take() {
                        paragraphs.push(text);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(QanoonError::Format(format!(
            "{DOCUMENT_PART} ended with unclosed <{}>",
            stack.join("/")
        )));
    }

    Ok(paragraphs)
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn is_body(stack: &[String]) -> bool {
    let names: Vec<&str> = stack.iter().map(String::as_str).collect();
    names == ["document", "body"]
}

/// Inside a `w:t` of a body-level run.
fn is_run_text(stack: &[String]) -> bool {
    match stack.split_last() {
        Some((last, parents)) => last == "t" && is_body_run(parents),
        None => false,
    }
}

/// A run directly inside a body paragraph, possibly wrapped in a hyperlink.
fn is_body_run(stack: &[String]) -> bool {
    let names: Vec<&str> = stack.iter().map(String::as_str).collect();
    matches!(
        names.as_slice(),
        ["document", "body", "p", "r"] | ["document", "body", "p", "hyperlink", "r"]
    )
}
