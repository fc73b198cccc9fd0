//! Bilingual analysis prompt.
//!
//! The section markers are shared with [`crate::split`]; the model is asked
//! to reproduce them verbatim so the completion can be cut into an English
//! and an Urdu report.

/// Maximum number of characters of document text sent to the model.
pub const MAX_DOCUMENT_CHARS: usize = 15_000;

/// Heading that opens the English section of the report.
pub const ENGLISH_MARKER: &str = "**English Report:**";

/// Heading that opens the Urdu section of the report.
pub const URDU_MARKER: &str = "**اردو رپورٹ (Urdu Report):**";

/// Render the analysis prompt for `text`, truncated to [`MAX_DOCUMENT_CHARS`].
pub fn build_prompt(text: &str) -> String {
    build_prompt_with_limit(text, MAX_DOCUMENT_CHARS)
}

pub fn build_prompt_with_limit(text: &str, max_chars: usize) -> String {
    let document = truncate_chars(text, max_chars);
    if document.len() < text.len() {
        tracing::info!(
            max_chars,
            original_bytes = text.len(),
            "document text truncated for prompt"
        );
    }

    format!(
        r#"You are an expert AI Legal Document Analyzer. Your task is to review a legal document and provide a concise summary, extract key clauses, and identify potential risks.

**VERY IMPORTANT:** Provide the full report in **BOTH English and Urdu**. Clearly label each language section.

Here is the legal document for analysis:
---
{document}
---

Please provide the analysis in the following structured format:

---
{ENGLISH_MARKER}

### 1. Overall Legal Summary:
[Provide a concise, 3-5 sentence summary of the document's main purpose, parties, and key agreements.]

### 2. Key Clauses Identified:
[List 3-5 of the most important clauses (e.g., Termination, Indemnification, Governing Law, Payment Terms, Scope of Work). For each, provide the clause name and a brief summary of its content from the document.]
- **[Clause Name 1]:** [Brief summary of content from document]
- **[Clause Name 2]:** [Brief summary of content from document]
...

### 3. Potential Risks/Red Flags:
[Identify any clauses or terms that could pose a significant risk, ambiguity, or unusual burden for one of the parties. Explain why it's a risk.]
- **[Risk 1]:** [Explanation of why it's a risk and where it's located in the document (e.g., "Ambiguous termination clause in Section 5.2").]
- **[Risk 2]:** [Explanation of why it's a risk.]
...

If no significant risks are identified, state "No major risks identified based on the provided text."

---
{URDU_MARKER}

### 1. قانونی خلاصہ (Overall Legal Summary):
[دستاویز کا 3-5 جملوں پر مشتمل مختصر خلاصہ فراہم کریں جس میں اس کا بنیادی مقصد، فریقین اور اہم معاہدات بیان کیے گئے ہوں۔]

### 2. کلیدی شقوں کی نشاندہی (Key Clauses Identified):
[3-5 اہم ترین شقوں کی فہرست دیں (مثلاً، معاہدے کا اختتام، ہرجانے کا ضامن ہونا، نافذ العمل قانون، ادائیگی کی شرائط، کام کا دائرہ کار)۔ ہر ایک کے لیے، شق کا نام اور دستاویز سے اس کے مواد کا مختصر خلاصہ فراہم کریں۔]
- **[شق کا نام 1]:** [دستاویز سے مواد کا مختصر خلاصہ]
- **[شق کا نام 2]:** [دستاویز سے مواد کا مختصر خلاصہ]
...

### 3. ممکنہ خطرات/ریڈ فلیگز (Potential Risks/Red Flags):
[ایسی شقوں یا شرائط کی نشاندہی کریں جو کسی فریق کے لیے نمایاں خطرہ، ابہام، یا غیر معمولی بوجھ بن سکتی ہیں۔ وضاحت کریں کہ یہ خطرہ کیوں ہے۔]
- **[خطرہ 1]:** [خطرہ کی وضاحت اور دستاویز میں اس کا مقام (مثلاً، "سیکشن 5.2 میں مبہم اختتامی شق")۔]
- **[خطرہ 2]:** [خطرہ کی وضاحت۔]
...

اگر کوئی نمایاں خطرات نہیں پائے جاتے ہیں، تو بیان کریں "فراہم کردہ متن کی بنیاد پر کوئی بڑے خطرات کی نشاندہی نہیں ہوئی۔"
---
"#
    )
}

/// The first `max_chars` characters of `text` (Unicode scalar values, never
/// splitting a character).
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
