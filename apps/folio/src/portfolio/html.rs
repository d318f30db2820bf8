//! Post-processing for generated markup: unwrap, trim to the document, validate.

use crate::llm_client::strip_code_fences;

pub const DOCUMENT_START: &str = "<!DOCTYPE html>";
pub const DOCUMENT_END: &str = "</html>";

/// Tags a complete page must contain.
const REQUIRED_ELEMENTS: &[&str] = &[
    DOCUMENT_START,
    "<html",
    "<head>",
    "</head>",
    "<body>",
    "</body>",
    DOCUMENT_END,
];

/// Anything shorter is never a page.
const MIN_DOCUMENT_CHARS: usize = 50;

/// Above this length a page missing one of the required tags is still accepted.
/// Generators sometimes emit `<body class=...>` or drop the doctype on otherwise
/// usable output.
const LENIENT_DOCUMENT_CHARS: usize = 500;

/// Strips code fences, then keeps the span from the first `<!DOCTYPE html>` to the
/// last `</html>`, discarding prose around it.
pub fn clean_html_response(content: &str) -> String {
    let mut html = strip_code_fences(content);

    if let Some(start) = html.find(DOCUMENT_START) {
        html = &html[start..];
    }
    if let Some(end) = html.rfind(DOCUMENT_END) {
        html = &html[..end + DOCUMENT_END.len()];
    }

    html.to_string()
}

/// Minimal structural check on a cleaned page.
pub fn validate_html(html: &str) -> bool {
    let length = html.chars().count();
    if length < MIN_DOCUMENT_CHARS {
        return false;
    }
    if REQUIRED_ELEMENTS.iter().all(|element| html.contains(element)) {
        return true;
    }
    length > LENIENT_DOCUMENT_CHARS
}
