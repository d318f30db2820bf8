//! Personal-data redaction for extracted résumé text.
//!
//! Three independent substitutions, applied in this order:
//! 1. phone numbers → `[PHONE NUMBER REMOVED]`
//! 2. street addresses → `[ADDRESS REMOVED]`
//! 3. ZIP codes → `[ZIP REMOVED]`
//!
//! The classes are disjoint in practice. The order still matters for one case:
//! a ZIP that trails an address survives the address pass and is caught by the
//! ZIP pass. None of the markers contains a digit, so a second run over filtered
//! text is a no-op.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

pub const PHONE_MARKER: &str = "[PHONE NUMBER REMOVED]";
pub const ADDRESS_MARKER: &str = "[ADDRESS REMOVED]";
pub const ZIP_MARKER: &str = "[ZIP REMOVED]";

/// Optional country code, optional parenthesised area code, 3-3-4 digits
/// separated by space, dot or hyphen.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("phone pattern compiles")
});

/// House number, one or more words, then a street-type keyword.
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d+\s+[A-Za-z\s]+(?:Street|St|Avenue|Ave|Road|Rd|Drive|Dr|Lane|Ln|Boulevard|Blvd|Way|Court|Ct|Circle|Cir|Place|Pl)\b",
    )
    .expect("address pattern compiles")
});

/// Five digits, optionally followed by `-NNNN`.
static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{5}(-\d{4})?\b").expect("zip pattern compiles"));

/// How many substrings of each class were replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RedactionReport {
    pub phone_numbers: usize,
    pub addresses: usize,
    pub zip_codes: usize,
}

impl RedactionReport {
    pub fn total(&self) -> usize {
        self.phone_numbers + self.addresses + self.zip_codes
    }
}

pub fn redact_phone_numbers(text: &str) -> String {
    PHONE_RE.replace_all(text, PHONE_MARKER).into_owned()
}

pub fn redact_addresses(text: &str) -> String {
    ADDRESS_RE.replace_all(text, ADDRESS_MARKER).into_owned()
}

pub fn redact_zip_codes(text: &str) -> String {
    ZIP_RE.replace_all(text, ZIP_MARKER).into_owned()
}

/// Removes phone numbers, street addresses and ZIP codes from `text`.
/// Empty input comes back empty.
pub fn filter_personal_data(text: &str) -> String {
    filter_with_report(text).0
}

/// Same as [`filter_personal_data`], also counting what was replaced.
pub fn filter_with_report(text: &str) -> (String, RedactionReport) {
    let mut report = RedactionReport::default();
    if text.is_empty() {
        return (String::new(), report);
    }

    report.phone_numbers = PHONE_RE.find_iter(text).count();
    let text = redact_phone_numbers(text);

    report.addresses = ADDRESS_RE.find_iter(&text).count();
    let text = redact_addresses(&text);

    report.zip_codes = ZIP_RE.find_iter(&text).count();
    let text = redact_zip_codes(&text);

    debug!(
        "Redacted {} phone numbers, {} addresses, {} ZIP codes",
        report.phone_numbers, report.addresses, report.zip_codes
    );

    (text, report)
}
