//! Section detection: which common résumé headers appear in the text.
//! Advisory metadata only; nothing downstream is gated on it.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLabel {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Achievements,
}

impl SectionLabel {
    pub const ALL: [SectionLabel; 7] = [
        SectionLabel::Summary,
        SectionLabel::Experience,
        SectionLabel::Education,
        SectionLabel::Skills,
        SectionLabel::Projects,
        SectionLabel::Certifications,
        SectionLabel::Achievements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionLabel::Summary => "summary",
            SectionLabel::Experience => "experience",
            SectionLabel::Education => "education",
            SectionLabel::Skills => "skills",
            SectionLabel::Projects => "projects",
            SectionLabel::Certifications => "certifications",
            SectionLabel::Achievements => "achievements",
        }
    }

    /// Header synonyms recognised for this label.
    fn synonyms(&self) -> &'static [&'static str] {
        match self {
            SectionLabel::Summary => &[r"professional\s+summary", "summary", "profile", "objective"],
            SectionLabel::Experience => &[
                r"work\s+experience",
                r"professional\s+experience",
                "experience",
                "employment",
            ],
            SectionLabel::Education => &["education", r"academic\s+background"],
            SectionLabel::Skills => &["skills", r"technical\s+skills", r"core\s+competencies"],
            SectionLabel::Projects => &["projects", "portfolio"],
            SectionLabel::Certifications => &["certifications", "certificates", "licenses"],
            SectionLabel::Achievements => &["achievements", "awards", "accomplishments"],
        }
    }
}

pub type SectionFlags = BTreeMap<SectionLabel, bool>;

static SECTION_PATTERNS: LazyLock<Vec<(SectionLabel, Regex)>> = LazyLock::new(|| {
    SectionLabel::ALL
        .iter()
        .map(|label| {
            let pattern = format!("(?i)(?:{})", label.synonyms().join("|"));
            let regex = Regex::new(&pattern).expect("section pattern compiles");
            (*label, regex)
        })
        .collect()
});

/// Reports, for every label, whether any of its header synonyms appears in `text`.
pub fn detect_sections(text: &str) -> SectionFlags {
    SECTION_PATTERNS
        .iter()
        .map(|(label, regex)| (*label, regex.is_match(text)))
        .collect()
}
