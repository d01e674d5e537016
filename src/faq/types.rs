use serde::{Deserialize, Serialize};

/// A single curated question with its canned answer and optional matching
/// keywords.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// The curated FAQ collection, loaded once at startup and read-only for the
/// rest of the process lifetime.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct KnowledgeBase {
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
}
