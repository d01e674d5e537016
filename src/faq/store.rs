use super::types::KnowledgeBase;
use std::fs;

/// Loads the FAQ knowledge base from a JSON file. A missing or unparseable
/// file degrades to the empty knowledge base; the caller never sees an
/// error, only a smaller (possibly empty) FAQ set.
pub fn load_knowledge_base(path: &str) -> KnowledgeBase {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!(
                "Knowledge base file {} not readable ({}). Using empty knowledge base.",
                path,
                e
            );
            return KnowledgeBase::default();
        }
    };

    match serde_json::from_str::<KnowledgeBase>(&raw) {
        Ok(kb) => {
            log::info!("Successfully loaded {} FAQ entries from {}", kb.faqs.len(), path);
            kb
        }
        Err(e) => {
            log::warn!(
                "Failed to parse knowledge base {}: {}. Using empty knowledge base.",
                path,
                e
            );
            KnowledgeBase::default()
        }
    }
}
