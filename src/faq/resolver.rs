use super::search;
use super::types::KnowledgeBase;

/// Resolves free-text questions against the loaded knowledge base. Holds
/// the base read-only for the process lifetime; resolution itself is
/// stateless and safe to run concurrently.
pub struct FaqResolver {
    kb: KnowledgeBase,
    threshold: f64,
}

impl FaqResolver {
    pub const DEFAULT_THRESHOLD: f64 = 0.6;

    pub fn new(kb: KnowledgeBase) -> Self {
        Self::with_threshold(kb, Self::DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(kb: KnowledgeBase, threshold: f64) -> Self {
        Self { kb, threshold }
    }

    /// Returns the answer of the best-scoring entry at or above the
    /// configured threshold, or `None` when nothing qualifies.
    pub fn resolve(&self, question: &str) -> Option<&str> {
        self.resolve_with_threshold(question, self.threshold)
    }

    pub fn resolve_with_threshold(&self, question: &str, threshold: f64) -> Option<&str> {
        let mut best: Option<(usize, f64)> = None;

        for (index, entry) in self.kb.faqs.iter().enumerate() {
            let score = search::score_entry(question, entry);
            let best_score = best.map(|(_, s)| s).unwrap_or(0.0);
            // Strict improvement only: the first entry to reach the top
            // score wins over later ties.
            if score > best_score && score >= threshold {
                best = Some((index, score));
            }
        }

        match best {
            Some((index, score)) => {
                let entry = &self.kb.faqs[index];
                log::info!(
                    "FAQ match for '{}': #{} ('{}') with score {:.4}",
                    question,
                    index,
                    entry.question,
                    score
                );
                Some(entry.answer.as_str())
            }
            None => {
                log::info!(
                    "No FAQ match above threshold {:.2} for: '{}'",
                    threshold,
                    question
                );
                None
            }
        }
    }

    pub fn entry_count(&self) -> usize {
        self.kb.faqs.len()
    }
}
