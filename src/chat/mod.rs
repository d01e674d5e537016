//! The chat facade composing the two answer sources: the local FAQ
//! resolver first (fast, deterministic, free), then the AI completion
//! fallback for everything the knowledge base cannot answer. The AI side
//! sits behind the [`Responder`] trait so the request layer and tests can
//! inject their own collaborator.

use crate::faq::FaqResolver;
use anyhow::{Result, bail};
use std::future::Future;

/// The fallback collaborator asked when no FAQ entry matches. Always
/// produces user-facing text, never an error.
pub trait Responder {
    fn respond(&self, question: &str) -> impl Future<Output = String> + Send;
}

pub struct ChatService<R> {
    resolver: FaqResolver,
    responder: R,
}

impl<R: Responder> ChatService<R> {
    pub fn new(resolver: FaqResolver, responder: R) -> Self {
        Self { resolver, responder }
    }

    /// Answers a question: FAQ hit returns verbatim without touching the
    /// AI path; otherwise the responder's text is returned as-is. The
    /// caller is expected to reject empty input before this point; an
    /// empty question here is an error, not a silent pass-through.
    pub async fn answer(&self, question: &str) -> Result<String> {
        if question.trim().is_empty() {
            bail!("Cannot answer an empty question");
        }

        if let Some(answer) = self.resolver.resolve(question) {
            return Ok(answer.to_string());
        }

        Ok(self.responder.respond(question).await)
    }

    pub fn faq_entry_count(&self) -> usize {
        self.resolver.entry_count()
    }
}
