use crate::chat::Responder;
use crate::config::AiConfig;
use rig::{
    client::CompletionClient,
    completion::{CompletionError, Prompt, PromptError},
    providers::openai::Client as OpenAiClient,
};

/// Fixed framing for every AI completion; stable across calls so answers
/// keep a consistent voice within a process.
const SYSTEM_PROMPT: &str = "You are a helpful school chatbot assistant. \
You provide friendly, informative responses about school-related topics. \
Keep your responses concise but helpful. If you don't know something \
specific about the school, politely say so and suggest contacting the \
school office. Always maintain a positive, educational tone appropriate \
for students, parents, and staff.";

/// Why an AI completion could not produce text. Every variant maps to a
/// fixed user-facing string via [`AiFailure::user_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiFailure {
    MissingCredential,
    Quota,
    Authentication,
    Network,
    ModelUnavailable { kind: String },
    Unknown { kind: String },
}

impl AiFailure {
    pub fn user_message(&self, model: &str) -> String {
        match self {
            AiFailure::MissingCredential => {
                "I'm sorry, but I'm currently unable to access my AI capabilities. \
                 Please contact the school administration for assistance."
                    .to_string()
            }
            AiFailure::Quota => {
                "I'm currently at my usage limit. Please try again later or \
                 contact the school office for immediate assistance."
                    .to_string()
            }
            AiFailure::Authentication => {
                "I'm having authentication issues. Please contact the school \
                 administration for assistance."
                    .to_string()
            }
            AiFailure::Network => {
                "I'm having network connectivity issues. Please check your \
                 internet connection and try again."
                    .to_string()
            }
            AiFailure::ModelUnavailable { kind } => format!(
                "The {} model is not available. Please contact support. (Error: {})",
                model, kind
            ),
            AiFailure::Unknown { kind } => format!(
                "I'm sorry, I'm having trouble processing your request right now \
                 (Error: {}). Please try again later or contact the school office \
                 for immediate assistance.",
                kind
            ),
        }
    }
}

/// Classifies a completion failure from its error kind and message. The
/// check order is fixed: quota, authentication, network, model, unknown.
/// A message can satisfy several categories at once (an auth failure may
/// mention its dropped connection); the first hit wins.
pub fn classify_failure(kind: &str, message: &str) -> AiFailure {
    let message = message.to_lowercase();
    if message.contains("quota") || message.contains("rate limit") || message.contains("429") {
        AiFailure::Quota
    } else if message.contains("api key")
        || message.contains("api_key")
        || message.contains("authentication")
        || message.contains("unauthorized")
    {
        AiFailure::Authentication
    } else if message.contains("network") || message.contains("connect") || kind == "HttpError" {
        AiFailure::Network
    } else if message.contains("model") {
        AiFailure::ModelUnavailable {
            kind: kind.to_string(),
        }
    } else {
        AiFailure::Unknown {
            kind: kind.to_string(),
        }
    }
}

fn classify_prompt_error(error: &PromptError) -> AiFailure {
    classify_failure(error_kind(error), &error.to_string())
}

fn error_kind(error: &PromptError) -> &'static str {
    match error {
        PromptError::CompletionError(e) => match e {
            CompletionError::HttpError(_) => "HttpError",
            CompletionError::JsonError(_) => "JsonError",
            CompletionError::RequestError(_) => "RequestError",
            CompletionError::ResponseError(_) => "ResponseError",
            CompletionError::ProviderError(_) => "ProviderError",
            #[allow(unreachable_patterns)]
            _ => "CompletionError",
        },
        _ => "PromptError",
    }
}

/// Stateless wrapper around the OpenAI completion API. One request per
/// question, no retries; failures come back as user-facing text, never as
/// errors.
pub struct AiResponder {
    config: AiConfig,
}

impl AiResponder {
    pub fn new(config: AiConfig) -> Self {
        Self { config }
    }

    pub fn has_credential(&self) -> bool {
        !self.config.api_key.trim().is_empty()
    }

    async fn complete(&self, question: &str) -> Result<String, AiFailure> {
        if !self.has_credential() {
            return Err(AiFailure::MissingCredential);
        }

        let client = OpenAiClient::new(self.config.api_key.trim());
        let agent = client
            .agent(&self.config.model)
            .preamble(SYSTEM_PROMPT)
            .temperature(self.config.temperature)
            .max_tokens(self.config.max_tokens)
            .build();

        match agent.prompt(question).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => Err(classify_prompt_error(&e)),
        }
    }
}

impl Responder for AiResponder {
    async fn respond(&self, question: &str) -> String {
        match self.complete(question).await {
            Ok(text) => {
                log::info!("AI completion succeeded ({} chars)", text.len());
                text
            }
            Err(failure) => {
                log::error!("AI completion failed for '{}': {:?}", question, failure);
                failure.user_message(&self.config.model)
            }
        }
    }
}
