pub mod responder;

pub use responder::{AiFailure, AiResponder};
