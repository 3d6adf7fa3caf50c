pub mod dns;

// Re-export use cases
pub use dns::{HandleDnsQueryUseCase, QuestionOutcome, ResolveQuestionUseCase, MX_PREFERENCE};
