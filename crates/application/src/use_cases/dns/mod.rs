mod handle_dns_query;
mod resolve_question;

pub use handle_dns_query::HandleDnsQueryUseCase;
pub use resolve_question::{QuestionOutcome, ResolveQuestionUseCase, MX_PREFERENCE};
