use super::{AnswerRecord, DnsQuery, Question};

/// Outbound reply handed back to the transport.
#[derive(Debug, Clone)]
pub struct Reply {
    pub id: u16,
    pub questions: Vec<Question>,
    pub answers: Vec<AnswerRecord>,
}

impl Reply {
    pub fn for_query(query: &DnsQuery) -> Self {
        Self {
            id: query.id,
            questions: query.questions.clone(),
            answers: Vec::new(),
        }
    }

    pub fn push(&mut self, answer: AnswerRecord) {
        self.answers.push(answer);
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
