use super::RecordType;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}

/// A parsed inbound query: transaction id plus its questions in wire order.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub id: u16,
    pub questions: Vec<Question>,
}

impl DnsQuery {
    pub fn new(id: u16, questions: Vec<Question>) -> Self {
        Self { id, questions }
    }

    pub fn single(id: u16, question: Question) -> Self {
        Self {
            id,
            questions: vec![question],
        }
    }
}
