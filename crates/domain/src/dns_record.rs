mod record;
mod record_type;

pub use record::{AnswerRecord, RecordData, SoaData};
pub use record_type::RecordType;
