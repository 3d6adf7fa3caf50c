//! Mapping between domain records and hickory wire types.

use docker_dns_domain::{AnswerRecord, RecordData, RecordType};
use hickory_proto::rr::rdata::{A, MX, PTR, SOA};
use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};
use hickory_proto::ProtoError;

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::Other(code) => HickoryRecordType::from(*code),
        }
    }

    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::MX => RecordType::MX,
            HickoryRecordType::PTR => RecordType::PTR,
            HickoryRecordType::AAAA => RecordType::AAAA,
            HickoryRecordType::SOA => RecordType::SOA,
            other => RecordType::Other(u16::from(other)),
        }
    }
}

/// Converts answer records into hickory records (class IN).
pub struct RecordMapper;

impl RecordMapper {
    pub fn to_hickory(answer: &AnswerRecord) -> Result<Record, ProtoError> {
        let name = Name::from_utf8(&*answer.name)?;

        let rdata = match &answer.data {
            RecordData::A(address) => RData::A(A(*address)),
            RecordData::MX {
                preference,
                exchange,
            } => RData::MX(MX::new(*preference, Name::from_utf8(&**exchange)?)),
            RecordData::PTR(target) => RData::PTR(PTR(Name::from_utf8(&**target)?)),
            RecordData::SOA(soa) => RData::SOA(SOA::new(
                Name::from_utf8(&*soa.primary_ns)?,
                Name::from_utf8(&*soa.mailbox)?,
                soa.serial,
                soa.refresh,
                soa.retry,
                soa.expire,
                soa.minimum,
            )),
        };

        Ok(Record::from_rdata(name, answer.ttl, rdata))
    }
}
