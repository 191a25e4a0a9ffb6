use crate::errors::DnsError;
use crate::name;
use crate::record_type::RecordType;

/// One entry of the question section. `qtype` and `qclass` stay raw wire
/// values so unrecognized codes round-trip into the response untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }

    pub fn write(&self, out: &mut Vec<u8>) -> Result<(), DnsError> {
        out.extend_from_slice(&name::encode(&self.name)?);
        out.extend_from_slice(&self.qtype.to_be_bytes());
        out.extend_from_slice(&self.qclass.to_be_bytes());
        Ok(())
    }
}
