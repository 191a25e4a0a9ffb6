use crate::errors::DnsError;
use crate::name;

/// A single answer entry: name + type + class + ttl + length-prefixed
/// rdata. Records are only ever constructed and sent, never parsed from
/// the wire, so there is no decode direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    pub fn write(&self, out: &mut Vec<u8>) -> Result<(), DnsError> {
        let rdlength = u16::try_from(self.rdata.len()).map_err(|_| {
            DnsError::Format(format!("rdata length {} exceeds u16", self.rdata.len()))
        })?;

        out.extend_from_slice(&name::encode(&self.name)?);
        out.extend_from_slice(&self.rtype.to_be_bytes());
        out.extend_from_slice(&self.class.to_be_bytes());
        out.extend_from_slice(&self.ttl.to_be_bytes());
        out.extend_from_slice(&rdlength.to_be_bytes());
        out.extend_from_slice(&self.rdata);
        Ok(())
    }

    pub fn encode(&self) -> Result<Vec<u8>, DnsError> {
        let mut out = Vec::with_capacity(self.name.len() + 12 + self.rdata.len());
        self.write(&mut out)?;
        Ok(out)
    }
}
