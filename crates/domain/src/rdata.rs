use crate::errors::DnsError;
use crate::name;
use crate::record_type::RecordType;
use std::net::Ipv4Addr;

/// A logical record value, one variant per record kind this server can
/// build rdata for. Types the store may hold but we cannot encode yet
/// (AAAA, MX, SRV, ...) fail `UnsupportedType` at normalization instead
/// of silently producing empty rdata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Cname(String),
    Txt(String),
}

impl RecordData {
    /// Maps a stored value string plus its declared type into a typed
    /// record value.
    pub fn normalize(rtype: RecordType, value: &str) -> Result<Self, DnsError> {
        match rtype {
            RecordType::A => value
                .parse::<Ipv4Addr>()
                .map(RecordData::A)
                .map_err(|_| DnsError::InvalidAddress(value.to_string())),
            RecordType::CNAME => Ok(RecordData::Cname(value.to_string())),
            RecordType::TXT => Ok(RecordData::Txt(value.to_string())),
            other => Err(DnsError::UnsupportedType(other)),
        }
    }

    /// Produces the wire rdata bytes for this value.
    pub fn encode(&self) -> Result<Vec<u8>, DnsError> {
        match self {
            RecordData::A(addr) => Ok(addr.octets().to_vec()),
            RecordData::Cname(target) => name::encode(target),
            RecordData::Txt(text) => Ok(text.as_bytes().to_vec()),
        }
    }
}
