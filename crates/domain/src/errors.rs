use crate::record_type::RecordType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    #[error("Malformed message: {0}")]
    Format(String),

    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedType(RecordType),

    #[error("Record store error: {0}")]
    Store(String),
}
