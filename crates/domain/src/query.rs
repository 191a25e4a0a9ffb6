use crate::errors::DnsError;
use crate::header::{Header, HEADER_LEN};
use crate::name;
use crate::question::Question;

/// A decoded inbound message: header plus exactly one question.
/// Immutable once decoded; lives for one request-response cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub header: Header,
    pub question: Question,
}

impl Query {
    /// Decodes a raw datagram payload.
    ///
    /// Only plain single-question queries are accepted: `qdcount` must be
    /// 1 and the answer, authority and additional counts must all be 0.
    /// Anything else is a `Format` error rather than a silent mis-parse.
    pub fn decode(buf: &[u8]) -> Result<Self, DnsError> {
        let header = Header::parse(buf)?;

        if header.qdcount != 1 {
            return Err(DnsError::Format(format!(
                "expected exactly one question, got {}",
                header.qdcount
            )));
        }
        if header.ancount != 0 || header.nscount != 0 || header.arcount != 0 {
            return Err(DnsError::Format(
                "unexpected resource records in query".to_string(),
            ));
        }

        let (qname, consumed) = name::decode(buf, HEADER_LEN)?;
        let pos = HEADER_LEN + consumed;
        if buf.len() - pos != 4 {
            return Err(DnsError::Format(format!(
                "{} bytes after question name, expected 4 for qtype and qclass",
                buf.len() - pos
            )));
        }

        Ok(Self {
            header,
            question: Question {
                name: qname,
                qtype: u16::from_be_bytes([buf[pos], buf[pos + 1]]),
                qclass: u16::from_be_bytes([buf[pos + 2], buf[pos + 3]]),
            },
        })
    }
}
