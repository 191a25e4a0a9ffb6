use crate::errors::DnsError;
use crate::header::{Header, HEADER_LEN};
use crate::query::Query;
use crate::question::Question;
use crate::record::ResourceRecord;

/// Accumulator for an outbound message, seeded from the query it
/// answers. Records are appended by the responder; `ancount` always
/// equals the number of appended records.
#[derive(Debug, Clone)]
pub struct Response {
    pub header: Header,
    pub question: Question,
    records: Vec<ResourceRecord>,
}

impl Response {
    /// Derives the response header: transaction id echoed, `qr` set,
    /// opcode and `rd` carried over, question count copied, all answer
    /// counts zeroed. `ra` stays 0 — this server never recurses.
    pub fn for_query(query: &Query) -> Self {
        let header = Header {
            id: query.header.id,
            qr: true,
            opcode: query.header.opcode,
            aa: false,
            tc: false,
            rd: query.header.rd,
            ra: false,
            z: 0,
            rcode: 0,
            qdcount: query.header.qdcount,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        };

        Self {
            header,
            question: query.question.clone(),
            records: Vec::new(),
        }
    }

    pub fn set_authoritative(&mut self, aa: bool) {
        self.header.aa = aa;
    }

    pub fn add_record(&mut self, record: ResourceRecord) {
        self.records.push(record);
        self.header.ancount = self.header.ancount.saturating_add(1);
    }

    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    /// Serializes header, echoed question, then every record in append
    /// order. No compression, no padding.
    pub fn serialize(&self) -> Result<Vec<u8>, DnsError> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.question.name.len() + 6);
        self.header.write(&mut out);
        self.question.write(&mut out)?;
        for record in &self.records {
            record.write(&mut out)?;
        }
        Ok(out)
    }
}
