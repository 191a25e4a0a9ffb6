use crate::ports::RecordStore;
use keystone_dns_domain::{Query, Question, RecordData, RecordType, ResourceRecord, Response};
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns a decoded query into an authoritative response.
///
/// Stateless across requests; every call owns its own query/response
/// pair, so concurrent requests never share mutable state.
pub struct RespondToQueryUseCase {
    store: Arc<dyn RecordStore>,
}

impl RespondToQueryUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Never fails: a store error degrades to an empty answer set, and a
    /// malformed or unsupported stored value drops only that record. The
    /// requester always gets a reply.
    pub async fn execute(&self, query: &Query) -> Response {
        let question = &query.question;
        let mut response = Response::for_query(query);

        let entries = match self
            .store
            .lookup(question.qclass, question.qtype, &question.name)
            .await
        {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, name = %question.name, "Record store lookup failed, answering empty");
                Vec::new()
            }
        };

        for entry in &entries {
            match build_record(question, entry) {
                Ok(record) => response.add_record(record),
                Err(reason) => {
                    warn!(name = %question.name, entry = %entry, %reason, "Skipping stored record");
                }
            }
        }

        response.set_authoritative(true);
        debug!(name = %question.name, answers = response.header.ancount, "Built response");
        response
    }
}

/// Parses one stored `"<ttl> <value>"` entry into a wire-ready record
/// for the given question.
fn build_record(question: &Question, entry: &str) -> Result<ResourceRecord, String> {
    let (ttl_str, value) = entry
        .split_once(' ')
        .ok_or_else(|| "entry has no value part".to_string())?;
    let ttl: u32 = ttl_str
        .parse()
        .map_err(|_| format!("bad ttl '{}'", ttl_str))?;

    let rtype = RecordType::from_u16(question.qtype)
        .ok_or_else(|| format!("unknown record type {}", question.qtype))?;
    let data = RecordData::normalize(rtype, value).map_err(|e| e.to_string())?;
    let rdata = data.encode().map_err(|e| e.to_string())?;

    Ok(ResourceRecord {
        name: question.name.clone(),
        rtype: question.qtype,
        class: question.qclass,
        ttl,
        rdata,
    })
}
