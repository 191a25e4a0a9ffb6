use keystone_dns_application::RespondToQueryUseCase;
use keystone_dns_domain::Query;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error};

/// Transport-facing request handler: raw datagram in, raw reply out.
/// The transport decides how bytes arrive and leave; this type only
/// decodes, dispatches and serializes.
pub struct DnsServerHandler {
    responder: Arc<RespondToQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(responder: Arc<RespondToQueryUseCase>) -> Self {
        Self { responder }
    }

    /// Handles one inbound datagram. Returns the serialized reply, or
    /// `None` when the datagram is dropped — a malformed request aborts
    /// only its own processing, never other in-flight requests.
    pub async fn handle(&self, buf: &[u8], peer: SocketAddr) -> Option<Vec<u8>> {
        let query = match Query::decode(buf) {
            Ok(query) => query,
            Err(e) => {
                debug!(%peer, error = %e, "Dropping malformed datagram");
                return None;
            }
        };

        debug!(
            %peer,
            id = query.header.id,
            name = %query.question.name,
            qtype = query.question.qtype,
            "Query received"
        );

        let response = self.responder.execute(&query).await;
        match response.serialize() {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(%peer, error = %e, "Failed to serialize response");
                None
            }
        }
    }
}
