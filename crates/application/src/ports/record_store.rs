use async_trait::async_trait;
use keystone_dns_domain::DnsError;

/// Authoritative-data backing store.
///
/// Each `(class, type, name)` tuple maps to a set of `"<ttl> <value>"`
/// strings; value encoding is type-specific (dotted quad for A, domain
/// string for CNAME, literal text for TXT). Inserting an entry that is
/// already present is a no-op.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn lookup(&self, class: u16, rtype: u16, name: &str) -> Result<Vec<String>, DnsError>;

    async fn insert(
        &self,
        class: u16,
        rtype: u16,
        name: &str,
        ttl: u32,
        value: &str,
    ) -> Result<(), DnsError>;

    async fn remove(
        &self,
        class: u16,
        rtype: u16,
        name: &str,
        ttl: u32,
        value: &str,
    ) -> Result<(), DnsError>;
}
