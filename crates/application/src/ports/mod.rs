mod record_store;

pub use record_store::RecordStore;

// Re-export for convenience
pub use keystone_dns_domain::DnsError;
