//! Keystone DNS Infrastructure Layer
pub mod dns;
pub mod store;

pub use dns::DnsServerHandler;
pub use store::MemoryRecordStore;
