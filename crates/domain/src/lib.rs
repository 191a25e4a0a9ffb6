//! Keystone DNS Domain Layer
pub mod config;
pub mod errors;
pub mod header;
pub mod name;
pub mod query;
pub mod question;
pub mod rdata;
pub mod record;
pub mod record_class;
pub mod record_type;
pub mod response;

pub use config::{CliOverrides, Config, StaticRecord};
pub use errors::DnsError;
pub use header::Header;
pub use query::Query;
pub use question::Question;
pub use rdata::RecordData;
pub use record::ResourceRecord;
pub use record_class::RecordClass;
pub use record_type::RecordType;
pub use response::Response;
