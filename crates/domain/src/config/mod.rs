mod errors;
mod logging;
mod root;
mod server;
mod static_records;
mod store;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use static_records::StaticRecord;
pub use store::StoreConfig;
