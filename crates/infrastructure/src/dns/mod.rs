pub mod server;

pub use server::DnsServerHandler;
