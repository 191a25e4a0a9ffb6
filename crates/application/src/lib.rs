//! Keystone DNS Application Layer
pub mod ports;
pub mod use_cases;

pub use ports::RecordStore;
pub use use_cases::{RespondToQueryUseCase, SeedStaticRecordsUseCase};
