mod respond;
mod seed_records;

pub use respond::RespondToQueryUseCase;
pub use seed_records::SeedStaticRecordsUseCase;
