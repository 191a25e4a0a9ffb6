mod key;
mod memory;

pub use key::store_key;
pub use memory::MemoryRecordStore;
