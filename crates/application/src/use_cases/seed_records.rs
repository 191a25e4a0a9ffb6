use crate::ports::RecordStore;
use keystone_dns_domain::{DnsError, RecordClass, RecordType, StaticRecord};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Loads the configured authoritative records into the store at
/// startup, applying the store's default TTL where none is set.
pub struct SeedStaticRecordsUseCase {
    store: Arc<dyn RecordStore>,
    default_ttl: u32,
}

impl SeedStaticRecordsUseCase {
    pub fn new(store: Arc<dyn RecordStore>, default_ttl: u32) -> Self {
        Self { store, default_ttl }
    }

    pub async fn execute(&self, records: &[StaticRecord]) -> Result<usize, DnsError> {
        let mut inserted = 0;
        for record in records {
            let rtype = RecordType::from_str(&record.record_type).map_err(DnsError::Store)?;
            let class = RecordClass::from_str(&record.class).map_err(DnsError::Store)?;

            self.store
                .insert(
                    class.to_u16(),
                    rtype.to_u16(),
                    &record.name,
                    record.ttl_or(self.default_ttl),
                    &record.value,
                )
                .await?;
            inserted += 1;
        }

        if inserted > 0 {
            info!(count = inserted, "Seeded static records");
        }
        Ok(inserted)
    }
}
