use super::key::store_key;
use async_trait::async_trait;
use dashmap::DashMap;
use keystone_dns_application::ports::RecordStore;
use keystone_dns_domain::DnsError;

/// In-process record store: one `"<ttl> <value>"` entry set per
/// `(namespace, class, type, name)` key, with Redis-style set semantics
/// (duplicate inserts are no-ops).
pub struct MemoryRecordStore {
    namespace: String,
    sets: DashMap<String, Vec<String>>,
}

impl MemoryRecordStore {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            sets: DashMap::new(),
        }
    }

    fn key(&self, class: u16, rtype: u16, name: &str) -> String {
        store_key(&self.namespace, class, rtype, name)
    }

    pub fn len(&self) -> usize {
        self.sets.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn lookup(&self, class: u16, rtype: u16, name: &str) -> Result<Vec<String>, DnsError> {
        Ok(self
            .sets
            .get(&self.key(class, rtype, name))
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn insert(
        &self,
        class: u16,
        rtype: u16,
        name: &str,
        ttl: u32,
        value: &str,
    ) -> Result<(), DnsError> {
        let entry = format!("{} {}", ttl, value);
        let mut set = self.sets.entry(self.key(class, rtype, name)).or_default();
        if !set.contains(&entry) {
            set.push(entry);
        }
        Ok(())
    }

    async fn remove(
        &self,
        class: u16,
        rtype: u16,
        name: &str,
        ttl: u32,
        value: &str,
    ) -> Result<(), DnsError> {
        let entry = format!("{} {}", ttl, value);
        if let Some(mut set) = self.sets.get_mut(&self.key(class, rtype, name)) {
            set.retain(|e| e != &entry);
        }
        Ok(())
    }
}
