#![allow(dead_code)]

use async_trait::async_trait;
use keystone_dns_application::ports::RecordStore;
use keystone_dns_domain::DnsError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

type Key = (u16, u16, String);

pub struct MockRecordStore {
    entries: Arc<RwLock<HashMap<Key, Vec<String>>>>,
    lookup_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            lookup_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    /// Seeds the store with raw `"<ttl> <value>"` entries keyed by
    /// `(class, type, name)`.
    pub fn with_entries(entries: Vec<(u16, u16, &str, &str)>) -> Self {
        let mut map: HashMap<Key, Vec<String>> = HashMap::new();
        for (class, rtype, name, entry) in entries {
            map.entry((class, rtype, name.to_string()))
                .or_default()
                .push(entry.to_string());
        }
        Self {
            entries: Arc::new(RwLock::new(map)),
            lookup_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn lookup_count(&self) -> u64 {
        self.lookup_count.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn entries_for(&self, class: u16, rtype: u16, name: &str) -> Vec<String> {
        self.entries
            .read()
            .await
            .get(&(class, rtype, name.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for MockRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn lookup(&self, class: u16, rtype: u16, name: &str) -> Result<Vec<String>, DnsError> {
        self.lookup_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DnsError::Store("lookup failed".to_string()));
        }
        Ok(self
            .entries
            .read()
            .await
            .get(&(class, rtype, name.to_string()))
            .cloned()
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
        if *self.should_fail.read().await {
            return Err(DnsError::Store("insert failed".to_string()));
        }
        let entry = format!("{} {}", ttl, value);
        let mut entries = self.entries.write().await;
        let set = entries.entry((class, rtype, name.to_string())).or_default();
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
        if *self.should_fail.read().await {
            return Err(DnsError::Store("remove failed".to_string()));
        }
        let entry = format!("{} {}", ttl, value);
        if let Some(set) = self
            .entries
            .write()
            .await
            .get_mut(&(class, rtype, name.to_string()))
        {
            set.retain(|e| e != &entry);
        }
        Ok(())
    }
}
