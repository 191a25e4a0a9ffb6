use serde::{Deserialize, Serialize};

/// One authoritative record seeded into the store at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticRecord {
    pub name: String,

    pub record_type: String,

    #[serde(default = "default_class")]
    pub class: String,

    #[serde(default)]
    pub ttl: Option<u32>,

    pub value: String,
}

impl StaticRecord {
    pub fn ttl_or(&self, default_ttl: u32) -> u32 {
        self.ttl.unwrap_or(default_ttl)
    }
}

fn default_class() -> String {
    "IN".to_string()
}
