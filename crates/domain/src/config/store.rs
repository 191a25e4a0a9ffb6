use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Namespace prefix for record-store keys.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// TTL applied to static records that do not set one.
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            default_ttl: default_ttl(),
        }
    }
}

fn default_namespace() -> String {
    "dns".to_string()
}

fn default_ttl() -> u32 {
    3600
}
