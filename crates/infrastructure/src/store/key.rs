/// Deterministic store key for a `(namespace, class, type, name)` tuple.
/// The key never leaves the store adapter.
pub fn store_key(namespace: &str, class: u16, rtype: u16, name: &str) -> String {
    format!("{}:{} {} {}", namespace, class, rtype, name)
}
