use serde_yaml::Value;

/// Proxy entries that survived validation, in source order.
///
/// `entries` are the untouched source mappings; `names[i]` is the `name` of
/// `entries[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyList {
    pub entries: Vec<Value>,
    pub names: Vec<String>,
    /// Number of malformed entries that were dropped
    pub skipped: usize,
}

impl ProxyList {
    pub fn push(&mut self, entry: Value, name: String) {
        self.entries.push(entry);
        self.names.push(name);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
