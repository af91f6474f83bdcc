use std::collections::BTreeMap;

/// Active query filters of one list. Empty values are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    values: BTreeMap<String, String>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to the trimmed `value`, or removes it when blank.
    /// Returns whether the effective filter set changed.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return self.values.remove(key).is_some();
        }
        match self.values.get(key) {
            Some(current) if current == trimmed => false,
            _ => {
                self.values.insert(key.to_string(), trimmed.to_string());
                true
            }
        }
    }

    pub fn clear(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `page` and `size` first, then filters in key order.
    pub fn to_query(&self, page: u32, size: u32) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), page.to_string()),
            ("size".to_string(), size.to_string()),
        ];
        query.extend(self.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        query
    }
}
