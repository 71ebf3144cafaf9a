use crate::utils::error::Result;
use serde::Serialize;
use serde_json::Value;

/// 只能附加的請求紀錄，保持插入順序
#[derive(Debug, Default, Clone)]
pub struct RequestStore {
    items: Vec<Value>,
}

impl RequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Value::Null` 視為沒有資料，直接忽略
    pub fn add(&mut self, item: Value) {
        if item.is_null() {
            return;
        }
        self.items.push(item);
    }

    pub fn record<T: Serialize>(&mut self, item: &T) -> Result<()> {
        self.add(serde_json::to_value(item)?);
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Request;
    use serde_json::json;

    #[test]
    fn test_count_tracks_adds() {
        let mut store = RequestStore::new();
        assert!(store.is_empty());

        for i in 0..5 {
            store.add(json!({"id": i}));
        }
        store.add(json!({"id": 0}));

        assert_eq!(store.count(), 6);
        assert_eq!(store.items()[0], json!({"id": 0}));
        assert_eq!(store.items()[5], json!({"id": 0}));
    }

    #[test]
    fn test_null_is_ignored() {
        let mut store = RequestStore::new();
        store.add(json!("first"));
        store.add(Value::Null);
        store.record(&None::<Request>).unwrap();

        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_record_serializes_items() {
        let mut store = RequestStore::new();
        store.record(&Request::new("/api/data", "GET")).unwrap();

        assert_eq!(
            store.items(),
            &[json!({"path": "/api/data", "method": "GET"})]
        );
    }
}
