//! Stub mapping resource against the WireMock-style admin API
//!
//! Endpoint: `{admin_api}/mappings`. The collection arrives wrapped in a
//! `{ "mappings": [...] }` envelope, though a bare array is accepted too.

use serde_json::Value;

use mockdeck_core::{Result, StubMapping};

use crate::client::ApiClient;

/// Thin mapping layer over the admin API's stub-mapping resource.
#[derive(Debug, Clone)]
pub struct StubApi {
    client: ApiClient,
}

impl StubApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all stub mappings, unwrapping the collection envelope.
    pub async fn get_all(&self) -> Result<Vec<StubMapping>> {
        let body = self.client.get("/mappings").await?;
        Ok(unwrap_mappings(body))
    }

    /// Create a stub mapping; the server assigns the id.
    pub async fn create(&self, doc: &StubMapping) -> Result<()> {
        self.client.post("/mappings", doc).await?;
        Ok(())
    }

    /// Replace the full document for an existing mapping id.
    pub async fn update(&self, id: &str, doc: &StubMapping) -> Result<()> {
        self.client.put(&format!("/mappings/{id}"), doc).await?;
        Ok(())
    }

    /// Remove a stub mapping by id.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/mappings/{id}")).await
    }
}

/// Unwrap `{ "mappings": [...] }`, accept a bare array, default to empty.
fn unwrap_mappings(body: Value) -> Vec<StubMapping> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("mappings") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    items.into_iter().map(StubMapping::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope() {
        let body = json!({
            "mappings": [
                {"id": "a", "request": {"method": "GET", "urlPath": "/a"}},
                {"id": "b", "request": {"method": "POST", "urlPath": "/b"}}
            ],
            "meta": {"total": 2}
        });
        let stubs = unwrap_mappings(body);
        assert_eq!(stubs.len(), 2);
        assert_eq!(stubs[0].id(), Some("a"));
    }

    #[test]
    fn test_unwrap_bare_array() {
        let body = json!([{"id": "a"}]);
        let stubs = unwrap_mappings(body);
        assert_eq!(stubs.len(), 1);
    }

    #[test]
    fn test_unwrap_missing_envelope_defaults_to_empty() {
        assert!(unwrap_mappings(json!({})).is_empty());
        assert!(unwrap_mappings(json!({"mappings": null})).is_empty());
        assert!(unwrap_mappings(Value::Null).is_empty());
    }
}
