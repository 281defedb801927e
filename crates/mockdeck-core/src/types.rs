//! Domain types shared across all mockdeck crates

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user row as returned by the business API.
///
/// `id` and `createts` are server-assigned and never sent on create;
/// the client treats them as immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,

    pub name: String,

    /// ISO 8601 calendar date (`YYYY-MM-DD`)
    pub birthday: String,

    /// Server-assigned creation timestamp, passed through for display
    #[serde(default)]
    pub createts: String,
}

/// Create/update payload for a user - no server-assigned fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub birthday: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, birthday: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birthday: birthday.into(),
        }
    }
}

/// An opaque WireMock stub mapping document.
///
/// The admin API owns the schema; the client only reads `id`, the request
/// method, and a best-effort URL field for display and search. Everything
/// else round-trips untouched through update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StubMapping(pub Value);

impl StubMapping {
    pub fn new(doc: Value) -> Self {
        Self(doc)
    }

    /// Server-assigned mapping id, used as the selection key.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// HTTP method of the request matcher, defaulting to `ANY`.
    pub fn method(&self) -> &str {
        self.0
            .pointer("/request/method")
            .and_then(Value::as_str)
            .unwrap_or("ANY")
    }

    /// Best-effort URL field: `urlPath`, then `url`, then `urlPattern`.
    pub fn url(&self) -> Option<&str> {
        let request = self.0.get("request")?;
        ["urlPath", "url", "urlPattern"]
            .iter()
            .find_map(|key| request.get(key).and_then(Value::as_str))
    }

    /// Response status of the canned response, if present.
    pub fn response_status(&self) -> Option<u64> {
        self.0.pointer("/response/status").and_then(Value::as_u64)
    }

    /// Pretty-printed JSON for the detail panel and the editor seed.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    /// Default document seeded into the create-stub editor.
    pub fn template() -> Self {
        Self(serde_json::json!({
            "request": {
                "method": "GET",
                "urlPath": "/example"
            },
            "response": {
                "status": 200,
                "headers": { "Content-Type": "application/json" },
                "body": "{\"message\": \"Hello\"}"
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_record_deserializes_without_createts() {
        let user: UserRecord =
            serde_json::from_str(r#"{"id": 7, "name": "Alice", "birthday": "1990-05-01"}"#)
                .unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.createts, "");
    }

    #[test]
    fn test_new_user_serializes_without_id() {
        let payload = serde_json::to_value(NewUser::new("Bob", "2000-01-01")).unwrap();
        assert_eq!(payload, json!({"name": "Bob", "birthday": "2000-01-01"}));
    }

    #[test]
    fn test_stub_mapping_accessors() {
        let stub = StubMapping::new(json!({
            "id": "abc-123",
            "request": { "method": "POST", "urlPath": "/api/things" },
            "response": { "status": 201 }
        }));
        assert_eq!(stub.id(), Some("abc-123"));
        assert_eq!(stub.method(), "POST");
        assert_eq!(stub.url(), Some("/api/things"));
        assert_eq!(stub.response_status(), Some(201));
    }

    #[test]
    fn test_stub_mapping_url_fallback_order() {
        let stub = StubMapping::new(json!({
            "request": { "url": "/exact", "urlPattern": "/pattern/.*" }
        }));
        assert_eq!(stub.url(), Some("/exact"));

        let stub = StubMapping::new(json!({
            "request": { "urlPattern": "/pattern/.*" }
        }));
        assert_eq!(stub.url(), Some("/pattern/.*"));

        let stub = StubMapping::new(json!({ "request": {} }));
        assert_eq!(stub.url(), None);
    }

    #[test]
    fn test_stub_mapping_defaults() {
        let stub = StubMapping::new(json!({}));
        assert_eq!(stub.id(), None);
        assert_eq!(stub.method(), "ANY");
        assert_eq!(stub.url(), None);
    }

    #[test]
    fn test_stub_mapping_round_trips_unknown_fields() {
        let doc = json!({
            "id": "x",
            "priority": 5,
            "metadata": { "team": "qa" },
            "request": { "method": "GET", "urlPath": "/" },
            "response": { "status": 200 }
        });
        let stub: StubMapping = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(serde_json::to_value(&stub).unwrap(), doc);
    }

    #[test]
    fn test_template_parses_as_valid_stub() {
        let stub = StubMapping::template();
        assert_eq!(stub.method(), "GET");
        assert_eq!(stub.url(), Some("/example"));
        assert_eq!(stub.response_status(), Some(200));
    }
}
