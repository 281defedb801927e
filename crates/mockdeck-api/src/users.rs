//! User record resource - direct verb + path translation
//!
//! Endpoint: `{business_api}/users`

use serde_json::Value;

use mockdeck_core::{NewUser, Result, UserRecord};

use crate::client::ApiClient;

/// Thin mapping layer over the business API's user resource.
#[derive(Debug, Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the full collection, in server order.
    ///
    /// A non-array body is treated as an empty collection, not an error.
    pub async fn get_all(&self) -> Result<Vec<UserRecord>> {
        let body = self.client.get("/users").await?;
        Ok(parse_users(body))
    }

    /// Create a user; the server assigns `id` and `createts`.
    pub async fn create(&self, user: &NewUser) -> Result<()> {
        self.client.post("/users", user).await?;
        Ok(())
    }

    /// Replace the mutable fields of an existing user.
    pub async fn update(&self, id: i64, user: &NewUser) -> Result<()> {
        self.client.put(&format!("/users/{id}"), user).await?;
        Ok(())
    }

    /// Delete a user by id.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/users/{id}")).await
    }
}

fn parse_users(body: Value) -> Vec<UserRecord> {
    match body {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_users_from_array() {
        let body = json!([
            {"id": 1, "name": "Alice", "birthday": "1990-05-01", "createts": "2024-01-01T10:00:00Z"},
            {"id": 2, "name": "Bob", "birthday": "2000-01-01"}
        ]);
        let users = parse_users(body);
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Alice");
        assert_eq!(users[1].createts, "");
    }

    #[test]
    fn test_parse_users_non_array_defaults_to_empty() {
        assert!(parse_users(json!({"error": "oops"})).is_empty());
        assert!(parse_users(Value::Null).is_empty());
    }

    #[test]
    fn test_parse_users_skips_malformed_rows() {
        let body = json!([
            {"id": 1, "name": "Alice", "birthday": "1990-05-01"},
            {"name": "missing id"}
        ]);
        let users = parse_users(body);
        assert_eq!(users.len(), 1);
    }
}
