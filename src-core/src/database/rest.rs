//! REST Database Client
//!
//! Talks to a Realtime Database over its REST API: every node is addressable
//! as `{base}/{path}.json`, and the HTTP verb picks the operation.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder};
use serde_json::{Map, Value};

use super::config::DatabaseConfig;
use super::reference::Reference;
use super::traits::{keep_last, sorted_children, Database, Snapshot};
use crate::domain::{DomainError, DomainResult};

/// Characters left as-is in path segments and query values
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Remote implementation of [`Database`]
#[derive(Debug, Clone)]
pub struct RestDatabase {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl RestDatabase {
    pub fn new(config: &DatabaseConfig) -> DomainResult<Self> {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &DatabaseConfig) -> DomainResult<Self> {
        let base_url = config.resolved_url().ok_or_else(|| {
            DomainError::InvalidInput("no database URL or project id configured".to_string())
        })?;
        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a node with optional query parameters (values get encoded)
    pub fn url_for(&self, reference: &Reference, query: &[(&str, String)]) -> String {
        let mut url = self.base_url.clone();
        if reference.is_root() {
            url.push('/');
        }
        for segment in reference.segments() {
            url.push('/');
            url.extend(utf8_percent_encode(segment, UNRESERVED));
        }
        url.push_str(".json");

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(token) = &self.auth_token {
            params.push(("auth", token.clone()));
        }
        params.extend(query.iter().cloned());
        for (i, (name, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(name);
            url.push('=');
            url.extend(utf8_percent_encode(value, UNRESERVED));
        }
        url
    }

    /// Send a request and decode the JSON body
    async fn send(&self, request: RequestBuilder) -> DomainResult<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Remote(status.as_u16(), error_message(&body)));
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| DomainError::Serialization(e.to_string()))
    }
}

#[async_trait(?Send)]
impl Database for RestDatabase {
    async fn get(&self, reference: &Reference) -> DomainResult<Option<Value>> {
        let url = self.url_for(reference, &[]);
        log::debug!("GET {}", reference);
        let value = self.send(self.client.get(url)).await?;
        Ok(Some(value).filter(|v| !v.is_null()))
    }

    async fn limit_to_last(&self, reference: &Reference, limit: usize) -> DomainResult<Vec<Snapshot>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let url = self.url_for(
            reference,
            &[
                ("orderBy", "\"$key\"".to_string()),
                ("limitToLast", limit.to_string()),
            ],
        );
        log::debug!("GET {} limitToLast={}", reference, limit);
        let value = self.send(self.client.get(url)).await?;
        // The response is a JSON object, so ordering has to be restored here
        Ok(keep_last(sorted_children(value), limit))
    }

    async fn count_children(&self, reference: &Reference) -> DomainResult<usize> {
        let url = self.url_for(reference, &[("shallow", "true".to_string())]);
        log::debug!("GET {} shallow", reference);
        let value = self.send(self.client.get(url)).await?;
        Ok(count_shallow(&value))
    }

    async fn push(&self, reference: &Reference, value: Value) -> DomainResult<String> {
        let url = self.url_for(reference, &[]);
        log::debug!("POST {}", reference);
        let response = self.send(self.client.post(url).json(&value)).await?;
        parse_push_response(&response)
    }

    async fn update(&self, reference: &Reference, patch: Map<String, Value>) -> DomainResult<()> {
        let url = self.url_for(reference, &[]);
        log::debug!("PATCH {}", reference);
        self.send(self.client.patch(url).json(&patch)).await?;
        Ok(())
    }

    async fn remove(&self, reference: &Reference) -> DomainResult<()> {
        let url = self.url_for(reference, &[]);
        log::debug!("DELETE {}", reference);
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

/// A push answers `{"name": "<generated key>"}`
pub(crate) fn parse_push_response(response: &Value) -> DomainResult<String> {
    response
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| DomainError::Serialization(format!("unexpected push response: {}", response)))
}

/// A shallow read answers `{"<key>": true, ...}`, or a bare value for leaves
pub(crate) fn count_shallow(value: &Value) -> usize {
    value.as_object().map_or(0, Map::len)
}

/// Error bodies look like `{"error": "Permission denied"}`
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn db(token: Option<&str>) -> RestDatabase {
        let config = DatabaseConfig {
            database_url: Some("https://demo-default-rtdb.europe-west1.firebasedatabase.app/".to_string()),
            auth_token: token.map(str::to_string),
            ..DatabaseConfig::default()
        };
        RestDatabase::new(&config).unwrap()
    }

    #[test]
    fn test_requires_url() {
        let err = RestDatabase::new(&DatabaseConfig::default()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_url_for_node() {
        let db = db(None);
        assert_eq!(
            db.url_for(&Reference::new("items/-NxA1"), &[]),
            "https://demo-default-rtdb.europe-west1.firebasedatabase.app/items/-NxA1.json"
        );
        assert_eq!(
            db.url_for(&Reference::root(), &[]),
            "https://demo-default-rtdb.europe-west1.firebasedatabase.app/.json"
        );
    }

    #[test]
    fn test_url_for_limit_query_with_auth() {
        let db = db(Some("s3cret"));
        let url = db.url_for(
            &Reference::new("items"),
            &[
                ("orderBy", "\"$key\"".to_string()),
                ("limitToLast", "4".to_string()),
            ],
        );
        assert_eq!(
            url,
            "https://demo-default-rtdb.europe-west1.firebasedatabase.app/items.json\
             ?auth=s3cret&orderBy=%22%24key%22&limitToLast=4"
        );
    }

    #[test]
    fn test_url_encodes_segments() {
        let db = db(None);
        let url = db.url_for(&Reference::new("my items/a#b"), &[]);
        assert!(url.ends_with("/my%20items/a%23b.json"));
    }

    #[test]
    fn test_parse_push_response() {
        assert_eq!(parse_push_response(&json!({ "name": "-NxA1" })).unwrap(), "-NxA1");
        assert!(parse_push_response(&json!({})).is_err());
    }

    #[test]
    fn test_count_shallow() {
        assert_eq!(count_shallow(&json!({ "a": true, "b": true })), 2);
        assert_eq!(count_shallow(&json!(null)), 0);
        assert_eq!(count_shallow(&json!(42)), 0);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"error" : "Permission denied"}"#), "Permission denied");
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
    }
}
