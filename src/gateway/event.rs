//! Invocation event delivered by the HTTP gateway.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Event the gateway hands to a function for one HTTP request.
///
/// The wire format uses camelCase keys (`httpMethod`, `headers`, `body`).
/// A missing method defaults to `GET`, matching the platform contract;
/// functions dispatch on the verbatim method string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    /// HTTP method, uppercase, exactly as the gateway received it.
    #[serde(default = "default_http_method")]
    pub http_method: String,
    /// Request headers. Carried for functions that want them.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Raw request body, if any. `None` for body-less requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

fn default_http_method() -> String {
    "GET".to_string()
}

impl GatewayEvent {
    /// Create a new event for the given method, with no headers or body.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            http_method: method.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the event.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the request body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl Default for GatewayEvent {
    fn default() -> Self {
        Self::new(default_http_method())
    }
}
