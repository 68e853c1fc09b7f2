//! crates/listing_insights_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or serialization format.

use serde_json::Value;

/// A stored login identity. Only used internally for credential checks.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub username: String,
    pub password_hash: String,
}

/// One product listing supplied with an analysis request. Never persisted.
///
/// Every field is optional on the wire; `price` stays a raw JSON value
/// because callers send numbers and strings interchangeably.
#[derive(Debug, Clone, Default)]
pub struct ListingItem {
    pub title: Option<String>,
    pub price: Option<Value>,
    pub description: Option<String>,
}

impl ListingItem {
    /// Builds a `ListingItem` from a loose JSON value. Non-object entries
    /// produce an empty item that renders with placeholder fields.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        Self {
            title: map.get("title").and_then(|v| v.as_str()).map(str::to_string),
            price: map.get("price").cloned(),
            description: map
                .get("description")
                .and_then(|v| v.as_str())
                .map(str::to_string),
        }
    }
}
