//! Payload types returned by the adapter.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::ClientError;

/// A decoded JSON response body.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsePayload(Value);

impl ResponsePayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Raw JSON body.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Convert the body into a typed value.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(T::deserialize(&self.0)?)
    }
}

impl From<Value> for ResponsePayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub message: String,
}

impl HealthReport {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
