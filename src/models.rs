//! API models for request/response types.
//!
//! Defines the JSON request/response structures shared by the embedding
//! service and the gateway.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ServiceError;

/// Validated input of an embed request.
///
/// The variant records which request field was used, which in turn
/// decides the shape of the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedInput {
    /// `{"text": "..."}`
    Single(String),
    /// `{"texts": ["...", ...]}`, order preserved.
    Batch(Vec<String>),
}

impl EmbedInput {
    /// Validate a parsed JSON payload.
    ///
    /// `texts` takes precedence when both fields are present.
    pub fn from_payload(payload: &Value) -> Result<Self, ServiceError> {
        let object = payload
            .as_object()
            .ok_or_else(|| invalid("Payload must be a JSON object"))?;

        if let Some(texts) = object.get("texts") {
            let items = texts
                .as_array()
                .ok_or_else(|| invalid("'texts' must be a list of strings"))?;
            let texts = items
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| invalid("'texts' must be a list of strings"))?;
            return Ok(EmbedInput::Batch(texts));
        }

        if let Some(text) = object.get("text") {
            let text = text
                .as_str()
                .ok_or_else(|| invalid("'text' must be a string"))?;
            return Ok(EmbedInput::Single(text.to_owned()));
        }

        Err(invalid(
            "Provide 'text' (string) or 'texts' (list of strings)",
        ))
    }

    /// The input strings in request order.
    pub fn texts(&self) -> &[String] {
        match self {
            EmbedInput::Single(text) => std::slice::from_ref(text),
            EmbedInput::Batch(texts) => texts,
        }
    }

    pub fn len(&self) -> usize {
        self.texts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts().is_empty()
    }
}

fn invalid(message: &str) -> ServiceError {
    ServiceError::InvalidPayload(message.to_string())
}

/// Decode a raw request body leniently.
///
/// Bodies that are not JSON, or whose JSON value is empty or falsy
/// (`null`, `false`, `0`, `""`, `[]`, `{}`), decode to an empty object so
/// that validation reports the missing fields instead of a parse error.
pub fn decode_payload(body: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) if !is_falsy(&value) => value,
        _ => Value::Object(Map::new()),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Response of `POST /embed`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum EmbedResponse {
    /// Answer to a `text` request.
    Single { embedding: Vec<f64> },
    /// Answer to a `texts` request, aligned with the input list.
    Batch { embeddings: Vec<Vec<f64>> },
}

/// Health check response of the embedding service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the process serves requests.
    pub status: String,
    /// Dimension of every produced vector.
    pub vector_size: usize,
}

/// Health check response of the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayHealthResponse {
    pub status: String,
    /// Upstream health body, or `{"status": "unreachable"}`.
    pub biobert: Value,
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
