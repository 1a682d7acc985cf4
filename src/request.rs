use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::RequestError;
use crate::jaccard::jaccard_similarity;
use crate::tokens::{TokenSet, tokens_from_values};

#[derive(Debug, Clone, PartialEq)]
pub struct TokenPair {
    pub set_a: TokenSet,
    pub set_b: TokenSet,
}

impl TokenPair {
    pub fn similarity(&self) -> f64 {
        jaccard_similarity(&self.set_a, &self.set_b)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Single(TokenPair),
    Batch(Vec<TokenPair>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Single {
        similarity: f64,
    },
    Batch {
        results: Vec<f64>,
    },
    Error {
        error: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

impl From<&RequestError> for Response {
    fn from(err: &RequestError) -> Self {
        Response::Error {
            error: err.kind(),
            message: err.message(),
        }
    }
}

/// Parses, scores and renders one request. Never fails: problems with the
/// input come back as [`Response::Error`].
pub fn handle_request(input: impl AsRef<[u8]>) -> Response {
    match decode_request(input.as_ref()) {
        Ok(request) => evaluate(&request),
        Err(err) => {
            warn!(kind = err.kind(), "rejected request: {err}");
            Response::from(&err)
        }
    }
}

/// Decodes raw input bytes as UTF-8 before parsing.
pub fn decode_request(input: &[u8]) -> Result<Request, RequestError> {
    parse_request(std::str::from_utf8(input)?)
}

pub fn parse_request(input: &str) -> Result<Request, RequestError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RequestError::EmptyInput);
    }

    let payload: Value = serde_json::from_str(trimmed)?;
    let object = payload
        .as_object()
        .ok_or_else(|| RequestError::NotAnObject(json_type(&payload)))?;

    if let Some(pairs) = object.get("pairs") {
        let pairs = pairs
            .as_array()
            .ok_or_else(|| RequestError::PairsNotArray(json_type(pairs)))?;
        let mut parsed = Vec::with_capacity(pairs.len());
        for (index, pair) in pairs.iter().enumerate() {
            let pair_obj = pair.as_object().ok_or(RequestError::PairNotObject {
                index,
                found: json_type(pair),
            })?;
            parsed.push(parse_pair(pair_obj)?);
        }
        debug!(pairs = parsed.len(), "parsed batch request");
        return Ok(Request::Batch(parsed));
    }

    let pair = parse_pair(object)?;
    debug!(
        set_a = pair.set_a.len(),
        set_b = pair.set_b.len(),
        "parsed single request"
    );
    Ok(Request::Single(pair))
}

pub fn evaluate(request: &Request) -> Response {
    match request {
        Request::Single(pair) => Response::Single {
            similarity: pair.similarity(),
        },
        Request::Batch(pairs) => Response::Batch {
            results: pairs.iter().map(TokenPair::similarity).collect(),
        },
    }
}

fn parse_pair(object: &Map<String, Value>) -> Result<TokenPair, RequestError> {
    Ok(TokenPair {
        set_a: parse_set(object, "set_a")?,
        set_b: parse_set(object, "set_b")?,
    })
}

fn parse_set(object: &Map<String, Value>, field: &'static str) -> Result<TokenSet, RequestError> {
    match object.get(field) {
        None => Ok(TokenSet::new()),
        Some(Value::Array(values)) => Ok(tokens_from_values(values)),
        Some(other) => Err(RequestError::SetNotArray {
            field,
            found: json_type(other),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
