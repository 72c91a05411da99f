use anyhow::anyhow;
use serde::Serialize;
use serde_json::Value;

use crate::{ContactFormError, SubmissionDraft};

#[derive(Debug, Serialize)]
pub struct RelayRequestPayload<'a> {
    pub access_key: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

impl<'a> RelayRequestPayload<'a> {
    pub fn new(access_key: &'a str, draft: &'a SubmissionDraft) -> Self {
        RelayRequestPayload {
            access_key,
            name: &draft.name,
            email: &draft.email,
            message: &draft.message,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self)
    }
}

/// The part of a relay reply that decides the outcome.
#[derive(Debug, Clone)]
pub struct RelayResponsePayload {
    success: Value,
}

impl RelayResponsePayload {
    /// Parse a reply body. Any JSON document except `null` is accepted; a
    /// document without a `success` member counts as unsuccessful.
    pub fn from_slice(body: &[u8]) -> Result<Self, ContactFormError> {
        let document: Value = serde_json::from_slice(body)?;
        let success = match document {
            Value::Null => {
                return Err(ContactFormError::Anyhow(anyhow!(
                    "relay replied with a null document"
                )))
            }
            Value::Object(mut members) => {
                members.remove("success").unwrap_or(Value::Null)
            }
            _ => Value::Null,
        };
        Ok(RelayResponsePayload { success })
    }

    pub fn is_success(&self) -> bool {
        is_truthy(&self.success)
    }
}

// JavaScript truthiness of a JSON value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
