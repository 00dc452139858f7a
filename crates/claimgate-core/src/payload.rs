//! Claim payload loading.
//!
//! Raw documents go through Gate 1 (schema) before they are deserialized
//! into typed claims. Accepted shapes are a bare claim array or an object
//! with a `claims` array.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::claim::Claim;
use crate::schema::validate_payload_schema;
use crate::GateError;

/// An ordered list of claims that passed Gate 1.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClaimSet {
    pub claims: Vec<Claim>,
}

impl ClaimSet {
    pub fn new(claims: Vec<Claim>) -> Self {
        Self { claims }
    }

    /// Run Gate 1 on a JSON value, then deserialize it.
    pub fn from_value(value: Value) -> Result<Self, GateError> {
        validate_payload_schema(&value).map_err(GateError::Schema)?;

        let list = match value {
            Value::Object(mut map) => map.remove("claims").unwrap_or(Value::Array(vec![])),
            other => other,
        };
        let claims: Vec<Claim> = serde_json::from_value(list)?;
        debug!(claims = claims.len(), "payload passed gate 1");

        Ok(Self { claims })
    }

    /// Parse a payload from JSON string.
    pub fn from_json(json: &str) -> Result<Self, GateError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a payload from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, GateError> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Parse a payload from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GateError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a payload from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, GateError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load by extension: `.yaml` / `.yml` as YAML, anything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GateError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_json_file(path),
        }
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}
