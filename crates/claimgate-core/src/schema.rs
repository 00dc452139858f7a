//! Gate 1: structural checks on raw claim payloads.
//!
//! A payload is either a bare array of claim objects or an object carrying
//! that array under `claims` (other top-level keys are ignored). The
//! embedded schema branches on the top-level type with `if`/`then`/`else`
//! so a bad claim is reported at its own location (`/3/id`,
//! `/claims/0/confidence_score`) instead of as one opaque mismatch at the
//! root.
//!
//! Nothing epistemic happens here: falsifiability, evidence, ceilings and
//! the dependency graph are Gate 2's job, and `source_type` is accepted as
//! any string so that unknown values surface as `INVALID_SOURCE_TYPE`.

use std::sync::OnceLock;

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

/// Embedded claim payload schema (loaded at compile time).
pub const CLAIMS_SCHEMA_JSON: &str = include_str!("../../../schema/claims.schema.json");

/// Location label for violations on the payload itself.
const ROOT_LOCATION: &str = "payload root";

static PAYLOAD_VALIDATOR: OnceLock<Result<Validator, String>> = OnceLock::new();

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to load schema: {0}")]
    LoadError(String),
}

fn payload_validator() -> Result<&'static Validator, SchemaError> {
    PAYLOAD_VALIDATOR
        .get_or_init(compile)
        .as_ref()
        .map_err(|e| SchemaError::LoadError(e.clone()))
}

fn compile() -> Result<Validator, String> {
    let schema: Value = serde_json::from_str(CLAIMS_SCHEMA_JSON)
        .map_err(|e| format!("Invalid schema JSON: {}", e))?;
    jsonschema::options()
        .build(&schema)
        .map_err(|e| format!("Failed to compile schema: {}", e))
}

/// JSON pointer of a violation, or [`ROOT_LOCATION`] for the payload itself.
fn location(pointer: &str) -> &str {
    if pointer.is_empty() {
        ROOT_LOCATION
    } else {
        pointer
    }
}

/// Check a raw payload before it is deserialized into claims.
///
/// Accepts `[claim, ...]` or `{"claims": [claim, ...], ...}`. Each claim
/// must be an object with a non-empty string `id`; when present, `type`
/// must be `FACT` or `INFERENCE`, `confidence_score` a number in `[0, 1]`,
/// `falsifiable` a boolean, `depends_on` an array of non-empty strings, and
/// `assumptions` / `evidence` / `support` arrays. Extra claim fields such
/// as statement text pass through.
///
/// On failure every violation is returned as `"<message> at <location>"`,
/// where the location is the JSON pointer into the payload (`/0/id`) or
/// `payload root`.
pub fn validate_payload_schema(payload: &Value) -> Result<(), Vec<String>> {
    let validator = payload_validator().map_err(|e| vec![e.to_string()])?;

    let errors: Vec<String> = validator
        .iter_errors(payload)
        .map(|e| {
            let pointer = e.instance_path.to_string();
            format!("{} at {}", e, location(&pointer))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check whether a payload passes Gate 1.
pub fn is_valid_payload(payload: &Value) -> bool {
    payload_validator()
        .map(|v| v.is_valid(payload))
        .unwrap_or(false)
}
