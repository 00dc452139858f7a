//! Claim records as they arrive after Gate 1.
//!
//! Claims are deserialized leniently: every field except `id` is optional,
//! and `source_type` stays raw text so that unrecognised values can be
//! reported by the rule checker instead of failing deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Epistemic type of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimType {
    /// Directly evidenced, falsifiable, cites no other claims
    Fact,
    /// Derived conclusion that must cite a basis
    Inference,
}

/// Provenance class of a claim's evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    Direct,
    Partial,
    Context,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Direct => "DIRECT",
            SourceType::Partial => "PARTIAL",
            SourceType::Context => "CONTEXT",
        }
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DIRECT" => Ok(SourceType::Direct),
            "PARTIAL" => Ok(SourceType::Partial),
            "CONTEXT" => Ok(SourceType::Context),
            other => Err(format!("Unknown source type: {}", other)),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single evidentiary assertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Claim {
    /// Identifier, intended unique within one validation call
    pub id: String,

    /// FACT or INFERENCE; absent means no type-specific rules apply
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub claim_type: Option<ClaimType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub falsifiable: Option<bool>,

    /// Outgoing edges of the claim graph, in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assumptions: Option<Vec<String>>,

    /// Raw source type text (see [`SourceType`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<Value>>,

    /// Accepted alias for `evidence`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<Vec<Value>>,
}

impl Claim {
    /// Create an untyped claim with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Create a FACT claim.
    pub fn fact(id: impl Into<String>) -> Self {
        Self {
            claim_type: Some(ClaimType::Fact),
            ..Self::new(id)
        }
    }

    /// Create an INFERENCE claim.
    pub fn inference(id: impl Into<String>) -> Self {
        Self {
            claim_type: Some(ClaimType::Inference),
            ..Self::new(id)
        }
    }

    pub fn with_falsifiable(mut self, falsifiable: bool) -> Self {
        self.falsifiable = Some(falsifiable);
        self
    }

    pub fn with_evidence<I, V>(mut self, evidence: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.evidence = Some(evidence.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_support<I, V>(mut self, support: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.support = Some(support.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_depends_on<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_assumptions<I, S>(mut self, assumptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assumptions = Some(assumptions.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_source(mut self, source_type: impl Into<String>, confidence: f64) -> Self {
        self.source_type = Some(source_type.into());
        self.confidence_score = Some(confidence);
        self
    }

    /// Supporting references: `evidence` when non-empty, otherwise `support`.
    pub fn supporting_evidence(&self) -> &[Value] {
        match (&self.evidence, &self.support) {
            (Some(evidence), _) if !evidence.is_empty() => evidence.as_slice(),
            (_, Some(support)) => support.as_slice(),
            _ => &[],
        }
    }

    /// Dependency identifiers, empty when absent.
    pub fn dependencies(&self) -> &[String] {
        self.depends_on.as_deref().unwrap_or(&[])
    }

    /// Assumptions, empty when absent.
    pub fn assumption_list(&self) -> &[String] {
        self.assumptions.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_claim() {
        let claim: Claim = serde_json::from_value(json!({
            "id": "f1",
            "type": "FACT",
            "falsifiable": true,
            "evidence": ["lab-report-7", {"doc": "scan.pdf"}],
            "source_type": "DIRECT",
            "confidence_score": 0.9
        }))
        .unwrap();

        assert_eq!(claim.id, "f1");
        assert_eq!(claim.claim_type, Some(ClaimType::Fact));
        assert_eq!(claim.falsifiable, Some(true));
        assert_eq!(claim.supporting_evidence().len(), 2);
        assert_eq!(claim.source_type.as_deref(), Some("DIRECT"));
    }

    #[test]
    fn test_minimal_claim_has_no_optional_fields() {
        let claim: Claim = serde_json::from_value(json!({ "id": "bare" })).unwrap();
        assert_eq!(claim, Claim::new("bare"));
        assert!(claim.dependencies().is_empty());
        assert!(claim.assumption_list().is_empty());
        assert!(claim.supporting_evidence().is_empty());
    }

    #[test]
    fn test_unknown_source_type_is_kept_raw() {
        let claim: Claim =
            serde_json::from_value(json!({ "id": "c1", "source_type": "RUMOR" })).unwrap();
        assert_eq!(claim.source_type.as_deref(), Some("RUMOR"));
        assert!("RUMOR".parse::<SourceType>().is_err());
    }

    #[test]
    fn test_evidence_preferred_over_support() {
        let claim = Claim::fact("f1")
            .with_evidence(["e1"])
            .with_support(["s1", "s2"]);
        assert_eq!(claim.supporting_evidence(), &[json!("e1")]);
    }

    #[test]
    fn test_empty_evidence_falls_back_to_support() {
        let claim = Claim::fact("f1")
            .with_evidence(Vec::<Value>::new())
            .with_support(["s1"]);
        assert_eq!(claim.supporting_evidence(), &[json!("s1")]);
    }

    #[test]
    fn test_serialize_uses_type_key() {
        let value = serde_json::to_value(Claim::inference("i1").with_assumptions(["a"])).unwrap();
        assert_eq!(value["type"], "INFERENCE");
        assert!(value.get("falsifiable").is_none());
    }

    #[test]
    fn test_source_type_round_trips_through_str() {
        for source in [SourceType::Direct, SourceType::Partial, SourceType::Context] {
            assert_eq!(source.as_str().parse::<SourceType>(), Ok(source));
        }
    }
}
