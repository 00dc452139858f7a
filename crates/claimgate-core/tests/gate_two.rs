//! End-to-end behaviour of the Gate 2 pipeline on JSON claim payloads.

use claimgate_core::{
    check_payload, validate, validate_with_config, Claim, ClaimSet, IssueCode, Mode, Severity,
    ValidatorConfig,
};
use serde_json::json;

fn claims(value: serde_json::Value) -> Vec<Claim> {
    serde_json::from_value(value).unwrap()
}

fn count(result: &claimgate_core::ValidationResult, code: IssueCode) -> usize {
    result.issues.iter().filter(|i| i.code == code).count()
}

#[test]
fn test_well_formed_list_is_clean() {
    let input = claims(json!([
        { "id": "f1", "type": "FACT", "falsifiable": true, "evidence": ["ct-scan-2024"],
          "source_type": "DIRECT", "confidence_score": 0.95 },
        { "id": "f2", "type": "FACT", "falsifiable": true, "support": [{"doc": "chart"}],
          "source_type": "PARTIAL", "confidence_score": 0.7 },
        { "id": "i1", "type": "INFERENCE", "depends_on": ["f1", "f2"],
          "source_type": "CONTEXT", "confidence_score": 0.5 },
        { "id": "i2", "type": "INFERENCE", "assumptions": ["dosage unchanged"] },
        { "id": "note", "depends_on": ["i1"] }
    ]));

    let result = validate(&input, Mode::Fail);

    assert!(result.ok);
    assert!(result.issues.is_empty());
}

#[test]
fn test_duplicate_id_reported_exactly_once() {
    let input = claims(json!([{ "id": "a" }, { "id": "a" }]));
    let result = validate(&input, Mode::Fail);

    assert_eq!(count(&result, IssueCode::DuplicateClaimId), 1);
    assert_eq!(result.issues[0].claim_id, "a");
    assert!(!result.ok);
}

#[test]
fn test_fact_not_falsifiable() {
    let input = claims(json!([
        { "id": "f1", "type": "FACT", "falsifiable": false, "support": ["x"] }
    ]));
    let result = validate(&input, Mode::Fail);

    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].code, IssueCode::FactNotFalsifiable);
    assert_eq!(result.issues[0].severity, Severity::Error);
    assert_eq!(result.issues[0].claim_id, "f1");
}

#[test]
fn test_inference_without_basis() {
    let input = claims(json!([{ "id": "i1", "type": "INFERENCE" }]));
    let result = validate(&input, Mode::Fail);

    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].code, IssueCode::InferenceNoBasis);
    assert_eq!(result.issues[0].claim_id, "i1");
}

#[test]
fn test_context_confidence_above_ceiling() {
    let input = claims(json!([
        { "id": "c1", "source_type": "CONTEXT", "confidence_score": 0.8 }
    ]));
    let result = validate(&input, Mode::Fail);

    assert_eq!(result.issues.len(), 1);
    let issue = &result.issues[0];
    assert_eq!(issue.code, IssueCode::ConfidenceExceedsCeiling);
    assert!(issue.message.contains("0.8"));
    assert!(issue.message.contains("0.5"));
}

#[test]
fn test_mutual_dependency_is_a_cycle() {
    let input = claims(json!([
        { "id": "a", "depends_on": ["b"] },
        { "id": "b", "depends_on": ["a"] }
    ]));
    let result = validate(&input, Mode::Fail);

    let cycle = result
        .issues
        .iter()
        .find(|i| i.code == IssueCode::DependencyCycle)
        .expect("cycle reported");
    assert!(cycle.message.contains("a -> b -> a"));
    assert!(!result.ok);
}

#[test]
fn test_closing_claim_stops_but_reports_dangling_edges() {
    let input = claims(json!([
        { "id": "a", "depends_on": ["b"] },
        { "id": "b", "depends_on": ["a", "c", "ghost"] },
        { "id": "c", "depends_on": ["a"] }
    ]));
    let result = validate(&input, Mode::Fail);

    assert_eq!(count(&result, IssueCode::DependencyCycle), 1);
    assert_eq!(count(&result, IssueCode::UnknownDependency), 1);
    assert_eq!(result.issues_for("b").count(), 2);
}

#[test]
fn test_unknown_dependency_completes_normally() {
    let input = claims(json!([{ "id": "x", "depends_on": ["ghost"] }]));
    let result = validate(&input, Mode::Fail);

    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].code, IssueCode::UnknownDependency);
    assert_eq!(result.issues[0].claim_id, "x");
}

#[test]
fn test_repeated_runs_are_identical() {
    let input = claims(json!([
        { "id": "a", "depends_on": ["b", "ghost"] },
        { "id": "b", "depends_on": ["c"] },
        { "id": "c", "depends_on": ["a"], "type": "FACT" },
        { "id": "a", "type": "INFERENCE" },
        { "id": "d", "source_type": "HEARSAY" }
    ]));

    let first = validate(&input, Mode::Fail);
    let second = validate(&input, Mode::Fail);

    assert_eq!(first, second);
    assert!(!first.issues.is_empty());
}

#[test]
fn test_warn_only_list_passes() {
    let input = claims(json!([{ "id": "d", "source_type": "HEARSAY", "confidence_score": 1.0 }]));
    let result = validate(&input, Mode::Fail);

    assert!(result.ok);
    assert_eq!(result.warn_count(), 1);
}

#[test]
fn test_advisory_mode_reports_but_passes() {
    let input = claims(json!([
        { "id": "f1", "type": "FACT" },
        { "id": "x", "depends_on": ["ghost"] }
    ]));

    let strict = validate(&input, Mode::Fail);
    let advisory = validate(&input, Mode::from("warn"));

    assert!(!strict.ok);
    assert!(advisory.ok);
    assert_eq!(strict.issues, advisory.issues);
}

#[test]
fn test_multiple_issues_on_one_fact() {
    let input = claims(json!([
        { "id": "f1", "type": "FACT", "depends_on": ["f0"], "assumptions": ["a"],
          "source_type": "PARTIAL", "confidence_score": 0.9 },
        { "id": "f0", "type": "FACT", "falsifiable": true, "evidence": ["e"] }
    ]));
    let result = validate(&input, Mode::Fail);
    let codes: Vec<IssueCode> = result.issues_for("f1").map(|i| i.code).collect();

    assert_eq!(
        codes,
        vec![
            IssueCode::FactNotFalsifiable,
            IssueCode::FactNoEvidence,
            IssueCode::FactHasDependsOn,
            IssueCode::FactHasAssumptions,
            IssueCode::ConfidenceExceedsCeiling,
        ]
    );
}

#[test]
fn test_duplicate_entries_are_rule_checked() {
    let input = claims(json!([
        { "id": "i1", "type": "INFERENCE", "assumptions": ["x"] },
        { "id": "i1", "type": "INFERENCE" }
    ]));
    let result = validate(&input, Mode::Fail);

    assert_eq!(count(&result, IssueCode::DuplicateClaimId), 1);
    assert_eq!(count(&result, IssueCode::InferenceNoBasis), 1);
}

#[test]
fn test_yaml_payload_through_both_gates() {
    let set = ClaimSet::from_yaml(
        r#"
claims:
  - id: "obs-1"
    type: "FACT"
    falsifiable: true
    evidence: ["thermometer reading"]
  - id: "inf-1"
    type: "INFERENCE"
    depends_on: ["obs-1", "obs-2"]
"#,
    )
    .unwrap();

    let result = validate_with_config(&set.claims, &ValidatorConfig::default());
    assert_eq!(count(&result, IssueCode::UnknownDependency), 1);
}

#[test]
fn test_check_payload_with_custom_ceiling() {
    let config = ValidatorConfig::from_yaml("ceilings:\n  direct: 0.9\n").unwrap();
    let payload = json!([{ "id": "d1", "source_type": "DIRECT", "confidence_score": 0.95 }]);

    let result = check_payload(payload, &config).unwrap();
    assert!(result.has_code(IssueCode::ConfidenceExceedsCeiling));
}
