//! Report rendering for validation results.

use chrono::{DateTime, Utc};
use claimgate_core::{Issue, Mode, ValidationResult};
use serde::Serialize;

use crate::cli::OutputFormat;

/// JSON report envelope.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub ok: bool,
    pub mode: String,
    pub error_count: usize,
    pub warn_count: usize,
    pub issues: &'a [Issue],
    pub checked_at: DateTime<Utc>,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a ValidationResult, mode: Mode) -> Self {
        Self {
            ok: result.ok,
            mode: mode.to_string(),
            error_count: result.error_count(),
            warn_count: result.warn_count(),
            issues: &result.issues,
            checked_at: Utc::now(),
        }
    }
}

/// Render a result in the requested format.
pub fn render(result: &ValidationResult, mode: Mode, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&Report::new(result, mode))?),
    }
}

/// Render a Gate 1 rejection for stderr.
pub fn render_rejection(errors: &[String]) -> String {
    let mut out = format!("Payload rejected by schema ({} problem(s)):", errors.len());
    for error in errors {
        out.push_str("\n  - ");
        out.push_str(error);
    }
    out
}

fn render_text(result: &ValidationResult) -> String {
    let mut out = String::new();
    for issue in &result.issues {
        out.push_str(&issue.to_string());
        out.push('\n');
    }

    let verdict = if result.ok { "PASS" } else { "FAIL" };
    out.push_str(&format!(
        "{}: {} error(s), {} warning(s)",
        verdict,
        result.error_count(),
        result.warn_count()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimgate_core::{validate, Claim};

    #[test]
    fn test_text_report_lists_issues_then_summary() {
        let claims = vec![
            Claim::inference("i1"),
            Claim::new("c1").with_source("RUMOR", 0.2),
        ];
        let result = validate(&claims, Mode::Fail);
        let text = render(&result, Mode::Fail, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ERROR INFERENCE_NO_BASIS i1:"));
        assert!(lines[1].starts_with("WARN INVALID_SOURCE_TYPE c1:"));
        assert_eq!(lines[2], "FAIL: 1 error(s), 1 warning(s)");
    }

    #[test]
    fn test_clean_text_report() {
        let result = validate(&[], Mode::Fail);
        let text = render(&result, Mode::Fail, OutputFormat::Text).unwrap();
        assert_eq!(text, "PASS: 0 error(s), 0 warning(s)");
    }

    #[test]
    fn test_json_report_shape() {
        let claims = vec![Claim::new("x").with_depends_on(["ghost"])];
        let result = validate(&claims, Mode::Advisory);
        let json = render(&result, Mode::Advisory, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["ok"], true);
        assert_eq!(value["mode"], "advisory");
        assert_eq!(value["error_count"], 1);
        assert_eq!(value["issues"][0]["code"], "UNKNOWN_DEPENDENCY");
        assert!(value["checked_at"].is_string());
    }

    #[test]
    fn test_rejection_lists_each_problem() {
        let errors = vec![
            "\"id\" is a required property at /0".to_string(),
            "7 is not of type \"string\" at /1/id".to_string(),
        ];
        let text = render_rejection(&errors);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Payload rejected by schema (2 problem(s)):");
        assert_eq!(lines[2], "  - 7 is not of type \"string\" at /1/id");
    }
}
