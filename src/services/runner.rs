//! Input collection and gate aggregation.
//!
//! The bundle is gathered once per run; every check receives slices of it
//! and nothing else. Aggregation is fixed-order and total: all checks run,
//! warnings surface before blocks, pass means zero blocking findings.

use std::path::Path;

use crate::domain::constants::SCHEMA_PATH;
use crate::domain::models::{Config, Finding, GateReport, Severity, StateDocument};
use crate::services::capability::Capabilities;
use crate::services::{checks, git};

/// Everything the checks consume.
pub struct GateInput {
    pub changed_files: Vec<String>,
    /// PR description joined with recent commit messages.
    pub evidence: String,
    pub diff_stat: Option<String>,
    pub raw_document: Option<String>,
    pub raw_schema: Option<String>,
    /// Parsed form of `raw_document`; `None` when absent or unparseable.
    pub document: Option<StateDocument>,
    pub artifact: Option<String>,
}

/// Gather the bundle from the collaborators: environment text, commit
/// messages, the diff statistic, and the document, schema, and artifact
/// files. Missing pieces stay `None`; the checks decide what that means.
pub fn collect(config: &Config, changed_files: Vec<String>, base: &str) -> GateInput {
    let pr_body = std::env::var("PR_BODY").unwrap_or_default();
    let evidence = format!("{}\n{}", pr_body, git::recent_commit_messages());
    let raw_document = read_optional(&config.sync_source);
    let document = raw_document
        .as_deref()
        .and_then(|raw| serde_json::from_str(raw).ok());
    GateInput {
        changed_files,
        evidence,
        diff_stat: git::diff_stat(base),
        raw_document,
        raw_schema: read_optional(SCHEMA_PATH),
        document,
        artifact: read_optional(&config.sync_output),
    }
}

fn read_optional(path: &str) -> Option<String> {
    if !Path::new(path).exists() {
        return None;
    }
    std::fs::read_to_string(path).ok()
}

/// Run every check in fixed order over the shared bundle and fold the
/// findings into a report. A malformed-config finding from the caller slots
/// in ahead of the checks.
pub fn evaluate(
    input: &GateInput,
    config: &Config,
    caps: &Capabilities,
    config_finding: Option<Finding>,
) -> GateReport {
    let mut findings: Vec<Finding> = Vec::new();
    findings.extend(config_finding);
    findings.extend(checks::schema_check(
        &config.sync_source,
        input.raw_document.as_deref(),
        input.raw_schema.as_deref(),
        caps.schema_validation,
    ));
    findings.extend(checks::decision_audit_check(input.document.as_ref()));
    findings.extend(checks::quorum_check(
        &input.changed_files,
        &input.evidence,
        config,
    ));
    findings.extend(checks::size_check(
        input.changed_files.len(),
        input.diff_stat.as_deref(),
        config,
    ));
    findings.extend(checks::sync_check(
        input.document.as_ref(),
        input.artifact.as_deref(),
        config,
    ));
    build_report(findings)
}

fn build_report(findings: Vec<Finding>) -> GateReport {
    let mut warnings = Vec::new();
    let mut blocks = Vec::new();
    for finding in findings {
        match finding.severity {
            Severity::Warning => warnings.push(finding.message),
            Severity::Block => blocks.push(finding.message),
        }
    }
    let overall = if blocks.is_empty() { "pass" } else { "fail" };
    GateReport {
        overall: overall.to_string(),
        warnings,
        blocks,
    }
}
