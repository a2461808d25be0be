//! The merge-gate checks.
//!
//! Each check is a pure function over pre-collected inputs: it receives only
//! the data it needs and returns zero or more findings. No check can
//! terminate the run and no check sees another's results, so one failure
//! never hides the next.

use std::collections::BTreeSet;

use crate::domain::models::{Config, Decision, Finding, StateDocument};
use crate::services::capability::Capability;
use crate::services::render;
use crate::services::signatures::extract_signers;

/// Validate the raw state document against the structural schema. Both files
/// are optional; with either absent the check is a no-op.
pub fn schema_check(
    document_path: &str,
    raw_document: Option<&str>,
    raw_schema: Option<&str>,
    schema_validation: Capability,
) -> Vec<Finding> {
    let (Some(raw_document), Some(raw_schema)) = (raw_document, raw_schema) else {
        return Vec::new();
    };
    if let Capability::Degraded { notice } = schema_validation {
        return vec![Finding::warning(notice)];
    }
    validate_against_schema(document_path, raw_document, raw_schema)
}

#[cfg(feature = "schema-validation")]
fn validate_against_schema(
    document_path: &str,
    raw_document: &str,
    raw_schema: &str,
) -> Vec<Finding> {
    use crate::domain::constants::SCHEMA_PATH;

    let document: serde_json::Value = match serde_json::from_str(raw_document) {
        Ok(value) => value,
        Err(err) => {
            return vec![Finding::block(format!(
                "{document_path} is not valid JSON: {err}"
            ))]
        }
    };
    let schema: serde_json::Value = match serde_json::from_str(raw_schema) {
        Ok(value) => value,
        Err(err) => {
            return vec![Finding::block(format!(
                "{SCHEMA_PATH} is not valid JSON: {err}"
            ))]
        }
    };
    let compiled = match jsonschema::JSONSchema::compile(&schema) {
        Ok(compiled) => compiled,
        Err(err) => {
            return vec![Finding::block(format!(
                "{SCHEMA_PATH} is not a valid schema: {err}"
            ))]
        }
    };
    let findings = match compiled.validate(&document) {
        Ok(()) => Vec::new(),
        Err(errors) => {
            let messages: Vec<String> = errors.map(|err| err.to_string()).collect();
            vec![Finding::block(format!(
                "{document_path} fails schema validation: {}",
                messages.join(" | ")
            ))]
        }
    };
    findings
}

// Unreachable in practice: a degraded capability returns before this stub.
#[cfg(not(feature = "schema-validation"))]
fn validate_against_schema(
    _document_path: &str,
    _raw_document: &str,
    _raw_schema: &str,
) -> Vec<Finding> {
    Vec::new()
}

/// Every recorded decision must carry a rationale, at least one rejected
/// alternative, and an author. Rules apply independently, so one decision can
/// report several violations at once.
pub fn decision_audit_check(document: Option<&StateDocument>) -> Vec<Finding> {
    let Some(document) = document else {
        return Vec::new();
    };
    let mut findings = Vec::new();
    for decision in &document.decisions {
        let id = decision_label(decision);
        if decision.why.chars().count() < 5 {
            findings.push(Finding::block(format!(
                "Decision {id} has no rationale (why < 5 chars)"
            )));
        }
        if decision.rejected.is_empty() {
            findings.push(Finding::block(format!(
                "Decision {id} has no rejected alternatives"
            )));
        }
        if decision.by.is_empty() {
            findings.push(Finding::block(format!("Decision {id} has no author")));
        }
    }
    findings
}

fn decision_label(decision: &Decision) -> &str {
    if decision.id.is_empty() {
        "?"
    } else {
        &decision.id
    }
}

/// Changes touching protected paths require a quorum of distinct signatures
/// somewhere in the evidence text. Purely path-gated: when no protected path
/// is touched there is no requirement at all.
pub fn quorum_check(changed_files: &[String], evidence: &str, config: &Config) -> Vec<Finding> {
    let protected: BTreeSet<&str> = config.protected_paths.iter().map(String::as_str).collect();
    let touched: BTreeSet<&str> = changed_files
        .iter()
        .map(String::as_str)
        .filter(|file| protected.contains(file))
        .collect();
    if touched.is_empty() {
        return Vec::new();
    }

    let signers = extract_signers(evidence);
    if signers.len() >= config.quorum_min {
        return Vec::new();
    }

    let signer_list = if signers.is_empty() {
        "none".to_string()
    } else {
        signers
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    vec![Finding::block(format!(
        "Protected path(s) modified: {}. Quorum requires {} distinct signatures, \
         found {}: {}. Add SIGNED: <node_id> | <timestamp> | <role> | <confidence> \
         to PR body.",
        touched.into_iter().collect::<Vec<_>>().join(", "),
        config.quorum_min,
        signers.len(),
        signer_list
    ))]
}

/// Advisory only: large changes inform reviewers, they never halt delivery.
pub fn size_check(changed_count: usize, diff_stat: Option<&str>, config: &Config) -> Vec<Finding> {
    let mut findings = Vec::new();
    if changed_count > config.max_files_changed {
        findings.push(Finding::warning(format!(
            "Large PR: {changed_count} files changed (threshold: {})",
            config.max_files_changed
        )));
    }
    if let Some(total) = diff_stat.and_then(diff_stat_total) {
        if total > config.max_lines_changed {
            findings.push(Finding::warning(format!(
                "Large PR: {total} lines changed (threshold: {})",
                config.max_lines_changed
            )));
        }
    }
    findings
}

// Total changed lines from the summary line of `git diff --stat`: every
// bare-digit token except the leading file count. `None` when the line does
// not carry at least two numbers, in which case the line half of the check
// is skipped.
fn diff_stat_total(stat: &str) -> Option<usize> {
    let last = stat.lines().rev().find(|line| !line.trim().is_empty())?;
    let numbers: Vec<usize> = last
        .split_whitespace()
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|token| token.parse().ok())
        .collect();
    if numbers.len() > 1 {
        Some(numbers.iter().skip(1).sum())
    } else {
        None
    }
}

/// The committed artifact must match a fresh render byte for byte. The gate
/// never regenerates; the author does, with `conclave sync`.
pub fn sync_check(
    document: Option<&StateDocument>,
    artifact: Option<&str>,
    config: &Config,
) -> Vec<Finding> {
    let output = &config.sync_output;
    let Some(artifact) = artifact else {
        return vec![Finding::block(format!("{output} not found. Run: conclave sync"))];
    };
    let fresh = document.map(|doc| render::render(doc, config));
    if fresh.as_deref() == Some(artifact) {
        Vec::new()
    } else {
        vec![Finding::block(format!(
            "{output} is out of sync. Run: conclave sync"
        ))]
    }
}
