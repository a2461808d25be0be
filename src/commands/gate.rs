use crate::cli::Cli;
use crate::domain::models::{Config, Finding, GateReport};
use crate::services::{audit, capability, config, git, output, runner};

/// Evaluate every merge gate against the diff from the base revision.
/// Exit code 0 on pass (including an empty diff), 1 on any blocking finding.
pub fn handle_gate(cli: &Cli, base_override: Option<&str>) -> anyhow::Result<i32> {
    let caps = capability::probe();
    let base = git::base_ref(base_override);
    let changed_files = git::changed_files(&base);

    if changed_files.is_empty() {
        output::print_one(cli.json, GateReport::empty_pass(), |_| {
            "GATES: No changes detected".to_string()
        })?;
        audit::record(
            "gate",
            serde_json::json!({"base": base, "overall": "pass", "changed_files": 0}),
        );
        return Ok(0);
    }

    // A malformed override becomes a blocking finding while the checks still
    // run against the defaults.
    let (config, config_finding) = match config::load(&cli.config, &caps) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(Finding::block(format!(
                "{} is malformed: {err:#}",
                cli.config
            ))),
        ),
    };

    let input = runner::collect(&config, changed_files, &base);
    let report = runner::evaluate(&input, &config, &caps, config_finding);
    let passed = report.passed();

    audit::record(
        "gate",
        serde_json::json!({
            "base": base,
            "overall": report.overall,
            "warnings": report.warnings.len(),
            "blocks": report.blocks.len(),
        }),
    );
    output::print_outcome(cli.json, passed, &report, |r| gate_text(r))?;
    Ok(if passed { 0 } else { 1 })
}

// Section layout for terminals and CI logs: advisory warnings first, then
// the verdict with one line per blocking finding.
fn gate_text(report: &GateReport) -> String {
    let mut lines: Vec<String> = Vec::new();
    if !report.warnings.is_empty() {
        lines.push(String::new());
        lines.push("=== WARNINGS ===".to_string());
        for warning in &report.warnings {
            lines.push(format!("  ⚠ {warning}"));
        }
    }
    lines.push(String::new());
    if report.passed() {
        lines.push("✓ QUALITY GATES PASSED".to_string());
    } else {
        lines.push("=== QUALITY GATES FAILED ===".to_string());
        for block in &report.blocks {
            lines.push(format!("  ✗ {block}"));
        }
    }
    lines.join("\n")
}
