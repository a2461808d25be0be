//! Deterministic markdown projection of the state document.
//!
//! Byte-identical input yields byte-identical output: section order is
//! fixed, limits iterate in key order, lines join with `\n`, and every
//! section closes with a blank line so the output ends in exactly one
//! newline. The sync check depends on this.

use crate::domain::models::{Config, StateDocument};

pub fn render(document: &StateDocument, config: &Config) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("# State — Auto-generated from {}", config.sync_source));
    lines.push(format!(
        "<!-- version: {} | updated: {} | by: {} -->",
        document.version, document.updated_at, document.updated_by
    ));
    lines.push("<!-- DO NOT EDIT. Run: conclave sync -->".to_string());
    lines.push(String::new());
    lines.push("## Decisions".to_string());
    lines.push(String::new());
    for decision in &document.decisions {
        lines.push(format!(
            "### {}: {}",
            or_placeholder(&decision.id),
            or_placeholder(&decision.title)
        ));
        lines.push(format!("- **Why:** {}", decision.why));
        lines.push(format!("- **Rejected:** {}", decision.rejected.join("; ")));
        lines.push(format!(
            "- **By:** {} ({})",
            or_placeholder(&decision.by),
            or_placeholder(&decision.timestamp)
        ));
        lines.push(String::new());
    }

    if !document.risks.is_empty() {
        lines.push("## Risks".to_string());
        lines.push(String::new());
        for risk in &document.risks {
            lines.push(format!("- {risk}"));
        }
        lines.push(String::new());
    }

    if !document.limits.is_empty() {
        lines.push("## Limits".to_string());
        lines.push(String::new());
        for (key, value) in &document.limits {
            lines.push(format!("- **{key}:** {}", limit_value(value)));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

// Decision fields tolerate absence; the projection marks the hole instead of
// hiding it.
fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        "?"
    } else {
        value
    }
}

// Scalar strings render bare, everything else keeps its JSON text.
fn limit_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
