use std::path::Path;

use crate::cli::Cli;
use crate::domain::errors::ConclaveError;
use crate::domain::models::{Config, StateDocument, SyncReport};
use crate::services::{audit, capability, config, output, render};

/// Regenerate the rendered artifact from the state document, or with
/// `--check` verify the committed artifact matches a fresh render byte for
/// byte. Check mode exits 1 on drift.
pub fn handle_sync(cli: &Cli, check: bool) -> anyhow::Result<i32> {
    let caps = capability::probe();
    let config = config::load(&cli.config, &caps)
        .map_err(|err| ConclaveError::ConfigInvalid(cli.config.clone(), format!("{err:#}")))?;

    let document = load_document(&config.sync_source)?;
    let fresh = render::render(&document, &config);

    if check {
        return check_artifact(cli, &config, &fresh);
    }

    let output_path = Path::new(&config.sync_output);
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, &fresh)?;
    audit::record(
        "sync",
        serde_json::json!({"mode": "generate", "output": config.sync_output}),
    );
    output::print_one(
        cli.json,
        SyncReport {
            status: "generated".to_string(),
            source: config.sync_source.clone(),
            output: config.sync_output.clone(),
        },
        |r| format!("Generated {} from {}", r.output, r.source),
    )?;
    Ok(0)
}

fn load_document(source: &str) -> anyhow::Result<StateDocument> {
    if !Path::new(source).exists() {
        anyhow::bail!(ConclaveError::StateMissing(source.to_string()));
    }
    let raw = std::fs::read_to_string(source)?;
    let document = serde_json::from_str(&raw)
        .map_err(|err| ConclaveError::StateInvalid(source.to_string(), err.to_string()))?;
    Ok(document)
}

fn check_artifact(cli: &Cli, config: &Config, fresh: &str) -> anyhow::Result<i32> {
    let source = &config.sync_source;
    let output_path = &config.sync_output;
    let current = if Path::new(output_path).exists() {
        Some(std::fs::read_to_string(output_path)?)
    } else {
        None
    };

    let in_sync = current.as_deref() == Some(fresh);
    let status = if in_sync { "in_sync" } else { "out_of_sync" };
    audit::record(
        "sync",
        serde_json::json!({"mode": "check", "status": status}),
    );

    let human = if in_sync {
        format!("IN SYNC: {output_path}")
    } else if current.is_none() {
        format!("OUT OF SYNC: {output_path} does not exist")
    } else {
        format!("OUT OF SYNC: {output_path} differs from {source}")
    };
    output::print_outcome(
        cli.json,
        in_sync,
        SyncReport {
            status: status.to_string(),
            source: source.clone(),
            output: output_path.clone(),
        },
        |_| human.clone(),
    )?;
    Ok(if in_sync { 0 } else { 1 })
}
