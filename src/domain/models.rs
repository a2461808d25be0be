use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::constants::{DEFAULT_CONFIG_PATH, SCHEMA_PATH, STATE_PATH};

/// Envelope for all `--json` output.
#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Effective gate configuration: hard-coded defaults merged with an optional
/// override file. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Config {
    pub protected_paths: Vec<String>,
    pub quorum_min: usize,
    pub max_files_changed: usize,
    pub max_lines_changed: usize,
    pub sync_source: String,
    pub sync_output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protected_paths: vec![
                STATE_PATH.to_string(),
                SCHEMA_PATH.to_string(),
                DEFAULT_CONFIG_PATH.to_string(),
            ],
            quorum_min: 2,
            max_files_changed: 10,
            max_lines_changed: 500,
            sync_source: STATE_PATH.to_string(),
            sync_output: "docs/state.md".to_string(),
        }
    }
}

/// The override file's shape: every key optional, absent keys inherit the
/// default.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigOverride {
    pub protected_paths: Option<Vec<String>>,
    pub quorum_min: Option<usize>,
    pub max_files_changed: Option<usize>,
    pub max_lines_changed: Option<usize>,
    pub sync_source: Option<String>,
    pub sync_output: Option<String>,
}

/// Parsed state document. Header fields are required; collections default to
/// empty so a sparse document still renders and audits.
#[derive(Debug, Deserialize)]
pub struct StateDocument {
    pub version: String,
    pub updated_at: String,
    pub updated_by: String,
    #[serde(default)]
    pub decisions: Vec<Decision>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub limits: BTreeMap<String, serde_json::Value>,
}

/// A recorded decision. Field absence is tolerated at parse time so one
/// incomplete entry cannot hide the rest from the audit.
#[derive(Debug, Default, Deserialize)]
pub struct Decision {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub why: String,
    #[serde(default)]
    pub rejected: Vec<String>,
    #[serde(default)]
    pub by: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Block,
}

/// One reported outcome of a check. The message names the offending entity
/// and, where one exists, the remedy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn block(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Block,
            message: message.into(),
        }
    }
}

/// Aggregated gate outcome, also the `--json` payload for `gate`.
#[derive(Debug, Serialize)]
pub struct GateReport {
    pub overall: String,
    pub warnings: Vec<String>,
    pub blocks: Vec<String>,
}

impl GateReport {
    /// Report for a run that had nothing to evaluate.
    pub fn empty_pass() -> Self {
        Self {
            overall: "pass".to_string(),
            warnings: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// `--json` payload for `sync` in both generate and check mode.
#[derive(Debug, Serialize)]
pub struct SyncReport {
    pub status: String,
    pub source: String,
    pub output: String,
}
