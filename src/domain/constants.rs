//! Fixed well-known locations and scan windows.

/// Canonical state document, relative to the repository root.
pub const STATE_PATH: &str = "state/STATE.json";

/// Structural schema for the state document. Optional at runtime.
pub const SCHEMA_PATH: &str = "state/STATE.schema.json";

/// Default location of the configuration override file.
pub const DEFAULT_CONFIG_PATH: &str = "conclave.yaml";

/// How many recent commit messages are scanned for signatures.
pub const COMMIT_WINDOW: usize = 3;
