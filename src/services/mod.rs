//! Service layer containing check logic and side-effect helpers.
//!
//! ## Service map
//! - `config.rs` — defaults + shallow override merge.
//! - `git.rs` — version-control queries that degrade to empty output.
//! - `signatures.rs` — signature grammar over free text.
//! - `checks.rs` — the gate checks, pure over the collected inputs.
//! - `runner.rs` — input collection and aggregation policy.
//! - `render.rs` — deterministic markdown projection of the state document.
//! - `capability.rs` — startup probe for optional capabilities.
//! - `audit.rs` — best-effort JSONL run trail.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Checks are pure: inputs in, findings out, no printing.
//! - Side effects stay in `git`, `audit`, and the command handlers.
//! - Keep command handlers thin; delegate to services.

pub mod audit;
pub mod capability;
pub mod checks;
pub mod config;
pub mod git;
pub mod output;
pub mod render;
pub mod runner;
pub mod signatures;
