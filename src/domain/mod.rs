//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep config, document, and report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — config, state document, finding, report/output structs.
//! - `constants.rs` — fixed well-known paths and scan windows.
//! - `errors.rs` — terminating errors with stable codes.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/process side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs consumed by CI.
//! Keep schema-impacting changes explicit and deliberate.

pub mod constants;
pub mod errors;
pub mod models;
