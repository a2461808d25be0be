//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `gate.rs` — merge-gate evaluation over the diff against a base revision.
//! - `sync.rs` — artifact generation and byte-for-byte verification.
//!
//! ## Principles
//! - Gather inputs and choose exit codes here.
//! - Delegate check logic and rendering to `services/*`.
//! - Keep behavior and output schema stable.

pub mod gate;
pub mod sync;

pub use gate::handle_gate;
pub use sync::handle_sync;
