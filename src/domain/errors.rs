//! Process-terminating failures with stable machine-readable codes.
//!
//! Blocking findings are not errors; they flow through the report. Errors are
//! reserved for runs that cannot produce a report at all. Anything that
//! escapes a command handler without one of these codes reports as
//! `INTERNAL`.

#[derive(thiserror::Error, Debug)]
pub enum ConclaveError {
    #[error("{0} is malformed: {1}")]
    ConfigInvalid(String, String),
    #[error("{0} not found")]
    StateMissing(String),
    #[error("{0} is not valid JSON: {1}")]
    StateInvalid(String, String),
}

impl ConclaveError {
    pub fn code(&self) -> &'static str {
        match self {
            ConclaveError::ConfigInvalid(..) => "CONFIG_INVALID",
            ConclaveError::StateMissing(..) => "STATE_MISSING",
            ConclaveError::StateInvalid(..) => "STATE_INVALID",
        }
    }
}
