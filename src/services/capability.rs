//! Startup probe for optional capabilities.
//!
//! Optional concerns are compiled in through Cargo features. The probe runs
//! once per command and the result travels with the inputs, so downstream
//! logic stays pure and a degraded build announces itself instead of
//! silently changing outcomes.

/// Whether an optional capability was compiled into this binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Available,
    Degraded { notice: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    pub yaml_config: Capability,
    pub schema_validation: Capability,
}

pub fn probe() -> Capabilities {
    Capabilities {
        yaml_config: if cfg!(feature = "yaml-config") {
            Capability::Available
        } else {
            Capability::Degraded {
                notice: "WARNING: built without yaml-config, using default config",
            }
        },
        schema_validation: if cfg!(feature = "schema-validation") {
            Capability::Available
        } else {
            Capability::Degraded {
                notice: "WARNING: built without schema-validation, skipping schema validation",
            }
        },
    }
}
