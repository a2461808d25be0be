//! Configuration loading: hard-coded defaults, shallow-merged with the
//! override file when one exists.
//!
//! A missing override file is the normal case and silently yields defaults.
//! A malformed one is an error and propagates untouched; the caller decides
//! whether that aborts the run or becomes a blocking finding.

use std::path::Path;

use crate::domain::models::{Config, ConfigOverride};
use crate::services::capability::{Capabilities, Capability};

pub fn load(path: &str, caps: &Capabilities) -> anyhow::Result<Config> {
    let mut config = Config::default();
    if !Path::new(path).exists() {
        return Ok(config);
    }
    if let Capability::Degraded { notice } = caps.yaml_config {
        println!("{notice}");
        return Ok(config);
    }
    let raw = std::fs::read_to_string(path)?;
    if let Some(overrides) = parse_override(&raw)? {
        apply_override(&mut config, overrides)?;
    }
    Ok(config)
}

// An empty or comment-only file parses to `None` and keeps the defaults.
#[cfg(feature = "yaml-config")]
fn parse_override(raw: &str) -> anyhow::Result<Option<ConfigOverride>> {
    Ok(serde_yaml::from_str(raw)?)
}

#[cfg(not(feature = "yaml-config"))]
fn parse_override(_raw: &str) -> anyhow::Result<Option<ConfigOverride>> {
    Ok(None)
}

fn apply_override(config: &mut Config, overrides: ConfigOverride) -> anyhow::Result<()> {
    if let Some(paths) = overrides.protected_paths {
        config.protected_paths = paths;
    }
    if let Some(quorum) = overrides.quorum_min {
        if quorum == 0 {
            anyhow::bail!("quorum_min must be at least 1");
        }
        config.quorum_min = quorum;
    }
    if let Some(files) = overrides.max_files_changed {
        config.max_files_changed = files;
    }
    if let Some(lines) = overrides.max_lines_changed {
        config.max_lines_changed = lines;
    }
    if let Some(source) = overrides.sync_source {
        config.sync_source = source;
    }
    if let Some(output) = overrides.sync_output {
        config.sync_output = output;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_and_absent_keys_inherit() {
        let mut config = Config::default();
        let overrides = ConfigOverride {
            quorum_min: Some(3),
            max_files_changed: Some(25),
            ..ConfigOverride::default()
        };
        apply_override(&mut config, overrides).unwrap();
        assert_eq!(config.quorum_min, 3);
        assert_eq!(config.max_files_changed, 25);
        assert_eq!(config.max_lines_changed, 500);
        assert_eq!(config.sync_output, "docs/state.md");
    }

    #[test]
    fn zero_quorum_is_rejected() {
        let mut config = Config::default();
        let overrides = ConfigOverride {
            quorum_min: Some(0),
            ..ConfigOverride::default()
        };
        let err = apply_override(&mut config, overrides).unwrap_err();
        assert!(err.to_string().contains("quorum_min must be at least 1"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let caps = crate::services::capability::probe();
        let config = load("does/not/exist.yaml", &caps).unwrap();
        assert_eq!(config.quorum_min, 2);
        assert_eq!(config.protected_paths.len(), 3);
    }
}
