//! Best-effort run trail.
//!
//! One JSON line per run under `~/.config/conclave/`. Failures here are
//! swallowed: an unwritable home directory must never change a gate outcome
//! or an exit code.

use std::io::Write;
use std::path::PathBuf;

pub fn record(action: &str, data: serde_json::Value) {
    let Ok(home) = std::env::var("HOME") else {
        return;
    };
    let path = PathBuf::from(home).join(".config/conclave/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": epoch_seconds(),
        "action": action,
        "data": data
    });
    let line = format!("{event}\n");
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(line.as_bytes()));
}

fn epoch_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
