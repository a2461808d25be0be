//! Version-control collaborator.
//!
//! Every query shells out to `git` and degrades to empty output when the
//! command fails or the binary is absent. Callers treat "no data" as a valid
//! answer; the gate must not crash on a shallow clone or an unborn branch.

use std::process::Command;

use crate::domain::constants::COMMIT_WINDOW;

fn git(args: &[&str]) -> String {
    match Command::new("git").args(args).output() {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).trim().to_string(),
        _ => String::new(),
    }
}

/// Base revision for this run. Trunk pushes compare against the previous
/// commit; anything else compares against the remote-tracking base branch,
/// `main` when the environment names none.
pub fn base_ref(override_base: Option<&str>) -> String {
    if let Some(base) = override_base {
        return base.to_string();
    }
    if std::env::var("GITHUB_REF").unwrap_or_default() == "refs/heads/main" {
        return "HEAD~1".to_string();
    }
    let base = std::env::var("GITHUB_BASE_REF").unwrap_or_default();
    if base.is_empty() {
        "origin/main".to_string()
    } else {
        format!("origin/{base}")
    }
}

/// Paths changed between the base revision and the working tree.
pub fn changed_files(base: &str) -> Vec<String> {
    git(&["diff", "--name-only", base])
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joined messages of the most recent commits on the current branch.
pub fn recent_commit_messages() -> String {
    let window = format!("-{COMMIT_WINDOW}");
    git(&["log", window.as_str(), "--pretty=%B"])
}

/// Summary statistic for the diff against the base revision, when git can
/// produce one.
pub fn diff_stat(base: &str) -> Option<String> {
    let stat = git(&["diff", "--stat", base]);
    if stat.is_empty() {
        None
    } else {
        Some(stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_wins_over_environment() {
        assert_eq!(base_ref(Some("origin/release")), "origin/release");
    }
}
