use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as ProcessCommand;
use tempfile::TempDir;

/// Scratch git repository plus an isolated home directory. The binary runs
/// with the repository as its working directory, the way CI would run it at
/// a checkout root.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub repo: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let repo = tmp.path().join("repo");
        fs::create_dir_all(&repo).expect("create repo dir");

        run_git(&repo, &home, &["init", "-q", "-b", "main"]);
        run_git(&repo, &home, &["config", "user.email", "node0@example.com"]);
        run_git(&repo, &home, &["config", "user.name", "Node Zero"]);

        Self {
            _tmp: tmp,
            home,
            repo,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("conclave");
        cmd.current_dir(&self.repo)
            .env("HOME", &self.home)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env_remove("GITHUB_REF")
            .env_remove("GITHUB_BASE_REF")
            .env_remove("PR_BODY");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_fail(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn git(&self, args: &[&str]) {
        run_git(&self.repo, &self.home, args);
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.repo.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dirs");
        }
        fs::write(path, content).expect("write fixture file");
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.repo.join(rel)).expect("read fixture file")
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.repo.join(rel).exists()
    }

    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "-m", message]);
    }

    /// Mirror the repository into its own `origin` remote so that
    /// `origin/main` resolves to the branch state at fetch time. Commits made
    /// afterwards stay ahead of it until the next call.
    pub fn publish_origin(&self) {
        let _ = ProcessCommand::new("git")
            .args(["remote", "add", "origin", "."])
            .current_dir(&self.repo)
            .env("HOME", &self.home)
            .output();
        self.git(&["fetch", "-q", "origin"]);
    }

    /// Generate the rendered artifact through the binary itself.
    pub fn sync(&self) {
        self.cmd().arg("sync").assert().success();
    }
}

fn run_git(repo: &Path, home: &Path, args: &[&str]) {
    let out = ProcessCommand::new("git")
        .args(args)
        .current_dir(repo)
        .env("HOME", home)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .output()
        .expect("git should execute");
    assert!(
        out.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
}

pub fn minimal_state() -> Value {
    serde_json::json!({
        "version": "1.0",
        "updated_at": "2024-03-01T10:00:00Z",
        "updated_by": "node0",
        "decisions": [],
        "risks": [],
        "limits": {}
    })
}

pub fn complete_decision(id: &str) -> Value {
    serde_json::json!({
        "id": id,
        "title": "Adopt gated merges",
        "why": "Shared state needs review before it changes",
        "rejected": ["direct pushes"],
        "by": "node1",
        "timestamp": "2024-02-28T09:00:00Z"
    })
}

pub fn state_with_decisions(decisions: &[Value]) -> String {
    let mut state = minimal_state();
    state["decisions"] = Value::Array(decisions.to_vec());
    serde_json::to_string_pretty(&state).expect("serialize state fixture")
}
