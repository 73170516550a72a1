// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for running the `gn` binary.

use std::path::{Path, PathBuf};
use std::process::Output;

/// Start building a `gn` invocation
pub fn cli() -> CliBuilder {
    CliBuilder {
        args: Vec::new(),
        envs: vec![("GN_HEADLESS".into(), "1".into())],
        removed: Vec::new(),
    }
}

pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    removed: Vec<String>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.envs.push((key.to_string(), value.as_ref().to_string_lossy().into_owned()));
        self
    }

    /// Run without `key`, even if the test process or the defaults set it
    pub fn env_remove(mut self, key: &str) -> Self {
        self.envs.retain(|(k, _)| k != key);
        self.removed.push(key.to_string());
        self
    }

    /// Run with native dialogs enabled and no graphical session
    pub fn without_display(self) -> Self {
        self.env_remove("GN_HEADLESS").env_remove("DISPLAY").env_remove("WAYLAND_DISPLAY")
    }

    fn output(self) -> Output {
        let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_gn"));
        cmd.args(&self.args);
        cmd.env_remove("GN_LOG").env_remove("GN_CATALOG");
        for key in &self.removed {
            cmd.env_remove(key);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.output().expect("failed to run gn")
    }

    /// Run and assert exit status 0
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and assert a non-zero exit status
    pub fn fails(self) -> RunAssert {
        let run = RunAssert { output: self.output() };
        assert!(!run.output.status.success(), "expected failure\n{}", run.describe());
        run
    }

    /// Run and assert an exact exit status
    pub fn exits(self, code: i32) -> RunAssert {
        let run = RunAssert { output: self.output() };
        assert_eq!(run.output.status.code(), Some(code), "unexpected exit status\n{}", run.describe());
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    fn describe(&self) -> String {
        format!("stdout:\n{}\nstderr:\n{}", self.stdout(), self.stderr())
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        assert!(self.stdout().contains(expected), "stdout missing {expected:?}\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        assert!(self.stderr().contains(expected), "stderr missing {expected:?}\n{}", self.describe());
        self
    }

    pub fn stderr_lacks(self, unexpected: &str) -> Self {
        assert!(
            !self.stderr().contains(unexpected),
            "stderr unexpectedly has {unexpected:?}\n{}",
            self.describe()
        );
        self
    }

    pub fn stderr_eq(self, expected: &str) -> Self {
        assert_eq!(self.stderr(), expected, "stderr mismatch\n{}", self.describe());
        self
    }
}

/// Scratch directory for catalog files
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().expect("failed to create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root and return its path
    pub fn file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, content).expect("failed to write file");
        path
    }
}
