//! Test environment builder for isolated folder-diff runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the folder-diff binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Two temp directories to compare, plus an empty config home.
pub struct TestEnv {
    pub source: TempDir,
    pub target: TempDir,
    pub home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn source_path(&self, relative: &str) -> PathBuf {
        self.source.path().join(relative)
    }

    pub fn target_path(&self, relative: &str) -> PathBuf {
        self.target.path().join(relative)
    }

    pub fn source_arg(&self) -> String {
        self.source.path().to_string_lossy().to_string()
    }

    pub fn target_arg(&self) -> String {
        self.target.path().to_string_lossy().to_string()
    }

    /// Run `folder-diff <source> <target> <args...>`
    pub fn compare(&self, args: &[&str]) -> TestResult {
        let mut full = vec![self.source_arg(), self.target_arg()];
        full.extend(args.iter().map(|a| a.to_string()));
        let refs: Vec<&str> = full.iter().map(String::as_str).collect();
        self.run(&refs)
    }

    /// Run the binary with exactly `args`
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.home.path())
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env("LC_ALL", "en_US.UTF-8")
            .env_remove("RUST_LOG")
            .env_remove("FOLDER_DIFF_MODE")
            .env_remove("FOLDER_DIFF_EXCLUDE")
            .env_remove("FOLDER_DIFF_PRESENTATION");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute folder-diff");
        to_result(output)
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.home.path().join("folder-diff.toml");
        std::fs::write(&path, content).expect("write config");
        path
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path, content).expect("write fixture file");
}

/// Builder for `TestEnv`
#[derive(Default)]
pub struct TestEnvBuilder {
    source_files: Vec<(String, String)>,
    target_files: Vec<(String, String)>,
    source_dirs: Vec<String>,
    target_dirs: Vec<String>,
}

impl TestEnvBuilder {
    pub fn with_source_file(mut self, relative: &str, content: &str) -> Self {
        self.source_files
            .push((relative.to_string(), content.to_string()));
        self
    }

    pub fn with_target_file(mut self, relative: &str, content: &str) -> Self {
        self.target_files
            .push((relative.to_string(), content.to_string()));
        self
    }

    /// Same file on both sides
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        self.with_source_file(relative, content)
            .with_target_file(relative, content)
    }

    pub fn with_source_dir(mut self, relative: &str) -> Self {
        self.source_dirs.push(relative.to_string());
        self
    }

    pub fn with_target_dir(mut self, relative: &str) -> Self {
        self.target_dirs.push(relative.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            source: TempDir::new().expect("source tempdir"),
            target: TempDir::new().expect("target tempdir"),
            home: TempDir::new().expect("home tempdir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_folder-diff")),
        };

        for dir in &self.source_dirs {
            std::fs::create_dir_all(env.source_path(dir)).expect("create source dir");
        }
        for dir in &self.target_dirs {
            std::fs::create_dir_all(env.target_path(dir)).expect("create target dir");
        }
        for (relative, content) in &self.source_files {
            write_file(env.source.path(), relative, content);
        }
        for (relative, content) in &self.target_files {
            write_file(env.target.path(), relative, content);
        }
        env
    }
}
