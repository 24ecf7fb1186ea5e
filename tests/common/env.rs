//! Test environment builder for isolated dunemate testing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a dunemate CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    #[allow(dead_code)]
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated Dune workspace with helpers to run the dunemate binary.
///
/// The workspace root carries a `dune-project` marker so root discovery
/// anchors to the temp directory. HOME and XDG_CONFIG_HOME point inside
/// the temp directory so no user config leaks in.
pub struct TestEnv {
    pub workspace: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("create temp workspace");
        std::fs::write(workspace.path().join("dune-project"), "(lang dune 3.0)\n")
            .expect("write dune-project");
        Self {
            workspace,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_dunemate")),
        }
    }

    /// Path relative to the workspace root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.workspace.path().join(relative)
    }

    /// Write a file under the workspace root, creating parent directories
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(path, content).expect("write file");
    }

    /// Read a file under the workspace root
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).expect("read file")
    }

    /// Run dunemate from the workspace root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.workspace.path(), args)
    }

    /// Run dunemate from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let home = self.path("home");
        std::fs::create_dir_all(&home).expect("create home dir");

        let output = Command::new(&self.bin)
            .current_dir(cwd)
            .args(args)
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("DUNEMATE_DUNE_BIN")
            .env_remove("DUNEMATE_DEFAULT_ALIAS")
            .output()
            .expect("failed to execute dunemate");

        output_to_result(output)
    }

    /// Install a scripted fake `dune` executable and point the workspace
    /// config at it. `body` is appended to a `#!/bin/sh` header and runs
    /// with the workspace root as its working directory.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn install_fake_dune(&self, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = self.path("fakebin");
        std::fs::create_dir_all(&bin_dir).expect("create fakebin dir");
        let script = bin_dir.join("dune");
        std::fs::write(&script, format!("#!/bin/sh\n{body}")).expect("write fake dune");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("chmod fake dune");

        self.write(
            "dunemate.toml",
            &format!("[dune]\nbin = \"{}\"\n", script.display()),
        );
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
