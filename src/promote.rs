//! Promotion driving via the external `dune` tool
//!
//! Two subcommands are shelled out to: `promotion list`, which emits each
//! pending candidate path on its diagnostic stream one per line, and
//! `promotion apply`, which accepts an optional single target path (absent
//! means "apply everything pending"). Only this textual contract is relied
//! on; the tool's promotion tracking is opaque.
//!
//! Listing and applying are independent invocations with no shared session:
//! a concurrent build may change the pending set between the two calls, and
//! the driver does not re-validate. Neither invocation is subject to a
//! timeout.

use crate::error::{DunemateError, DunemateResult};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Captured result of one tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for ToolOutput {
    fn from(out: std::process::Output) -> Self {
        Self {
            success: out.status.success(),
            code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        }
    }
}

/// Narrow interface over the external tool's promotion subcommands.
///
/// Tests inject a scripted implementation instead of spawning processes.
pub trait DuneTool {
    /// Run `promotion list` in `root`, capturing output.
    fn promotion_list(&self, root: &Path) -> std::io::Result<ToolOutput>;

    /// Run `promotion apply` in `root`, optionally scoped to one target.
    fn promotion_apply(&self, root: &Path, target: Option<&Path>) -> std::io::Result<ToolOutput>;
}

/// Production implementation spawning the configured `dune` executable.
#[derive(Debug, Clone)]
pub struct ProcessDune {
    bin: PathBuf,
}

impl ProcessDune {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }
}

impl DuneTool for ProcessDune {
    fn promotion_list(&self, root: &Path) -> std::io::Result<ToolOutput> {
        let output = Command::new(&self.bin)
            .args(["promotion", "list"])
            .current_dir(root)
            .stdin(Stdio::null())
            .output()?;
        Ok(output.into())
    }

    fn promotion_apply(&self, root: &Path, target: Option<&Path>) -> std::io::Result<ToolOutput> {
        let mut cmd = Command::new(&self.bin);
        cmd.args(["promotion", "apply"])
            .current_dir(root)
            .stdin(Stdio::null());
        // The target travels as one discrete argv entry; paths with spaces
        // need no quoting.
        if let Some(target) = target {
            cmd.arg(target);
        }
        let output = cmd.output()?;
        Ok(output.into())
    }
}

/// Parse the diagnostic stream of `promotion list` into candidate paths.
///
/// One candidate per line; lines are trimmed and blank lines dropped.
pub fn parse_candidates(diagnostics: &str) -> Vec<String> {
    diagnostics
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// List pending promotion candidates.
///
/// A successful run with no diagnostic output is an empty candidate set,
/// not an error; a spawn failure or nonzero exit is `PromotionList`.
pub fn list_candidates(tool: &dyn DuneTool, root: &Path) -> DunemateResult<Vec<String>> {
    let output = tool
        .promotion_list(root)
        .map_err(|e| DunemateError::PromotionList {
            details: e.to_string(),
        })?;
    if !output.success {
        return Err(DunemateError::PromotionList {
            details: describe_failure(&output),
        });
    }
    Ok(parse_candidates(&output.stderr))
}

/// Apply one promotion (`Some(target)`) or every pending one (`None`).
///
/// Returns the tool's captured stdout on success.
pub fn apply_promotion(
    tool: &dyn DuneTool,
    root: &Path,
    target: Option<&Path>,
) -> DunemateResult<String> {
    let output = tool
        .promotion_apply(root, target)
        .map_err(|e| DunemateError::PromotionApply {
            details: e.to_string(),
        })?;
    if !output.success {
        return Err(DunemateError::PromotionApply {
            details: describe_failure(&output),
        });
    }
    Ok(output.stdout)
}

fn describe_failure(output: &ToolOutput) -> String {
    let diag = output.stderr.trim();
    match (output.code, diag.is_empty()) {
        (Some(code), false) => format!("exit code {code}: {diag}"),
        (Some(code), true) => format!("exit code {code}"),
        (None, false) => format!("terminated by signal: {diag}"),
        (None, true) => "terminated by signal".to_string(),
    }
}
