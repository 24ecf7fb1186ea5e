//! Alias command handler
//!
//! Registers a directory under the workspace root's `dune` manifest. With
//! no directory argument on an interactive terminal, offers a fuzzy picker
//! over the workspace's dune directories; with no `--name`, a picker over
//! the alias kinds. Cancelling either prompt leaves the manifest untouched.

use std::path::{Path, PathBuf};

use anyhow::Result;

use dunemate::workspace::relative_posix;
use dunemate::{add_alias, discover_workspace_root, AliasKind, DunemateError, LocalFs, ALIAS_KINDS};

/// Execute the alias command
pub fn cmd_alias(dir: Option<PathBuf>, name: Option<AliasKind>, json: bool, verbose: u8) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let root = discover_workspace_root(&cwd);
    if verbose > 0 {
        eprintln!("workspace root: {}", root.display());
    }
    let config = super::load_config(&root, verbose)?;
    let allow_prompt = crate::ui::allow_prompt(json);

    let dir = match dir {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => cwd.join(dir),
        None if allow_prompt => select_directory(&root, &cwd)?,
        None => cwd.clone(),
    };

    let kind = match name {
        Some(kind) => kind,
        None if allow_prompt => select_kind(config.alias.default_name)?,
        None => config.alias.default_name,
    };

    let relative = add_alias(&LocalFs::new(), &root, &dir, kind)?;

    if json {
        crate::ui::emit_json(serde_json::json!({
            "event": "alias_added",
            "dir": relative,
            "name": kind.name(),
            "manifest": root.join("dune").display().to_string(),
        }));
    } else {
        crate::ui::success(&format!("Added {kind} alias for {relative} to {}", root.join("dune").display()), false);
    }
    Ok(())
}

/// Interactive directory picker over the workspace's dune directories.
///
/// Candidates are the root itself plus every directory carrying a `dune`
/// file, found with an ignore-aware walk; the entry nearest the cwd is
/// preselected.
fn select_directory(root: &Path, cwd: &Path) -> Result<PathBuf> {
    use dialoguer::FuzzySelect;

    let dirs = workspace_directories(root);
    let items: Vec<String> = dirs
        .iter()
        .map(|dir| relative_posix(root, dir).unwrap_or_else(|_| dir.display().to_string()))
        .collect();
    let default = dirs.iter().position(|dir| dir.as_path() == cwd).unwrap_or(0);

    let selection = FuzzySelect::new()
        .with_prompt("Directory to register")
        .items(&items)
        .default(default)
        .interact_opt()?;

    match selection {
        Some(index) => Ok(dirs[index].clone()),
        None => Err(DunemateError::Aborted.into()),
    }
}

/// Interactive alias-kind picker, preselecting the configured default.
fn select_kind(default_kind: AliasKind) -> Result<AliasKind> {
    use dialoguer::Select;

    let items: Vec<&str> = ALIAS_KINDS.iter().map(AliasKind::name).collect();
    let default = ALIAS_KINDS
        .iter()
        .position(|kind| *kind == default_kind)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Alias kind")
        .items(&items)
        .default(default)
        .interact_opt()?;

    match selection {
        Some(index) => Ok(ALIAS_KINDS[index]),
        None => Err(DunemateError::Aborted.into()),
    }
}

/// Workspace root plus every directory under it that carries a `dune` file.
///
/// The walk respects ignore files, so `_build` and friends stay out of the
/// picker as long as they are gitignored.
fn workspace_directories(root: &Path) -> Vec<PathBuf> {
    let mut dirs = vec![root.to_path_buf()];
    for entry in ignore::WalkBuilder::new(root).build().flatten() {
        if entry.file_type().is_some_and(|t| t.is_dir()) {
            let dir = entry.path();
            if dir != root && dir.join("dune").is_file() {
                dirs.push(dir.to_path_buf());
            }
        }
    }
    dirs.sort();
    dirs
}
