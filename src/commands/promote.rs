//! Promote command handler
//!
//! Drives `dune promotion list` / `dune promotion apply`. Interactive runs
//! offer a single-select over the pending candidates plus a final
//! "promote all" entry; `--list`, `--all` and an explicit TARGET cover
//! scripted use. Non-interactive runs without a choice fall back to
//! listing.

use std::path::{Path, PathBuf};

use anyhow::Result;

use dunemate::{apply_promotion, discover_workspace_root, list_candidates, DuneTool, DunemateError, ProcessDune};

const PROMOTE_ALL: &str = "(promote all)";

/// Execute the promote command
pub fn cmd_promote(
    target: Option<PathBuf>,
    all: bool,
    list_only: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let root = discover_workspace_root(&cwd);
    if verbose > 0 {
        eprintln!("workspace root: {}", root.display());
    }
    let config = super::load_config(&root, verbose)?;
    let tool = ProcessDune::new(&config.dune.bin);

    if let Some(target) = target {
        return apply_and_report(&tool, &root, Some(&target), json);
    }
    if all {
        return apply_and_report(&tool, &root, None, json);
    }

    let candidates = list_candidates(&tool, &root)?;

    if list_only || !crate::ui::allow_prompt(json) {
        return report_candidates(&candidates, json);
    }

    if candidates.is_empty() {
        crate::ui::info("No pending promotions.", json);
        return Ok(());
    }

    let mut items = candidates.clone();
    items.push(PROMOTE_ALL.to_string());

    let selection = dialoguer::FuzzySelect::new()
        .with_prompt("Promote")
        .items(&items)
        .default(0)
        .interact_opt()?;

    match selection {
        None => Err(DunemateError::Aborted.into()),
        Some(index) if index == candidates.len() => apply_and_report(&tool, &root, None, json),
        Some(index) => apply_and_report(&tool, &root, Some(Path::new(&candidates[index])), json),
    }
}

fn report_candidates(candidates: &[String], json: bool) -> Result<()> {
    if candidates.is_empty() {
        crate::ui::info("No pending promotions.", json);
        return Ok(());
    }
    if json {
        for candidate in candidates {
            crate::ui::emit_json(serde_json::json!({
                "event": "promotion_candidate",
                "path": candidate,
            }));
        }
    } else {
        for candidate in candidates {
            println!("{candidate}");
        }
    }
    Ok(())
}

fn apply_and_report(
    tool: &dyn DuneTool,
    root: &Path,
    target: Option<&Path>,
    json: bool,
) -> Result<()> {
    let stdout = apply_promotion(tool, root, target)?;

    if json {
        crate::ui::emit_json(serde_json::json!({
            "event": "promoted",
            "target": target.map(|t| t.display().to_string()),
            "output": stdout,
        }));
        return Ok(());
    }

    if !stdout.trim().is_empty() {
        print!("{stdout}");
    }
    match target {
        Some(target) => crate::ui::success(&format!("Promoted {}", target.display()), false),
        None => crate::ui::success("Applied all pending promotions", false),
    }
    Ok(())
}
