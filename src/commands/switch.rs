//! Switch command handler
//!
//! Resolves the counterpart of a file and prints its path on stdout, one
//! line, so it composes: `$EDITOR "$(dunemate switch foo.ml)"`.

use std::path::PathBuf;

use anyhow::Result;

use dunemate::{resolve_counterpart, DunemateError, LocalFs};

/// Execute the switch command
pub fn cmd_switch(file: Option<PathBuf>, json: bool) -> Result<()> {
    let file = file.ok_or(DunemateError::NoActiveContext)?;

    let fs = LocalFs::new();
    let target = resolve_counterpart(&fs, &file)?;

    if json {
        crate::ui::emit_json(serde_json::json!({
            "event": "switch",
            "from": file.display().to_string(),
            "to": target.display().to_string(),
        }));
    } else {
        println!("{}", target.display());
    }
    Ok(())
}
