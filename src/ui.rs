//! Terminal output helpers
//!
//! Human mode prints plain messages; `--json` mode emits one JSON object
//! per line with an `event` discriminator, so editors and scripts can
//! consume results without scraping prose.

use is_terminal::IsTerminal;

/// Whether prompts may be shown: stdin must be a terminal and JSON mode off.
pub fn allow_prompt(json: bool) -> bool {
    !json && std::io::stdin().is_terminal()
}

/// Emit one line-delimited JSON event.
pub fn emit_json(value: serde_json::Value) {
    println!("{value}");
}

/// Informational message (also used for "nothing to do" outcomes).
pub fn info(message: &str, json: bool) {
    if json {
        emit_json(serde_json::json!({
            "event": "info",
            "message": message,
        }));
    } else {
        println!("{message}");
    }
}

/// Success message for a completed mutation.
pub fn success(message: &str, json: bool) {
    if json {
        emit_json(serde_json::json!({
            "event": "done",
            "message": message,
        }));
    } else {
        println!("✓ {message}");
    }
}

/// Render a command failure at the binary boundary.
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        emit_json(serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        }));
        return;
    }
    eprintln!("[ERROR] {err}");
}
