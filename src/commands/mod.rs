//! Command handlers
//!
//! One handler per subcommand. Each runs to completion synchronously;
//! failures bubble to the binary boundary where they become a notification
//! and a nonzero exit.

pub mod alias;
pub mod promote;
pub mod switch;

pub use alias::cmd_alias;
pub use promote::cmd_promote;
pub use switch::cmd_switch;

use std::path::Path;

use dunemate::{Config, DunemateResult};

/// Load config for a command, surfacing unknown-key warnings at -v.
pub(crate) fn load_config(root: &Path, verbose: u8) -> DunemateResult<Config> {
    let project = root.join("dunemate.toml");
    if project.exists() {
        let (config, warnings) = Config::load_with_warnings(&project)?;
        if verbose > 0 {
            for warning in &warnings {
                eprintln!(
                    "warning: unknown config key '{}' in {}",
                    warning.key,
                    warning.file.display()
                );
            }
        }
        return Ok(config.with_env_overrides());
    }
    Ok(Config::load_or_default(Some(root)))
}
