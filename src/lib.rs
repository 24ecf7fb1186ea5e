//! dunemate - developer companion for Dune workspaces
//!
//! dunemate wraps three everyday moves in an OCaml/Dune workspace: jumping
//! between an implementation file and its interface, registering a
//! directory's build alias in the root manifest, and promoting corrected
//! files reported by `dune`.

pub mod config;
pub mod error;
pub mod fs;
pub mod promote;
pub mod switch;
pub mod workspace;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use error::{DunemateError, DunemateResult};
pub use fs::{FileSystem, LocalFs};
pub use promote::{apply_promotion, list_candidates, DuneTool, ProcessDune, ToolOutput};
pub use switch::resolve_counterpart;
pub use workspace::{add_alias, discover_workspace_root, AliasKind, ALIAS_KINDS};
