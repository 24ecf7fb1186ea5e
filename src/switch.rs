//! Counterpart resolution between implementation and interface files
//!
//! OCaml projects pair an implementation (`foo.ml`) with a signature in one
//! of two conventions: a compilation-unit interface (`foo.mli`) or an
//! `_intf` module (`foo_intf.ml`). The resolver maps a path to its
//! counterpart by suffix substitution, probing the file system for which
//! candidate actually exists.

use crate::error::{DunemateError, DunemateResult};
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};

/// One suffix-substitution rule: candidates are probed in order.
struct Rule {
    suffix: &'static str,
    candidates: &'static [&'static str],
}

/// Ordered, first-match-wins. `_intf.ml` must precede `.ml`: every
/// `_intf.ml` path also ends in `.ml`.
const RULES: &[Rule] = &[
    Rule {
        suffix: "_intf.ml",
        candidates: &[".ml"],
    },
    Rule {
        suffix: ".mli",
        candidates: &[".ml"],
    },
    Rule {
        suffix: ".ml",
        candidates: &["_intf.ml", ".mli"],
    },
];

/// Compute the counterpart candidates for `path`, in probe order.
///
/// Pure suffix rewriting; no file system access. Fails with
/// `UnsupportedKind` when no rule matches.
pub fn counterpart_candidates(path: &Path) -> DunemateResult<Vec<PathBuf>> {
    let name = path.to_string_lossy();
    for rule in RULES {
        if let Some(stem) = name.strip_suffix(rule.suffix) {
            return Ok(rule
                .candidates
                .iter()
                .map(|suffix| PathBuf::from(format!("{stem}{suffix}")))
                .collect());
        }
    }
    Err(DunemateError::UnsupportedKind {
        path: path.to_path_buf(),
    })
}

/// Resolve the counterpart of `path`: the first candidate that exists wins.
pub fn resolve_counterpart(fs: &dyn FileSystem, path: &Path) -> DunemateResult<PathBuf> {
    let candidates = counterpart_candidates(path)?;
    for candidate in &candidates {
        if fs.exists(candidate) {
            return Ok(candidate.clone());
        }
    }
    let tried = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(DunemateError::NoMatch {
        path: path.to_path_buf(),
        tried,
    })
}
