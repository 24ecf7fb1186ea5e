//! Workspace root discovery and manifest alias registration
//!
//! The root `dune` file of a workspace can carry alias stanzas that fan out
//! to a directory's own aliases via `alias_rec`. Registration prepends a
//! stanza; existing manifest content is never parsed or rewritten, only
//! preserved verbatim below the new entry.

use crate::error::{DunemateError, DunemateResult};
use crate::fs::FileSystem;
use std::fmt;
use std::path::{Path, PathBuf};

/// The alias kinds a directory can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasKind {
    /// Aggregate the directory's test targets
    Runtest,
    /// Aggregate the directory's default build targets
    Default,
}

/// All alias kinds, in picker order
pub const ALIAS_KINDS: [AliasKind; 2] = [AliasKind::Runtest, AliasKind::Default];

impl AliasKind {
    pub fn name(&self) -> &'static str {
        match self {
            AliasKind::Runtest => "runtest",
            AliasKind::Default => "default",
        }
    }
}

impl fmt::Display for AliasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for AliasKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "runtest" => Ok(AliasKind::Runtest),
            "default" => Ok(AliasKind::Default),
            other => Err(format!("unknown alias kind '{other}'")),
        }
    }
}

/// Discover the workspace root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `dune-workspace` (explicit multi-context workspace marker)
/// - `dune-project` (single-project root)
/// - `.git` directory or file (repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub fn discover_workspace_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join("dune-workspace").exists() {
            return dir.to_path_buf();
        }
        if dir.join("dune-project").exists() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// POSIX-style relative path from `root` to `dir` inside it.
///
/// The workspace root itself maps to `.`. A `dir` outside `root` fails with
/// `OutsideWorkspace`.
pub fn relative_posix(root: &Path, dir: &Path) -> DunemateResult<String> {
    let rel = dir
        .strip_prefix(root)
        .map_err(|_| DunemateError::OutsideWorkspace {
            path: dir.to_path_buf(),
            root: root.to_path_buf(),
        })?;

    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        Ok(".".to_string())
    } else {
        Ok(parts.join("/"))
    }
}

/// Render one alias stanza for the root manifest.
pub fn render_stanza(kind: AliasKind, relative: &str) -> String {
    format!("(alias\n  (name {kind})\n  (deps (alias_rec {relative}/{kind}))\n)\n")
}

/// Register `dir` under the workspace root's `dune` manifest.
///
/// The stanza is prepended: result = stanza + previous content, with the
/// previous content (empty when the manifest does not exist) preserved
/// byte-for-byte. Returns the relative path the stanza references.
pub fn add_alias(
    fs: &dyn FileSystem,
    root: &Path,
    dir: &Path,
    kind: AliasKind,
) -> DunemateResult<String> {
    let relative = relative_posix(root, dir)?;
    let manifest = root.join("dune");

    let existing = if fs.exists(&manifest) {
        fs.read_to_string(&manifest)
            .map_err(|e| manifest_error(&manifest, e))?
    } else {
        String::new()
    };

    let content = format!("{}{}", render_stanza(kind, &relative), existing);
    fs.write_atomic(&manifest, &content)
        .map_err(|e| manifest_error(&manifest, e))?;
    Ok(relative)
}

fn manifest_error(manifest: &Path, err: DunemateError) -> DunemateError {
    match err {
        DunemateError::Io(source) => DunemateError::ManifestWrite {
            path: manifest.to_path_buf(),
            source,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use tempfile::tempdir;

    #[test]
    fn discover_root_prefers_nearest_dune_project() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::write(root.join("sub/dune-project"), "(lang dune 3.0)\n").unwrap();

        let start = root.join("sub/lib");
        std::fs::create_dir_all(&start).unwrap();

        assert_eq!(discover_workspace_root(&start), root.join("sub"));
    }

    #[test]
    fn discover_root_falls_back_to_git_when_no_dune_markers() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("sub/lib")).unwrap();

        let start = root.join("sub/lib");
        assert_eq!(discover_workspace_root(&start), root.to_path_buf());
    }

    #[test]
    fn discover_root_uses_dune_workspace_when_present() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::write(root.join("sub/dune-workspace"), "(lang dune 3.0)\n").unwrap();

        let start = root.join("sub");
        assert_eq!(discover_workspace_root(&start), root.join("sub"));
    }

    #[test]
    fn discover_root_without_markers_returns_start() {
        let dir = tempdir().unwrap();
        let start = dir.path().join("plain");
        std::fs::create_dir_all(&start).unwrap();

        assert_eq!(discover_workspace_root(&start), start);
    }

    #[test]
    fn relative_path_is_posix_joined() {
        let rel = relative_posix(Path::new("/w"), Path::new("/w/lib/x")).unwrap();
        assert_eq!(rel, "lib/x");
    }

    #[test]
    fn relative_path_of_root_is_dot() {
        let rel = relative_posix(Path::new("/w"), Path::new("/w")).unwrap();
        assert_eq!(rel, ".");
    }

    #[test]
    fn relative_path_outside_root_is_rejected() {
        let err = relative_posix(Path::new("/w"), Path::new("/elsewhere/lib")).unwrap_err();
        assert!(matches!(err, DunemateError::OutsideWorkspace { .. }));
    }

    #[test]
    fn stanza_shape() {
        insta::assert_snapshot!(render_stanza(AliasKind::Runtest, "lib/x"), @r###"
        (alias
          (name runtest)
          (deps (alias_rec lib/x/runtest))
        )
        "###);
    }

    #[test]
    fn stanza_shape_default_kind() {
        insta::assert_snapshot!(render_stanza(AliasKind::Default, "."), @r###"
        (alias
          (name default)
          (deps (alias_rec ./default))
        )
        "###);
    }

    #[test]
    fn add_alias_creates_manifest_when_absent() {
        let fs = MockFileSystem::new();

        let rel = add_alias(
            &fs,
            Path::new("/w"),
            Path::new("/w/lib/x"),
            AliasKind::Runtest,
        )
        .unwrap();

        assert_eq!(rel, "lib/x");
        assert_eq!(
            fs.contents("/w/dune").unwrap(),
            "(alias\n  (name runtest)\n  (deps (alias_rec lib/x/runtest))\n)\n"
        );
    }

    #[test]
    fn add_alias_prepends_to_existing_content() {
        let fs = MockFileSystem::new();
        let existing = "(env (dev (flags (:standard -w +a))))\n";
        fs.write_atomic(Path::new("/w/dune"), existing).unwrap();

        add_alias(
            &fs,
            Path::new("/w"),
            Path::new("/w/lib"),
            AliasKind::Default,
        )
        .unwrap();

        let expected = format!(
            "(alias\n  (name default)\n  (deps (alias_rec lib/default))\n)\n{existing}"
        );
        assert_eq!(fs.contents("/w/dune").unwrap(), expected);
    }

    #[test]
    fn add_alias_twice_stacks_newest_first() {
        let fs = MockFileSystem::new();

        add_alias(&fs, Path::new("/w"), Path::new("/w/a"), AliasKind::Runtest).unwrap();
        add_alias(&fs, Path::new("/w"), Path::new("/w/b"), AliasKind::Runtest).unwrap();

        let content = fs.contents("/w/dune").unwrap();
        let a = content.find("a/runtest").unwrap();
        let b = content.find("b/runtest").unwrap();
        assert!(b < a, "second registration should sit above the first");
    }

    #[test]
    fn alias_kind_parse_round_trip() {
        for kind in ALIAS_KINDS {
            assert_eq!(kind.name().parse::<AliasKind>().unwrap(), kind);
        }
        assert!("install".parse::<AliasKind>().is_err());
    }
}
