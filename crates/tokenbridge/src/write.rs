//! Artifact persistence.
//!
//! Each artifact is written whole: contents go to a temporary file in the
//! target directory which is then renamed over the destination. Readers see
//! either the previous artifact or the new one, never a partial write.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, TokenError};

/// A generated artifact and the path it is committed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Whether a committed artifact matches freshly generated contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    Fresh,
    Stale,
    Missing,
}

/// Writes one artifact atomically, creating parent directories.
pub fn write_artifact(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| TokenError::io(dir, e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| TokenError::io(dir, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| TokenError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| TokenError::io(path, e.error))?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}

/// Writes independent artifacts concurrently.
///
/// Every write runs to completion; the first error in artifact order is
/// returned.
pub fn write_artifacts(artifacts: &[Artifact]) -> Result<()> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = artifacts
            .iter()
            .map(|artifact| scope.spawn(move || write_artifact(&artifact.path, &artifact.contents)))
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<()>>()
    })
}

/// Compares a committed artifact with freshly generated contents.
pub fn check_artifact(path: impl AsRef<Path>, contents: &str) -> Result<ArtifactStatus> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(existing) if existing == contents => Ok(ArtifactStatus::Fresh),
        Ok(_) => Ok(ArtifactStatus::Stale),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ArtifactStatus::Missing),
        Err(e) => Err(TokenError::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated/nested/theme.css");

        write_artifact(&path, "@theme {}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "@theme {}\n");
    }

    #[test]
    fn test_write_overwrites_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.css");
        std::fs::write(&path, "a much longer previous artifact body").unwrap();

        write_artifact(&path, "short").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_artifacts_writes_all() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = [
            Artifact::new(dir.path().join("css-variables.ts"), "export {};\n"),
            Artifact::new(dir.path().join("theme.css"), "@theme {}\n"),
        ];

        write_artifacts(&artifacts).unwrap();
        for artifact in &artifacts {
            assert_eq!(
                std::fs::read_to_string(&artifact.path).unwrap(),
                artifact.contents
            );
        }
    }

    #[test]
    fn test_write_artifacts_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let artifacts = [
            Artifact::new(dir.path().join("ok.css"), "ok"),
            Artifact::new(blocker.join("theme.css"), "unreachable"),
        ];
        let err = write_artifacts(&artifacts).unwrap_err();
        assert!(matches!(err, TokenError::Io { .. }));
        assert!(dir.path().join("ok.css").exists());
    }

    #[test]
    fn test_check_artifact_states() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.css");

        assert_eq!(check_artifact(&path, "x").unwrap(), ArtifactStatus::Missing);
        std::fs::write(&path, "x").unwrap();
        assert_eq!(check_artifact(&path, "x").unwrap(), ArtifactStatus::Fresh);
        assert_eq!(check_artifact(&path, "y").unwrap(), ArtifactStatus::Stale);
    }
}
