//! Temp file naming and atomic finalize.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const PART_SUFFIX: &str = ".part";

/// `<dir>/<name>.part` for a final path `<dir>/<name>`.
pub fn part_path_for(final_path: &Path) -> PathBuf {
    let mut name: OsString = final_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(PART_SUFFIX);
    final_path.with_file_name(name)
}

/// Rename the finished temp file to its final name (replacing any older copy).
pub(crate) fn finalize(part_path: &Path, final_path: &Path) -> io::Result<()> {
    fs::rename(part_path, final_path)
}

/// Best-effort cleanup of a temp file left by a failed retrieval.
pub(crate) fn discard(part_path: &Path) {
    if let Err(e) = fs::remove_file(part_path) {
        if e.kind() != io::ErrorKind::NotFound {
            tracing::warn!("could not remove {}: {}", part_path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_path_appends_suffix() {
        assert_eq!(
            part_path_for(Path::new("/tmp/out/a.biblio.json.gz")),
            PathBuf::from("/tmp/out/a.biblio.json.gz.part")
        );
    }

    #[test]
    fn finalize_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("x.gz");
        let part = part_path_for(&final_path);
        fs::write(&final_path, b"old").unwrap();
        fs::write(&part, b"new").unwrap();
        finalize(&part, &final_path).unwrap();
        assert_eq!(fs::read(&final_path).unwrap(), b"new");
        assert!(!part.exists());
    }

    #[test]
    fn discard_missing_is_quiet() {
        let dir = tempfile::tempdir().unwrap();
        discard(&dir.path().join("never.part"));
    }
}
