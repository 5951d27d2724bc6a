//! Remote path joining and splitting.

/// Joins a remote directory and an entry name with exactly one `/` between them.
pub fn join_remote(dir: &str, name: &str) -> String {
    format!(
        "{}/{}",
        dir.trim_end_matches('/'),
        name.trim_start_matches('/')
    )
}

/// Splits an absolute remote path into `(directory, filename)` at the last `/`.
///
/// The directory keeps its trailing slash (`/a/b/` for `/a/b/c.gz`), which is
/// what `CWD` accepts. Returns `None` when there is no `/` or the filename is empty.
pub fn split_remote_path(path: &str) -> Option<(&str, &str)> {
    let idx = path.rfind('/')?;
    let (dir, file) = (&path[..=idx], &path[idx + 1..]);
    if file.is_empty() {
        return None;
    }
    Some((dir, file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_normalizes_slashes() {
        assert_eq!(join_remote("/data/front", "2021/x.gz"), "/data/front/2021/x.gz");
        assert_eq!(join_remote("/data/front/", "/2021/x.gz"), "/data/front/2021/x.gz");
    }

    #[test]
    fn split_absolute() {
        assert_eq!(
            split_remote_path("/data/back/2020/f1.biblio.json.gz"),
            Some(("/data/back/2020/", "f1.biblio.json.gz"))
        );
    }

    #[test]
    fn split_relative_with_dir() {
        assert_eq!(split_remote_path("a/b.gz"), Some(("a/", "b.gz")));
        assert_eq!(split_remote_path("/top.gz"), Some(("/", "top.gz")));
    }

    #[test]
    fn split_rejects_unsplittable() {
        assert_eq!(split_remote_path("bare.gz"), None);
        assert_eq!(split_remote_path("/data/dir/"), None);
        assert_eq!(split_remote_path(""), None);
    }
}
