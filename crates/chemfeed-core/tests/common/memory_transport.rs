//! In-memory [`Transport`] for integration tests.
//!
//! Holds a tree of directories with file bodies, records every call, and can
//! be told to fail a file a number of times before serving it.

use chemfeed_core::remote::{join_remote, Transport, TransportError};
use std::collections::{BTreeMap, HashMap};
use std::io::Write;

#[derive(Default)]
pub struct MemoryTransport {
    dirs: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
    cwd: Option<String>,
    /// remote path -> remaining injected failures
    flaky: HashMap<String, u32>,
    pub calls: Vec<String>,
}

fn normalize(dir: &str) -> String {
    let trimmed = dir.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an (empty) directory.
    pub fn dir(mut self, dir: &str) -> Self {
        self.dirs.entry(normalize(dir)).or_default();
        self
    }

    /// Adds a file at an absolute remote path, creating its directory.
    pub fn file(mut self, path: &str, body: &[u8]) -> Self {
        let (dir, name) = path.rsplit_once('/').expect("absolute path");
        self.dirs
            .entry(normalize(dir))
            .or_default()
            .insert(name.to_string(), body.to_vec());
        self
    }

    /// Makes the next `times` retrievals of `path` fail with a timeout after
    /// writing half of the body.
    pub fn flaky(mut self, path: &str, times: u32) -> Self {
        self.flaky.insert(path.to_string(), times);
        self
    }

    pub fn retrievals_of(&self, name: &str) -> usize {
        let call = format!("retr {}", name);
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl Transport for MemoryTransport {
    fn change_dir(&mut self, path: &str) -> Result<(), TransportError> {
        self.calls.push(format!("cwd {}", path));
        let key = normalize(path);
        if !self.dirs.contains_key(&key) {
            return Err(TransportError::DirectoryUnavailable {
                path: path.to_string(),
            });
        }
        self.cwd = Some(key);
        Ok(())
    }

    fn list_dir(&mut self) -> Result<Vec<String>, TransportError> {
        self.calls.push("list".to_string());
        let cwd = self.cwd.clone().unwrap_or_else(|| "/".to_string());
        Ok(self
            .dirs
            .get(&cwd)
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn retrieve(&mut self, filename: &str, sink: &mut dyn Write) -> Result<u64, TransportError> {
        self.calls.push(format!("retr {}", filename));
        let cwd = self.cwd.clone().unwrap_or_else(|| "/".to_string());
        let body = self
            .dirs
            .get(&cwd)
            .and_then(|files| files.get(filename))
            .cloned()
            .ok_or_else(|| TransportError::FileUnavailable {
                name: filename.to_string(),
            })?;

        let full = join_remote(&cwd, filename);
        if let Some(left) = self.flaky.get_mut(&full) {
            if *left > 0 {
                *left -= 1;
                sink.write_all(&body[..body.len() / 2])
                    .map_err(TransportError::Io)?;
                return Err(TransportError::Timeout);
            }
        }

        sink.write_all(&body).map_err(TransportError::Io)?;
        Ok(body.len() as u64)
    }

    /// Like a fresh login: the working directory is forgotten.
    fn reset(&mut self) -> Result<(), TransportError> {
        self.calls.push("reset".to_string());
        self.cwd = None;
        Ok(())
    }
}

