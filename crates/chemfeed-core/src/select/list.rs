//! The final, ordered download list.

/// Bibliography paths followed by chemical-table paths, each group sorted
/// lexicographically and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadList {
    paths: Vec<String>,
    biblio_count: usize,
}

impl DownloadList {
    /// Builds the list from two already sorted, deduplicated groups.
    pub(crate) fn from_groups(
        biblio: impl IntoIterator<Item = String>,
        chem: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut paths: Vec<String> = biblio.into_iter().collect();
        let biblio_count = paths.len();
        paths.extend(chem);
        Self {
            paths,
            biblio_count,
        }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn bibliography(&self) -> &[String] {
        &self.paths[..self.biblio_count]
    }

    pub fn chemical_tables(&self) -> &[String] {
        &self.paths[self.biblio_count..]
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.paths.iter()
    }

    pub fn into_paths(self) -> Vec<String> {
        self.paths
    }
}

impl<'a> IntoIterator for &'a DownloadList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
