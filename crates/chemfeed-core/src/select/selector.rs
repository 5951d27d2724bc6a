//! Classification, supplementary pairing and final ordering.

use std::collections::BTreeSet;

use regex::Regex;

use super::classify::FileCategory;
use super::list::DownloadList;
use crate::config::FeedLayout;
use crate::error::FeedError;

/// Selector bound to one layout; the supplementary pattern is compiled once.
#[derive(Debug, Clone)]
pub struct Selector {
    biblio_suffix: String,
    chem_suffix: String,
    /// `<supp_marker>[0-9]+<chem_suffix>` anchored at the end of the path.
    supp_pattern: Regex,
}

impl Selector {
    pub fn new(layout: &FeedLayout) -> Result<Self, FeedError> {
        let pattern = format!(
            "{}[0-9]+{}$",
            regex::escape(&layout.supp_marker),
            regex::escape(&layout.chem_suffix)
        );
        Ok(Self {
            biblio_suffix: layout.biblio_suffix.clone(),
            chem_suffix: layout.chem_suffix.clone(),
            supp_pattern: Regex::new(&pattern)?,
        })
    }

    pub fn classify(&self, path: &str) -> FileCategory {
        if path.ends_with(&self.biblio_suffix) {
            FileCategory::Bibliography
        } else if self.supp_pattern.is_match(path) {
            FileCategory::SupplementaryChemicalTable
        } else if path.ends_with(&self.chem_suffix) {
            FileCategory::ChemicalTable
        } else {
            FileCategory::Unclassified
        }
    }

    /// Bibliography file implied by a supplementary chemical table:
    /// `.../X_supp7.chemicals.tsv.gz` -> `.../X.biblio.json.gz`.
    pub fn canonical_bibliography(&self, path: &str) -> Option<String> {
        let m = self.supp_pattern.find(path)?;
        Some(format!("{}{}", &path[..m.start()], self.biblio_suffix))
    }

    /// Builds the download list from candidate paths.
    ///
    /// Bibliography files come first, then chemical tables, each group in
    /// byte order. Every supplementary chemical table also pulls in its
    /// canonical bibliography file, whether or not it was a candidate.
    pub fn select<I, S>(&self, candidates: I) -> DownloadList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut biblio: BTreeSet<String> = BTreeSet::new();
        let mut chem: BTreeSet<String> = BTreeSet::new();
        let mut discarded = 0usize;

        for candidate in candidates {
            let path = candidate.as_ref();
            match self.classify(path) {
                FileCategory::Bibliography => {
                    biblio.insert(path.to_string());
                }
                FileCategory::ChemicalTable => {
                    chem.insert(path.to_string());
                }
                FileCategory::SupplementaryChemicalTable => {
                    chem.insert(path.to_string());
                    if let Some(paired) = self.canonical_bibliography(path) {
                        tracing::trace!("{} pairs with {}", path, paired);
                        biblio.insert(paired);
                    }
                }
                FileCategory::Unclassified => {
                    discard_unclassified(path);
                    discarded += 1;
                }
            }
        }

        let list = DownloadList::from_groups(biblio, chem);
        tracing::info!(
            "selected {} files for download ({} bibliography, {} chemical, {} discarded)",
            list.len(),
            list.bibliography().len(),
            list.chemical_tables().len(),
            discarded
        );
        list
    }
}

/// Unclassified files are never downloaded; this is not an error.
fn discard_unclassified(path: &str) {
    tracing::trace!("discarding unclassified file {}", path);
}

/// One-shot selection with a fresh [`Selector`] for `layout`.
pub fn select_downloads<I, S>(layout: &FeedLayout, candidates: I) -> Result<DownloadList, FeedError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(Selector::new(layout)?.select(candidates))
}
