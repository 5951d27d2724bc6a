//! File categories derived from path suffixes.

/// Category of a remote file, decided purely by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    /// `*.biblio.json.gz`
    Bibliography,
    /// `*.chemicals.tsv.gz`
    ChemicalTable,
    /// `*_supp<N>.chemicals.tsv.gz`; also a chemical table.
    SupplementaryChemicalTable,
    Unclassified,
}
