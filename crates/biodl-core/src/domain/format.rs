//! Output formats and the services that provide them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A remote data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// Macromolecular structures from the PDBe.
    Pdb,
    /// Sequences and annotations from UniProtKB.
    Uniprot,
    /// Family alignments from Pfam (served by InterPro).
    Pfam,
    /// FunFam seed alignments from CATH.
    Cath,
    /// Structure-sequence mappings from SIFTS.
    Sifts,
}

impl Service {
    /// All services, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Pdb,
        Self::Uniprot,
        Self::Pfam,
        Self::Cath,
        Self::Sifts,
    ];

    /// Formats this service can deliver, in iteration order.
    pub const fn formats(self) -> &'static [Format] {
        match self {
            Self::Pdb => &[Format::Pdb, Format::Mmcif, Format::Bio],
            Self::Uniprot => &[Format::Fasta, Format::Gff, Format::Txt],
            Self::Pfam => &[Format::Pfam],
            Self::Cath => &[Format::Cath],
            Self::Sifts => &[Format::Sifts],
        }
    }

    /// Whether `format` belongs to this service.
    pub fn supports(self, format: Format) -> bool {
        self.formats().contains(&format)
    }

    /// Lowercase name used on the command line and in reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdb => "pdb",
            Self::Uniprot => "uniprot",
            Self::Pfam => "pfam",
            Self::Cath => "cath",
            Self::Sifts => "sifts",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested output representation.
///
/// The derived ordering is the fixed iteration order used by the orchestrator,
/// independent of the order flags were given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Legacy PDB flat file.
    Pdb,
    /// Updated mmCIF of the asymmetric unit.
    Mmcif,
    /// Preferred biological assembly, mmCIF.
    Bio,
    /// SIFTS residue-level mapping XML.
    Sifts,
    /// UniProt sequence.
    Fasta,
    /// UniProt features.
    Gff,
    /// UniProt flat-text record.
    Txt,
    /// CATH FunFam seed alignment (FASTA).
    Cath,
    /// Pfam alignment (Stockholm).
    Pfam,
}

impl Format {
    /// All formats in iteration order.
    pub const ALL: [Self; 9] = [
        Self::Pdb,
        Self::Mmcif,
        Self::Bio,
        Self::Sifts,
        Self::Fasta,
        Self::Gff,
        Self::Txt,
        Self::Cath,
        Self::Pfam,
    ];

    /// Flag name without leading dashes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdb => "pdb",
            Self::Mmcif => "mmcif",
            Self::Bio => "bio",
            Self::Sifts => "sifts",
            Self::Fasta => "fasta",
            Self::Gff => "gff",
            Self::Txt => "txt",
            Self::Cath => "cath",
            Self::Pfam => "pfam",
        }
    }

    /// Extension of the file written to disk.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pdb => "pdb",
            Self::Mmcif | Self::Bio => "mmcif",
            Self::Sifts => "xml",
            Self::Fasta | Self::Cath => "fasta",
            Self::Gff => "gff",
            Self::Txt => "txt",
            Self::Pfam => "sth",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
