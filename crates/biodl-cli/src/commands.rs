//! Service subcommands.
//!
//! One subcommand per service. Each takes one or more identifiers and at
//! least one format flag.

use std::collections::BTreeSet;

use biodl_core::{DEFAULT_CATH_MAX_SEQUENCES, Format, PfamAlignment, ResolverOptions, Service};
use clap::{Args, Subcommand};

/// Available services.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Structures from the PDBe
    Pdb(PdbArgs),

    /// Sequences and annotations from UniProtKB
    Uniprot(UniprotArgs),

    /// Family alignments from Pfam
    Pfam(PfamArgs),

    /// FunFam seed alignments from CATH
    Cath(CathArgs),

    /// Residue-level structure to sequence mappings from SIFTS
    Sifts(SiftsArgs),
}

#[derive(Debug, Args)]
pub struct PdbArgs {
    /// PDB identifiers (e.g. 2pah)
    #[arg(required = true, num_args = 1.., value_name = "IDS")]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub formats: PdbFormats,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = true)]
pub struct PdbFormats {
    /// Legacy PDB flat file
    #[arg(long)]
    pub pdb: bool,

    /// Updated mmCIF file
    #[arg(long)]
    pub mmcif: bool,

    /// Preferred biological assembly (mmCIF)
    #[arg(long)]
    pub bio: bool,
}

#[derive(Debug, Args)]
pub struct UniprotArgs {
    /// UniProtKB accessions (e.g. P00439)
    #[arg(required = true, num_args = 1.., value_name = "IDS")]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub formats: UniprotFormats,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = true)]
pub struct UniprotFormats {
    /// Sequence in FASTA
    #[arg(long)]
    pub fasta: bool,

    /// Feature annotations in GFF
    #[arg(long)]
    pub gff: bool,

    /// Flat text entry
    #[arg(long)]
    pub txt: bool,
}

#[derive(Debug, Args)]
pub struct PfamArgs {
    /// Pfam accessions (e.g. PF08124)
    #[arg(required = true, num_args = 1.., value_name = "IDS")]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub formats: PfamFormats,

    /// Alignment size
    #[arg(long, default_value_t = PfamAlignment::Seed, value_name = "seed|full")]
    pub alignment: PfamAlignment,
}

#[derive(Debug, Args)]
#[group(required = true)]
pub struct PfamFormats {
    /// Stockholm alignment
    #[arg(long)]
    pub pfam: bool,
}

#[derive(Debug, Args)]
pub struct CathArgs {
    /// FunFam identifiers, `<superfamily>_<funfam>` (e.g. `1.50.10.100_1318`)
    #[arg(required = true, num_args = 1.., value_name = "IDS")]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub formats: CathFormats,

    /// Maximum number of sequences in the alignment
    #[arg(long, default_value_t = DEFAULT_CATH_MAX_SEQUENCES, value_name = "N")]
    pub max_sequences: u32,
}

#[derive(Debug, Args)]
#[group(required = true)]
pub struct CathFormats {
    /// Seed alignment in FASTA
    #[arg(long)]
    pub cath: bool,
}

#[derive(Debug, Args)]
pub struct SiftsArgs {
    /// PDB identifiers (e.g. 2pah)
    #[arg(required = true, num_args = 1.., value_name = "IDS")]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub formats: SiftsFormats,
}

#[derive(Debug, Args)]
#[group(required = true)]
pub struct SiftsFormats {
    /// SIFTS XML mapping
    #[arg(long)]
    pub sifts: bool,
}

fn selected(flags: &[(bool, Format)]) -> BTreeSet<Format> {
    flags
        .iter()
        .filter(|(on, _)| *on)
        .map(|&(_, format)| format)
        .collect()
}

impl Commands {
    /// Service the subcommand targets.
    pub const fn service(&self) -> Service {
        match self {
            Self::Pdb(_) => Service::Pdb,
            Self::Uniprot(_) => Service::Uniprot,
            Self::Pfam(_) => Service::Pfam,
            Self::Cath(_) => Service::Cath,
            Self::Sifts(_) => Service::Sifts,
        }
    }

    /// Raw identifier tokens in the order given.
    pub fn identifiers(&self) -> &[String] {
        match self {
            Self::Pdb(a) => &a.ids,
            Self::Uniprot(a) => &a.ids,
            Self::Pfam(a) => &a.ids,
            Self::Cath(a) => &a.ids,
            Self::Sifts(a) => &a.ids,
        }
    }

    /// Requested formats, deduplicated.
    pub fn formats(&self) -> BTreeSet<Format> {
        match self {
            Self::Pdb(a) => selected(&[
                (a.formats.pdb, Format::Pdb),
                (a.formats.mmcif, Format::Mmcif),
                (a.formats.bio, Format::Bio),
            ]),
            Self::Uniprot(a) => selected(&[
                (a.formats.fasta, Format::Fasta),
                (a.formats.gff, Format::Gff),
                (a.formats.txt, Format::Txt),
            ]),
            Self::Pfam(a) => selected(&[(a.formats.pfam, Format::Pfam)]),
            Self::Cath(a) => selected(&[(a.formats.cath, Format::Cath)]),
            Self::Sifts(a) => selected(&[(a.formats.sifts, Format::Sifts)]),
        }
    }

    /// Resolver options with this subcommand's knobs applied.
    pub fn resolver_options(&self) -> ResolverOptions {
        let mut options = ResolverOptions::default();
        match self {
            Self::Pfam(a) => options.pfam_alignment = a.alignment,
            Self::Cath(a) => options.cath_max_sequences = a.max_sequences,
            Self::Pdb(_) | Self::Uniprot(_) | Self::Sifts(_) => {}
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::parser::Cli;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("biodownloader").chain(args.iter().copied()))
    }

    #[test]
    fn pdb_formats_and_ids() {
        let cli = parse(&["pdb", "2pah", "1cbs", "--mmcif", "--pdb"]).unwrap();
        assert_eq!(cli.command.service(), Service::Pdb);
        assert_eq!(cli.command.identifiers(), ["2pah", "1cbs"]);
        assert_eq!(
            cli.command.formats().into_iter().collect::<Vec<_>>(),
            vec![Format::Pdb, Format::Mmcif]
        );
    }

    #[test]
    fn format_flag_is_required() {
        let err = parse(&["uniprot", "P00439"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn identifiers_are_required() {
        let err = parse(&["pdb", "--pdb"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn foreign_format_flag_is_rejected() {
        assert!(parse(&["sifts", "2pah", "--fasta"]).is_err());
    }

    fn parsed_options(args: &[&str]) -> ResolverOptions {
        parse(args).unwrap().command.resolver_options()
    }

    #[test]
    fn cath_max_sequences() {
        let options = parsed_options(&["cath", "1_2", "--cath"]);
        assert_eq!(options.cath_max_sequences, DEFAULT_CATH_MAX_SEQUENCES);

        let options = parsed_options(&["cath", "1_2", "--cath", "--max-sequences", "50"]);
        assert_eq!(options.cath_max_sequences, 50);
    }

    #[test]
    fn pfam_alignment() {
        let options = parsed_options(&["pfam", "PF08124", "--pfam"]);
        assert_eq!(options.pfam_alignment, PfamAlignment::Seed);

        let options = parsed_options(&["pfam", "PF08124", "--pfam", "--alignment", "full"]);
        assert_eq!(options.pfam_alignment, PfamAlignment::Full);

        let huge = parse(&["pfam", "PF08124", "--pfam", "--alignment", "huge"]);
        assert!(huge.is_err());
    }
}
