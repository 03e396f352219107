//! PDBe structures: PDB flat file, updated mmCIF, preferred assembly.

use url::Url;

use super::{PayloadEncoding, Resolve, Target, default_filename, ensure_supported, join_path};
use crate::domain::{Format, Identifier, Service};
use crate::download::DownloadError;

/// Assembly used when the preferred one cannot be determined.
pub const DEFAULT_ASSEMBLY_ID: &str = "1";

/// PDBe file download resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdbeResolver {
    base: Url,
    api: Url,
}

impl PdbeResolver {
    pub const fn new(base: Url, api: Url) -> Self {
        Self { base, api }
    }

    fn entry_file(&self, name: &str) -> Url {
        join_path(&self.base, &format!("entry-files/download/{name}"))
    }
}

impl Resolve for PdbeResolver {
    fn service(&self) -> Service {
        Service::Pdb
    }

    fn resolve(&self, identifier: &Identifier, format: Format) -> Result<Target, DownloadError> {
        ensure_supported(Service::Pdb, format)?;

        // PDBe paths are lower-case; the file keeps the identifier as given.
        let pdb_id = identifier.as_str().to_ascii_lowercase();

        let target = match format {
            Format::Pdb => Target::plain(
                self.entry_file(&format!("pdb{pdb_id}.ent")),
                default_filename(identifier, format),
            ),
            Format::Mmcif => Target::plain(
                self.entry_file(&format!("{pdb_id}_updated.cif")),
                default_filename(identifier, format),
            ),
            // `<id>_bio.mmcif` can collide with the mmCIF of an identifier that
            // itself ends in `_bio`; the second pair is then skipped.
            Format::Bio => {
                let lookup = AssemblyLookup {
                    summary_url: join_path(&self.api, &format!("pdb/entry/summary/{pdb_id}")),
                    pdb_id,
                    download_base: self.base.clone(),
                };
                Target {
                    url: lookup.url_for(DEFAULT_ASSEMBLY_ID),
                    filename: format!("{identifier}_bio.{}", format.extension()),
                    encoding: PayloadEncoding::Gzip,
                    assembly: Some(lookup),
                }
            }
            _ => return Err(DownloadError::unsupported_format(Service::Pdb, format)),
        };

        Ok(target)
    }
}

/// Refinement step for biological assemblies.
///
/// The PDBe summary endpoint names the preferred assembly of an entry; the
/// download URL embeds that assembly id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyLookup {
    /// PDBe entry summary endpoint for the entry.
    pub summary_url: Url,
    /// Lower-case PDB id, the key of the summary document.
    pub pdb_id: String,
    download_base: Url,
}

impl AssemblyLookup {
    /// Download URL for a given assembly id.
    pub fn url_for(&self, assembly_id: &str) -> Url {
        join_path(
            &self.download_base,
            &format!(
                "static/entry/download/{}-assembly-{}.cif.gz",
                self.pdb_id,
                assembly_id.trim()
            ),
        )
    }
}
