//! SIFTS residue-level structure-sequence mappings.

use url::Url;

use super::{PayloadEncoding, Resolve, Target, default_filename, ensure_supported, join_path};
use crate::domain::{Format, Identifier, Service};
use crate::download::DownloadError;

/// SIFTS XML resolver. Files are served gzip-compressed and stored as `.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiftsResolver {
    base: Url,
}

impl SiftsResolver {
    pub const fn new(base: Url) -> Self {
        Self { base }
    }
}

impl Resolve for SiftsResolver {
    fn service(&self) -> Service {
        Service::Sifts
    }

    fn resolve(&self, identifier: &Identifier, format: Format) -> Result<Target, DownloadError> {
        ensure_supported(Service::Sifts, format)?;

        let pdb_id = identifier.as_str().to_ascii_lowercase();
        let url = join_path(&self.base, &format!("{pdb_id}.xml.gz"));
        Ok(Target::plain(url, default_filename(identifier, format))
            .with_encoding(PayloadEncoding::Gzip))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xml_is_fetched_compressed_and_stored_plain() {
        let resolver = SiftsResolver::new(
            Url::parse("https://ftp.ebi.ac.uk/pub/databases/msd/sifts/xml").unwrap(),
        );
        let target = resolver
            .resolve(&Identifier::new("2pah").unwrap(), Format::Sifts)
            .unwrap();

        assert_eq!(
            target.url.as_str(),
            "https://ftp.ebi.ac.uk/pub/databases/msd/sifts/xml/2pah.xml.gz"
        );
        assert_eq!(target.filename, "2pah.xml");
        assert_eq!(target.encoding, PayloadEncoding::Gzip);
    }
}
