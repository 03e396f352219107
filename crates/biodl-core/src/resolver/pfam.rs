//! Pfam family alignments, served through the InterPro API.

use url::Url;

use super::{PayloadEncoding, Resolve, Target, default_filename, ensure_supported, join_path};
use crate::config::PfamAlignment;
use crate::domain::{Format, Identifier, Service};
use crate::download::DownloadError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PfamResolver {
    base: Url,
    alignment: PfamAlignment,
}

impl PfamResolver {
    pub const fn new(base: Url, alignment: PfamAlignment) -> Self {
        Self { base, alignment }
    }
}

impl Resolve for PfamResolver {
    fn service(&self) -> Service {
        Service::Pfam
    }

    fn resolve(&self, identifier: &Identifier, format: Format) -> Result<Target, DownloadError> {
        ensure_supported(Service::Pfam, format)?;

        let accession = identifier.as_str().to_ascii_uppercase();
        let mut url = join_path(&self.base, &format!("entry/pfam/{accession}/"));
        url.query_pairs_mut()
            .append_pair("annotation", &format!("alignment:{}", self.alignment));

        // InterPro compresses alignments, but not every mirror does.
        Ok(Target::plain(url, default_filename(identifier, format))
            .with_encoding(PayloadEncoding::Sniff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.ebi.ac.uk/interpro/api").unwrap()
    }

    #[test]
    fn seed_alignment_url() {
        let target = PfamResolver::new(base(), PfamAlignment::Seed)
            .resolve(&Identifier::new("PF08124").unwrap(), Format::Pfam)
            .unwrap();

        assert_eq!(
            target.url.as_str(),
            "https://www.ebi.ac.uk/interpro/api/entry/pfam/PF08124/?annotation=alignment%3Aseed"
        );
        assert_eq!(target.filename, "PF08124.sth");
        assert_eq!(target.encoding, PayloadEncoding::Sniff);
    }

    #[test]
    fn full_alignment_url() {
        let target = PfamResolver::new(base(), PfamAlignment::Full)
            .resolve(&Identifier::new("pf08124").unwrap(), Format::Pfam)
            .unwrap();

        assert!(target.url.path().ends_with("/entry/pfam/PF08124/"));
        assert_eq!(target.url.query(), Some("annotation=alignment%3Afull"));
        assert_eq!(target.filename, "pf08124.sth");
    }
}
