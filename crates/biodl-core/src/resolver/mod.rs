//! Service resolvers: identifier + format → request URL + filename.
//!
//! Each service is a small record type carrying its base URL and options.
//! [`ServiceResolver`] dispatches to them through the single [`Resolve`]
//! interface. Resolution is pure: the same inputs always yield the same
//! target.

mod cath;
mod pdbe;
mod pfam;
mod sifts;
mod uniprot;

use url::Url;

use crate::config::DownloadConfig;
use crate::domain::{Format, Identifier, Service};
use crate::download::DownloadError;

pub use cath::CathResolver;
pub use pdbe::{AssemblyLookup, DEFAULT_ASSEMBLY_ID, PdbeResolver};
pub use pfam::PfamResolver;
pub use sifts::SiftsResolver;
pub use uniprot::UniprotResolver;

/// How the response body is encoded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// Stored as received.
    Plain,
    /// Always gzip; stored decompressed.
    Gzip,
    /// Decompressed only when the body carries the gzip magic.
    Sniff,
}

/// Where a pair is fetched from and what it is called on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Fully-formed request URL.
    pub url: Url,
    /// File name inside the output directory.
    pub filename: String,
    /// Wire encoding of the payload.
    pub encoding: PayloadEncoding,
    /// Preferred-assembly lookup that may refine `url` before fetching.
    pub assembly: Option<AssemblyLookup>,
}

impl Target {
    /// A target stored as received.
    pub fn plain(url: Url, filename: impl Into<String>) -> Self {
        Self {
            url,
            filename: filename.into(),
            encoding: PayloadEncoding::Plain,
            assembly: None,
        }
    }

    /// Set the payload encoding.
    #[must_use]
    pub const fn with_encoding(mut self, encoding: PayloadEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Pure mapping from (identifier, format) to a [`Target`].
pub trait Resolve {
    /// Service this resolver builds URLs for.
    fn service(&self) -> Service;

    /// Build the target for one pair.
    ///
    /// Fails with `UnsupportedFormat` when `format` is not offered by the
    /// service, or `InvalidIdentifier` when the identifier has the wrong shape.
    fn resolve(&self, identifier: &Identifier, format: Format) -> Result<Target, DownloadError>;
}

/// One resolver per service, dispatched by variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceResolver {
    Pdb(PdbeResolver),
    Uniprot(UniprotResolver),
    Pfam(PfamResolver),
    Cath(CathResolver),
    Sifts(SiftsResolver),
}

impl ServiceResolver {
    /// Build the resolver for `service` from run configuration.
    pub fn for_service(service: Service, config: &DownloadConfig) -> Self {
        let endpoints = &config.endpoints;
        match service {
            Service::Pdb => Self::Pdb(PdbeResolver::new(
                endpoints.pdbe.clone(),
                endpoints.pdbe_api.clone(),
            )),
            Service::Uniprot => Self::Uniprot(UniprotResolver::new(endpoints.uniprot.clone())),
            Service::Pfam => Self::Pfam(PfamResolver::new(
                endpoints.pfam.clone(),
                config.resolver.pfam_alignment,
            )),
            Service::Cath => Self::Cath(CathResolver::new(
                endpoints.cath.clone(),
                config.resolver.cath_max_sequences,
            )),
            Service::Sifts => Self::Sifts(SiftsResolver::new(endpoints.sifts.clone())),
        }
    }

    fn inner(&self) -> &dyn Resolve {
        match self {
            Self::Pdb(r) => r,
            Self::Uniprot(r) => r,
            Self::Pfam(r) => r,
            Self::Cath(r) => r,
            Self::Sifts(r) => r,
        }
    }
}

impl Resolve for ServiceResolver {
    fn service(&self) -> Service {
        self.inner().service()
    }

    fn resolve(&self, identifier: &Identifier, format: Format) -> Result<Target, DownloadError> {
        self.inner().resolve(identifier, format)
    }
}

/// Reject formats the service does not offer.
fn ensure_supported(service: Service, format: Format) -> Result<(), DownloadError> {
    if service.supports(format) {
        Ok(())
    } else {
        Err(DownloadError::unsupported_format(service, format))
    }
}

/// Append `tail` to the path of `base`, keeping scheme, host and port.
fn join_path(base: &Url, tail: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{}", tail.trim_start_matches('/')));
    url.set_query(None);
    url
}

/// `<identifier>.<extension>`.
fn default_filename(identifier: &Identifier, format: Format) -> String {
    format!("{identifier}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> Identifier {
        Identifier::new(s).unwrap()
    }

    #[test]
    fn join_path_handles_trailing_slashes() {
        let base = Url::parse("https://example.org/api/").unwrap();
        assert_eq!(
            join_path(&base, "/entry/x").as_str(),
            "https://example.org/api/entry/x"
        );

        let no_path = Url::parse("http://localhost:1234").unwrap();
        assert_eq!(
            join_path(&no_path, "a.txt").as_str(),
            "http://localhost:1234/a.txt"
        );
    }

    #[test]
    fn dispatch_matches_service() {
        let config = DownloadConfig::default();
        for service in Service::ALL {
            assert_eq!(
                ServiceResolver::for_service(service, &config).service(),
                service
            );
        }
    }

    #[test]
    fn every_service_rejects_foreign_formats() {
        let config = DownloadConfig::default();
        for service in Service::ALL {
            let resolver = ServiceResolver::for_service(service, &config);
            for format in Format::ALL.into_iter().filter(|f| !service.supports(*f)) {
                let err = resolver.resolve(&id("1.10.8.10_1"), format).unwrap_err();
                assert_eq!(err, DownloadError::unsupported_format(service, format));
            }
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let config = DownloadConfig::default();
        let cases = [
            (Service::Pdb, "2pah"),
            (Service::Uniprot, "P00439"),
            (Service::Pfam, "PF08124"),
            (Service::Cath, "1.50.10.100_1318"),
            (Service::Sifts, "2pah"),
        ];
        for (service, raw) in cases {
            let resolver = ServiceResolver::for_service(service, &config);
            for &format in service.formats() {
                let first = resolver.resolve(&id(raw), format).unwrap();
                let second = resolver.resolve(&id(raw), format).unwrap();
                assert_eq!(first, second, "{service}/{format} not deterministic");
            }
        }
    }

    #[test]
    fn filenames_are_unique_per_service() {
        let config = DownloadConfig::default();
        let resolver = ServiceResolver::for_service(Service::Pdb, &config);
        let names: Vec<_> = Service::Pdb
            .formats()
            .iter()
            .map(|&f| resolver.resolve(&id("2pah"), f).unwrap().filename)
            .collect();
        assert_eq!(names, vec!["2pah.pdb", "2pah.mmcif", "2pah_bio.mmcif"]);
    }
}
