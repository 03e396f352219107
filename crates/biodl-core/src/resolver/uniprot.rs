//! UniProtKB sequences and annotations.

use url::Url;

use super::{Resolve, Target, default_filename, ensure_supported, join_path};
use crate::domain::{Format, Identifier, Service};
use crate::download::DownloadError;

/// UniProtKB REST resolver; every format is its own file extension on the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniprotResolver {
    base: Url,
}

impl UniprotResolver {
    pub const fn new(base: Url) -> Self {
        Self { base }
    }
}

impl Resolve for UniprotResolver {
    fn service(&self) -> Service {
        Service::Uniprot
    }

    fn resolve(&self, identifier: &Identifier, format: Format) -> Result<Target, DownloadError> {
        ensure_supported(Service::Uniprot, format)?;

        let url = join_path(&self.base, &format!("{identifier}.{}", format.as_str()));
        Ok(Target::plain(url, default_filename(identifier, format)))
    }
}
