//! CATH FunFam seed alignments.

use url::Url;

use super::{Resolve, Target, default_filename, ensure_supported, join_path};
use crate::domain::{Format, Identifier, Service};
use crate::download::DownloadError;

/// CATH resolver. Identifiers have the shape `<superfamily>_<funfam>`,
/// e.g. `1.50.10.100_1318`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CathResolver {
    base: Url,
    max_sequences: u32,
}

impl CathResolver {
    pub const fn new(base: Url, max_sequences: u32) -> Self {
        Self {
            base,
            max_sequences,
        }
    }
}

/// Split a FunFam identifier into superfamily and funfam number.
fn split_funfam(identifier: &Identifier) -> Result<(&str, &str), DownloadError> {
    match identifier.as_str().split_once('_') {
        Some((superfamily, funfam))
            if !superfamily.is_empty() && !funfam.is_empty() && !funfam.contains('_') =>
        {
            Ok((superfamily, funfam))
        }
        _ => Err(DownloadError::invalid_identifier(
            identifier.as_str(),
            "expected a CATH <superfamily>_<funfam> identifier",
        )),
    }
}

impl Resolve for CathResolver {
    fn service(&self) -> Service {
        Service::Cath
    }

    fn resolve(&self, identifier: &Identifier, format: Format) -> Result<Target, DownloadError> {
        ensure_supported(Service::Cath, format)?;
        let (superfamily, funfam) = split_funfam(identifier)?;

        let mut url = join_path(
            &self.base,
            &format!("superfamily/{superfamily}/funfam/{funfam}/files/seed_alignment.fasta"),
        );
        url.query_pairs_mut()
            .append_pair("max_sequences", &self.max_sequences.to_string());

        Ok(Target::plain(url, default_filename(identifier, format)))
    }
}
