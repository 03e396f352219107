//! Accession identifiers supplied by the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Characters that would change the meaning of a URL path or query.
const RESERVED: &[char] = &['/', '\\', '?', '#', '%', '&'];

/// An opaque accession token (PDB ID, UniProt accession, Pfam ID, ...).
///
/// No structure is assumed beyond being safe to splice into a URL path.
/// Service-specific shapes (e.g. CATH `<superfamily>_<funfam>`) are checked by
/// the resolver for that service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Parse an identifier, trimming surrounding whitespace.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CoreError> {
        let token = raw.as_ref().trim();

        if token.is_empty() {
            return Err(CoreError::InvalidIdentifier {
                identifier: raw.as_ref().to_string(),
                reason: "identifier cannot be empty".to_string(),
            });
        }

        if let Some(bad) = token
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || RESERVED.contains(c))
        {
            return Err(CoreError::InvalidIdentifier {
                identifier: token.to_string(),
                reason: format!("contains reserved character {bad:?}"),
            });
        }

        // `.` and `..` are path segments, not names.
        if token.chars().all(|c| c == '.') {
            return Err(CoreError::InvalidIdentifier {
                identifier: token.to_string(),
                reason: "identifier cannot consist only of dots".to_string(),
            });
        }

        Ok(Self(token.to_string()))
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
