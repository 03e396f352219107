//! Preferred biological assembly selection.
//!
//! The PDBe entry summary endpoint returns a document keyed by the lower-case
//! PDB id:
//!
//! ```json
//! { "2pah": [ { "assemblies": [ { "assembly_id": "1", "preferred": true } ] } ] }
//! ```

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Why no assembly could be picked from a summary document.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("malformed entry summary: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entry summary has no record for '{0}'")]
    MissingEntry(String),

    #[error("entry summary for '{0}' lists no assemblies")]
    NoAssemblies(String),

    #[error("entry summary for '{0}' marks no assembly as preferred")]
    NoPreferred(String),
}

#[derive(Debug, Deserialize)]
struct EntrySummary {
    #[serde(default)]
    assemblies: Vec<AssemblySummary>,
}

#[derive(Debug, Deserialize)]
struct AssemblySummary {
    assembly_id: AssemblyId,
    #[serde(default)]
    preferred: bool,
}

/// PDBe reports ids as strings, older documents used numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AssemblyId {
    Text(String),
    Number(u64),
}

impl AssemblyId {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s.trim().to_string(),
            Self::Number(n) => n.to_string(),
        }
    }
}

/// Pick the preferred assembly id for `pdb_id` from a summary document.
///
/// The assembly flagged `preferred` wins; an entry with a single assembly
/// uses that one.
pub fn preferred_assembly(summary: &[u8], pdb_id: &str) -> Result<String, AssemblyError> {
    let document: HashMap<String, Vec<EntrySummary>> = serde_json::from_slice(summary)?;
    let key = pdb_id.to_ascii_lowercase();

    let mut assemblies = document
        .into_iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        .and_then(|(_, entries)| entries.into_iter().next())
        .ok_or_else(|| AssemblyError::MissingEntry(key.clone()))?
        .assemblies;

    if assemblies.is_empty() {
        return Err(AssemblyError::NoAssemblies(key));
    }
    if assemblies.len() == 1 {
        return Ok(assemblies.remove(0).assembly_id.into_string());
    }

    assemblies
        .into_iter()
        .find(|a| a.preferred)
        .map(|a| a.assembly_id.into_string())
        .ok_or(AssemblyError::NoPreferred(key))
}
