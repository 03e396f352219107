//! Run configuration: service base URLs, HTTP settings, resolver options.
//!
//! Every value has a working default; adapters override individual fields
//! with the builder methods (the CLI feeds environment variables through
//! them).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CoreError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_mins(1);

/// Default cap on sequences in a CATH FunFam alignment.
pub const DEFAULT_CATH_MAX_SEQUENCES: u32 = 20_000;

/// A configurable base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// PDBe file downloads.
    Pdbe,
    /// PDBe REST API (entry summaries).
    PdbeApi,
    /// UniProtKB REST.
    Uniprot,
    /// SIFTS XML directory.
    Sifts,
    /// CATH versioned site.
    Cath,
    /// InterPro API serving Pfam entries.
    Pfam,
}

impl Endpoint {
    /// Every endpoint, in a stable order.
    pub const ALL: [Self; 6] = [
        Self::Pdbe,
        Self::PdbeApi,
        Self::Uniprot,
        Self::Sifts,
        Self::Cath,
        Self::Pfam,
    ];

    /// Environment variable that overrides this endpoint.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Pdbe => "BIODL_PDBE_URL",
            Self::PdbeApi => "BIODL_PDBE_API_URL",
            Self::Uniprot => "BIODL_UNIPROT_URL",
            Self::Sifts => "BIODL_SIFTS_URL",
            Self::Cath => "BIODL_CATH_URL",
            Self::Pfam => "BIODL_PFAM_URL",
        }
    }

    const fn default_url(self) -> &'static str {
        match self {
            Self::Pdbe => "https://www.ebi.ac.uk/pdbe",
            Self::PdbeApi => "https://www.ebi.ac.uk/pdbe/api",
            Self::Uniprot => "https://rest.uniprot.org/uniprotkb",
            Self::Sifts => "https://ftp.ebi.ac.uk/pub/databases/msd/sifts/xml",
            Self::Cath => "https://www.cathdb.info/version/v4_2_0",
            Self::Pfam => "https://www.ebi.ac.uk/interpro/api",
        }
    }
}

/// Base URLs for every service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub pdbe: Url,
    pub pdbe_api: Url,
    pub uniprot: Url,
    pub sifts: Url,
    pub cath: Url,
    pub pfam: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        let parse =
            |e: Endpoint| Url::parse(e.default_url()).expect("default endpoint URLs are valid");
        Self {
            pdbe: parse(Endpoint::Pdbe),
            pdbe_api: parse(Endpoint::PdbeApi),
            uniprot: parse(Endpoint::Uniprot),
            sifts: parse(Endpoint::Sifts),
            cath: parse(Endpoint::Cath),
            pfam: parse(Endpoint::Pfam),
        }
    }
}

impl Endpoints {
    /// Point a single endpoint somewhere else.
    ///
    /// Only `http` and `https` URLs are accepted.
    pub fn with_base(mut self, endpoint: Endpoint, base: &str) -> Result<Self, CoreError> {
        let url = Url::parse(base.trim())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::Configuration(format!(
                "{} must be an http(s) URL, got '{base}'",
                endpoint.env_var()
            )));
        }
        *self.slot(endpoint) = url;
        Ok(self)
    }

    /// Point every endpoint at one base, each under its own path segment.
    ///
    /// Used by tests to route all services to a single mock server.
    pub fn all_under(base: &Url) -> Self {
        let under = |segment: &str| {
            let mut url = base.clone();
            let base_path = url.path().trim_end_matches('/').to_string();
            url.set_path(&format!("{base_path}/{segment}"));
            url
        };
        Self {
            pdbe: under("pdbe"),
            pdbe_api: under("pdbe/api"),
            uniprot: under("uniprotkb"),
            sifts: under("sifts"),
            cath: under("cath"),
            pfam: under("interpro"),
        }
    }

    const fn slot(&mut self, endpoint: Endpoint) -> &mut Url {
        match endpoint {
            Endpoint::Pdbe => &mut self.pdbe,
            Endpoint::PdbeApi => &mut self.pdbe_api,
            Endpoint::Uniprot => &mut self.uniprot,
            Endpoint::Sifts => &mut self.sifts,
            Endpoint::Cath => &mut self.cath,
            Endpoint::Pfam => &mut self.pfam,
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    /// Per-request timeout; exceeding it is a network error.
    pub timeout: Duration,
    /// User agent string for HTTP requests.
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("biodownloader/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpSettings {
    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Which Pfam alignment to fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PfamAlignment {
    /// Curated seed alignment.
    #[default]
    Seed,
    /// Full alignment of all family members.
    Full,
}

impl PfamAlignment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for PfamAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PfamAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seed" => Ok(Self::Seed),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown alignment size '{other}' (expected seed or full)")),
        }
    }
}

/// Per-service knobs that change the request URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// `max_sequences` query parameter for CATH FunFam alignments.
    pub cath_max_sequences: u32,
    /// Pfam alignment size.
    pub pfam_alignment: PfamAlignment,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            cath_max_sequences: DEFAULT_CATH_MAX_SEQUENCES,
            pfam_alignment: PfamAlignment::Seed,
        }
    }
}

/// Everything a run needs besides its identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadConfig {
    pub endpoints: Endpoints,
    pub http: HttpSettings,
    pub resolver: ResolverOptions,
}
