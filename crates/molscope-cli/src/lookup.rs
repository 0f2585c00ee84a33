use molscope::core::io::error::ParseError;
use molscope::core::io::sdf::SdfFile;
use molscope::core::io::traits::MolecularFile;
use molscope::core::models::molecule::Molecule;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const PUBCHEM_BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug/";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("No structure found for '{0}'")]
    NotFound(String),
    #[error("Request failed: {0}")]
    Transport(#[source] anyhow::Error),
    #[error("Received an unreadable structure: {0}")]
    Parse(#[from] ParseError),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    ThreeD,
    TwoD,
}

impl RecordType {
    fn as_query(self) -> &'static str {
        match self {
            Self::ThreeD => "3d",
            Self::TwoD => "2d",
        }
    }
}

/// Protocol of a compound database: resolve a name, then download a record.
///
/// `Ok(None)` means the server answered but had nothing; transport failures are
/// errors.
pub trait StructureSource {
    async fn resolve_cid(&self, query: &str) -> Result<Option<u64>, LookupError>;
    async fn fetch_sdf(&self, cid: u64, record: RecordType) -> Result<Option<String>, LookupError>;
}

/// Resolves `query` to a compound and parses its 3D record, falling back to the 2D
/// record once when no 3D conformer exists.
pub async fn fetch_structure<S: StructureSource>(
    source: &S,
    query: &str,
) -> Result<Molecule, LookupError> {
    let cid = source
        .resolve_cid(query)
        .await?
        .ok_or_else(|| LookupError::NotFound(query.to_string()))?;
    debug!(cid, "Resolved compound identifier.");

    let (text, source_label) = match source.fetch_sdf(cid, RecordType::ThreeD).await? {
        Some(text) => (text, "PubChem"),
        None => {
            warn!(cid, "No 3D conformer available, falling back to the 2D record.");
            let text = source
                .fetch_sdf(cid, RecordType::TwoD)
                .await?
                .ok_or_else(|| LookupError::NotFound(query.to_string()))?;
            (text, "PubChem (2D)")
        }
    };

    let mut molecule = SdfFile::parse(&text, query)?;
    molecule
        .metadata
        .insert("source".to_string(), source_label.to_string());
    molecule.metadata.insert("cid".to_string(), cid.to_string());
    info!(cid, atoms = molecule.atom_count(), "Fetched structure.");
    Ok(molecule)
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CidResponse {
    identifier_list: IdentifierList,
}

#[derive(Deserialize)]
struct IdentifierList {
    #[serde(rename = "CID")]
    cid: Vec<u64>,
}

pub struct PubChemClient {
    client: reqwest::Client,
    base_url: Url,
}

impl PubChemClient {
    pub fn new(timeout: Duration) -> Result<Self, LookupError> {
        Self::with_base_url(PUBCHEM_BASE_URL, timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let base_url = Url::parse(base_url).map_err(|e| LookupError::Transport(e.into()))?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                LookupError::Transport(anyhow::anyhow!("'{}' cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Body of a successful response, or `None` for any non-success status.
    async fn get_text(&self, url: Url) -> Result<Option<String>, LookupError> {
        debug!(%url, "Sending request.");
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "Request returned no record.");
            return Ok(None);
        }
        Ok(Some(response.text().await?))
    }
}

impl StructureSource for PubChemClient {
    async fn resolve_cid(&self, query: &str) -> Result<Option<u64>, LookupError> {
        let url = self.endpoint(&["compound", "name", query, "cids", "JSON"])?;
        let Some(body) = self.get_text(url).await? else {
            return Ok(None);
        };
        let parsed: CidResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Transport(e.into()))?;
        Ok(parsed.identifier_list.cid.first().copied())
    }

    async fn fetch_sdf(&self, cid: u64, record: RecordType) -> Result<Option<String>, LookupError> {
        let mut url = self.endpoint(&["compound", "cid", &cid.to_string(), "SDF"])?;
        url.query_pairs_mut()
            .append_pair("record_type", record.as_query());
        self.get_text(url).await
    }
}
