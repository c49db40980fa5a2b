//! The provenance record attached to a promoted rebuild.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::build::UpstreamCause;
use super::error::ProvenanceError;

/// Classification of a provenance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RebuildReason {
    #[default]
    #[serde(rename = "RELEASE")]
    Release,
}

impl RebuildReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RebuildReason::Release => "RELEASE",
        }
    }
}

impl std::fmt::Display for RebuildReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which upstream build and which source commit a rebuild was made from.
///
/// Built once per build and never mutated. Fields are exported under the
/// camelCase names the host exposes as build metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawProvenanceRecord")]
pub struct ProvenanceRecord {
    reason: RebuildReason,
    upstream_project: String,
    upstream_build: u64,
    upstream_url: Option<String>,
    build_remote: Option<String>,
    build_hash: Option<String>,
}

/// Wire form of a record, checked before it becomes a `ProvenanceRecord`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProvenanceRecord {
    reason: RebuildReason,
    upstream_project: String,
    upstream_build: u64,
    #[serde(default)]
    upstream_url: Option<String>,
    #[serde(default)]
    build_remote: Option<String>,
    #[serde(default)]
    build_hash: Option<String>,
}

impl TryFrom<RawProvenanceRecord> for ProvenanceRecord {
    type Error = ProvenanceError;

    fn try_from(raw: RawProvenanceRecord) -> Result<Self, Self::Error> {
        if raw.build_hash.is_some() && raw.build_remote.is_none() {
            return Err(ProvenanceError::InvalidRecord(
                "buildHash present without buildRemote".to_string(),
            ));
        }
        Ok(Self {
            reason: raw.reason,
            upstream_project: raw.upstream_project,
            upstream_build: raw.upstream_build,
            upstream_url: raw.upstream_url,
            build_remote: raw.build_remote,
            build_hash: raw.build_hash,
        })
    }
}

impl ProvenanceRecord {
    /// Assemble a record from the upstream cause and the resolved commit.
    ///
    /// A hash without a base repository is dropped: `build_hash` is only
    /// present when `build_remote` is.
    pub fn new(
        cause: &UpstreamCause,
        build_remote: Option<String>,
        build_hash: Option<String>,
    ) -> Self {
        let build_hash = build_hash.filter(|_| build_remote.is_some());
        Self {
            reason: RebuildReason::Release,
            upstream_project: cause.upstream_project.clone(),
            upstream_build: cause.upstream_build,
            upstream_url: cause.upstream_url.clone(),
            build_remote,
            build_hash,
        }
    }

    /// Always `"RELEASE"`.
    pub fn reason(&self) -> &'static str {
        self.reason.as_str()
    }

    pub fn upstream_project(&self) -> &str {
        &self.upstream_project
    }

    pub fn upstream_build(&self) -> u64 {
        self.upstream_build
    }

    pub fn upstream_url(&self) -> Option<&str> {
        self.upstream_url.as_deref()
    }

    /// Base repository URL the job is configured against.
    pub fn build_remote(&self) -> Option<&str> {
        self.build_remote.as_deref()
    }

    /// Commit built from the base repository.
    pub fn build_hash(&self) -> Option<&str> {
        self.build_hash.as_deref()
    }

    /// SHA-256 hex digest of the record's JSON form.
    ///
    /// Field order is fixed by the struct, so equal records always hash equally.
    pub fn digest(&self) -> String {
        let bytes =
            serde_json::to_vec(self).expect("provenance records must be serializable for hashing");
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        hex::encode(hasher.finalize())
    }

    /// Short digest (first 12 chars).
    pub fn short_digest(&self) -> String {
        let digest = self.digest();
        digest[..12].to_string()
    }
}
