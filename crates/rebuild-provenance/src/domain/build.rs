//! Build handle abstraction and the JSON snapshot that implements it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ProvenanceError, Result};
use super::job::JobConfiguration;
use super::scm::CheckoutRecord;

/// Standard upstream-trigger metadata, copied verbatim into provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamCause {
    /// Full name of the upstream job.
    pub upstream_project: String,

    /// Number of the upstream build.
    pub upstream_build: u64,

    /// Host-relative URL of the upstream build, absent when nothing upstream
    /// triggered this one.
    #[serde(default)]
    pub upstream_url: Option<String>,
}

impl UpstreamCause {
    pub fn new(
        upstream_project: impl Into<String>,
        upstream_build: u64,
        upstream_url: Option<String>,
    ) -> Self {
        Self {
            upstream_project: upstream_project.into(),
            upstream_build,
            upstream_url,
        }
    }
}

/// Read-only view of a build owned by the host CI system.
///
/// Implementations hand out already-materialized data; resolution never
/// mutates anything reached through this trait.
pub trait BuildHandle {
    /// Configuration of the job that owns this build.
    fn job(&self) -> &JobConfiguration;

    /// Checkout records attached to the build, in attachment order.
    fn checkout_records(&self) -> &[CheckoutRecord];

    /// Upstream-trigger metadata for the build.
    fn upstream_cause(&self) -> &UpstreamCause;
}

/// A build exported by the host as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSnapshot {
    pub job: JobConfiguration,

    #[serde(default)]
    pub checkout_records: Vec<CheckoutRecord>,

    pub upstream_cause: UpstreamCause,
}

impl BuildSnapshot {
    pub fn new(
        job: JobConfiguration,
        checkout_records: Vec<CheckoutRecord>,
        upstream_cause: UpstreamCause,
    ) -> Self {
        Self {
            job,
            checkout_records,
            upstream_cause,
        }
    }

    /// Decode and validate a snapshot from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: BuildSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<()> {
        if self.upstream_cause.upstream_project.trim().is_empty() {
            return Err(ProvenanceError::InvalidSnapshot(
                "upstream_project is empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl BuildHandle for BuildSnapshot {
    fn job(&self) -> &JobConfiguration {
        &self.job
    }

    fn checkout_records(&self) -> &[CheckoutRecord] {
        &self.checkout_records
    }

    fn upstream_cause(&self) -> &UpstreamCause {
        &self.upstream_cause
    }
}
