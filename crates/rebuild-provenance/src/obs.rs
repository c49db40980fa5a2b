//! Structured observability hooks for provenance resolution.
//!
//! This module provides:
//! - A build-scoped tracing span via the `BuildSpan` RAII guard
//! - Emission functions for resolution outcomes
//!
//! Resolved records are emitted at `info!`; fields that degrade to absent are
//! emitted at `debug!` since they are an expected outcome.

use tracing::{debug, info};

use crate::domain::ProvenanceRecord;

/// RAII guard that enters a span tagged with the upstream build identity.
///
/// # Example
///
/// ```ignore
/// let _span = BuildSpan::enter("build-123", 42);
/// // tracing calls now carry upstream_project = "build-123", upstream_build = 42
/// ```
pub struct BuildSpan {
    _span: tracing::span::EnteredSpan,
}

impl BuildSpan {
    pub fn enter(upstream_project: &str, upstream_build: u64) -> Self {
        let span = tracing::info_span!(
            "rebuild_provenance.resolve",
            upstream_project = %upstream_project,
            upstream_build = upstream_build,
        );
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: provenance record assembled.
pub fn emit_provenance_resolved(record: &ProvenanceRecord) {
    info!(
        event = "provenance.resolved",
        reason = record.reason(),
        upstream_project = %record.upstream_project(),
        upstream_build = record.upstream_build(),
        build_remote = record.build_remote().unwrap_or("-"),
        build_hash = record.build_hash().unwrap_or("-"),
    );
}

/// Emit event: the job names no base repository.
pub fn emit_base_repository_unresolved(job_name: &str, shape: &str) {
    debug!(
        event = "provenance.base_repository_unresolved",
        job = %job_name,
        shape = %shape,
    );
}

/// Emit event: no checkout of the base repository carried a commit hash.
pub fn emit_commit_unmatched(build_remote: &str, checkout_count: usize) {
    debug!(
        event = "provenance.commit_unmatched",
        build_remote = %build_remote,
        checkout_count = checkout_count,
    );
}
