//! Rebuild Provenance Library
//!
//! Records where a promoted rebuild came from: the upstream build that
//! triggered it and the exact commit of the job's base repository it built.

pub mod action;
pub mod domain;
pub mod locator;
pub mod matcher;
pub mod obs;
pub mod resolver;
pub mod telemetry;

pub use action::{PromoteRebuildAction, DISPLAY_NAME, URL_NAME};
pub use domain::{
    Branch, BranchJob, BranchJobProperty, BuildHandle, BuildSnapshot, CheckoutRecord,
    FlowDefinition, GitScm, JobConfiguration, PipelineJob, ProvenanceError, ProvenanceRecord,
    RebuildReason, Result, Revision, ScmDescriptor, UpstreamCause, UserRemoteConfig,
};
pub use locator::{job_git_scm, locate_base_repository};
pub use matcher::{collect_commit_hashes, match_commit};
pub use obs::{
    emit_base_repository_unresolved, emit_commit_unmatched, emit_provenance_resolved, BuildSpan,
};
pub use resolver::resolve;
pub use telemetry::init_tracing;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
