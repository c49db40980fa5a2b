//! Domain models for rebuild provenance.
//!
//! - `JobConfiguration`: the owning job, in one of the shapes that can name a
//!   base repository
//! - `CheckoutRecord`: what a build actually fetched
//! - `BuildHandle`: read-only access to a host build
//! - `ProvenanceRecord`: the resolved result

pub mod build;
pub mod error;
pub mod job;
pub mod provenance;
pub mod scm;

pub use build::{BuildHandle, BuildSnapshot, UpstreamCause};
pub use error::{ProvenanceError, Result};
pub use job::{Branch, BranchJob, BranchJobProperty, FlowDefinition, JobConfiguration, PipelineJob};
pub use provenance::{ProvenanceRecord, RebuildReason};
pub use scm::{CheckoutRecord, GitScm, Revision, ScmDescriptor, UserRemoteConfig};
