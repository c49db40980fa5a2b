//! Base-repository locator.
//!
//! Finds the single repository URL a job is configured to build from. A
//! branch of a multi-branch project carries it on its branch job property; a
//! standalone pipeline carries it inside a script-from-SCM definition. Only
//! git descriptors count, and only their first remote.

use crate::domain::{
    BranchJob, FlowDefinition, GitScm, JobConfiguration, PipelineJob, ScmDescriptor,
};

/// Base repository URL for `job`, or `None` when the job names none.
///
/// Missing properties, missing branches, non-git descriptors and empty remote
/// lists all resolve to `None`.
pub fn locate_base_repository(job: &JobConfiguration) -> Option<&str> {
    job_git_scm(job).and_then(GitScm::first_remote_url)
}

/// The git descriptor a job is configured against, if any.
pub fn job_git_scm(job: &JobConfiguration) -> Option<&GitScm> {
    let scm = match job {
        JobConfiguration::Branch(branch_job) => branch_scm(branch_job),
        JobConfiguration::Pipeline(pipeline) => pipeline_scm(pipeline),
        JobConfiguration::Other { .. } => None,
    };
    scm.and_then(ScmDescriptor::as_git)
}

fn branch_scm(job: &BranchJob) -> Option<&ScmDescriptor> {
    job.branch_property
        .as_ref()?
        .branch
        .as_ref()
        .map(|branch| &branch.scm)
}

fn pipeline_scm(job: &PipelineJob) -> Option<&ScmDescriptor> {
    match job.definition.as_ref()? {
        FlowDefinition::ScmScript { scm, .. } => Some(scm),
        FlowDefinition::InlineScript { .. } => None,
    }
}
