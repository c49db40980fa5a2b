//! Job configuration shapes.
//!
//! A job declares its base repository in one of two structurally distinct
//! places, depending on whether it is a branch of a multi-branch project or a
//! standalone pipeline. Everything else has no base repository.

use serde::{Deserialize, Serialize};

use super::scm::ScmDescriptor;

/// A branch discovered by a multi-branch project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name (e.g. `main`, `PR-42`).
    pub name: String,

    /// Source control the branch job checks out.
    #[serde(default)]
    pub scm: ScmDescriptor,
}

/// Per-branch job property attached by the multi-branch container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BranchJobProperty {
    #[serde(default)]
    pub branch: Option<Branch>,
}

/// Where a pipeline's script comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlowDefinition {
    /// Script fetched from source control at run time.
    ScmScript {
        scm: ScmDescriptor,
        #[serde(default = "default_script_path")]
        script_path: String,
        #[serde(default)]
        lightweight: bool,
    },
    /// Script embedded directly in the job configuration.
    InlineScript {
        script: String,
        #[serde(default)]
        sandbox: bool,
    },
}

fn default_script_path() -> String {
    "Jenkinsfile".to_string()
}

/// A job that belongs to a multi-branch container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchJob {
    pub full_name: String,

    #[serde(default)]
    pub branch_property: Option<BranchJobProperty>,
}

/// A standalone pipeline job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineJob {
    pub full_name: String,

    #[serde(default)]
    pub definition: Option<FlowDefinition>,
}

/// The owning job of a build, as one of the shapes the locator understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum JobConfiguration {
    Branch(BranchJob),
    Pipeline(PipelineJob),
    /// Freestyle jobs, folders, matrix configurations and anything else.
    Other { full_name: String, kind: String },
}

impl JobConfiguration {
    /// Branch job whose property points at `scm`.
    pub fn branch(
        full_name: impl Into<String>,
        branch: impl Into<String>,
        scm: ScmDescriptor,
    ) -> Self {
        JobConfiguration::Branch(BranchJob {
            full_name: full_name.into(),
            branch_property: Some(BranchJobProperty {
                branch: Some(Branch {
                    name: branch.into(),
                    scm,
                }),
            }),
        })
    }

    /// Pipeline job whose script is fetched from `scm`.
    pub fn scm_pipeline(full_name: impl Into<String>, scm: ScmDescriptor) -> Self {
        JobConfiguration::Pipeline(PipelineJob {
            full_name: full_name.into(),
            definition: Some(FlowDefinition::ScmScript {
                scm,
                script_path: default_script_path(),
                lightweight: false,
            }),
        })
    }

    /// Pipeline job with an embedded script.
    pub fn inline_pipeline(full_name: impl Into<String>, script: impl Into<String>) -> Self {
        JobConfiguration::Pipeline(PipelineJob {
            full_name: full_name.into(),
            definition: Some(FlowDefinition::InlineScript {
                script: script.into(),
                sandbox: true,
            }),
        })
    }

    pub fn full_name(&self) -> &str {
        match self {
            JobConfiguration::Branch(job) => &job.full_name,
            JobConfiguration::Pipeline(job) => &job.full_name,
            JobConfiguration::Other { full_name, .. } => full_name,
        }
    }

    /// Short label for the configuration shape, used in log fields.
    pub fn shape(&self) -> &'static str {
        match self {
            JobConfiguration::Branch(_) => "branch",
            JobConfiguration::Pipeline(_) => "pipeline",
            JobConfiguration::Other { .. } => "other",
        }
    }
}
