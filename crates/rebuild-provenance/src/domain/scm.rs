//! Source-control descriptors and checkout records.
//!
//! Both types are read from the host: descriptors describe what a job is
//! configured to build from, checkout records describe what a build actually
//! fetched.

use serde::{Deserialize, Serialize};

/// A single configured git remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRemoteConfig {
    /// Fetch URL of the remote.
    pub url: String,

    /// Remote name (e.g. `origin`).
    #[serde(default)]
    pub name: Option<String>,

    /// Refspec used when fetching.
    #[serde(default)]
    pub refspec: Option<String>,

    /// Host credentials used to access the remote.
    #[serde(default)]
    pub credentials_id: Option<String>,
}

impl UserRemoteConfig {
    /// A remote with only a URL configured.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: None,
            refspec: None,
            credentials_id: None,
        }
    }
}

/// Git source-control configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GitScm {
    /// Configured remotes, in declaration order.
    #[serde(default)]
    pub user_remote_configs: Vec<UserRemoteConfig>,

    /// Branch specifiers to build.
    #[serde(default)]
    pub branches: Vec<String>,
}

impl GitScm {
    /// Git configuration with one remote per URL, in order.
    pub fn with_remotes<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_remote_configs: urls.into_iter().map(UserRemoteConfig::new).collect(),
            branches: Vec::new(),
        }
    }

    /// URL of the first configured remote.
    ///
    /// Any further remotes are ignored. A descriptor with no remotes has no
    /// base repository.
    pub fn first_remote_url(&self) -> Option<&str> {
        self.user_remote_configs.first().map(|r| r.url.as_str())
    }
}

/// A job's source-control descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScmDescriptor {
    Git(GitScm),
    /// Any non-git source control (Subversion, Mercurial, ...).
    Other { kind: String },
    #[default]
    None,
}

impl ScmDescriptor {
    /// The git configuration, if this descriptor is git-based.
    pub fn as_git(&self) -> Option<&GitScm> {
        match self {
            ScmDescriptor::Git(git) => Some(git),
            ScmDescriptor::Other { .. } | ScmDescriptor::None => None,
        }
    }
}

/// The revision a checkout last built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Revision {
    /// Commit hash, when the host could resolve one.
    #[serde(default)]
    pub sha1: Option<String>,

    /// Branch names pointing at this revision.
    #[serde(default)]
    pub branches: Vec<String>,
}

impl Revision {
    pub fn new(sha1: impl Into<String>) -> Self {
        Self {
            sha1: Some(sha1.into()),
            branches: Vec::new(),
        }
    }
}

/// Host evidence that a repository was fetched during a build.
///
/// A build with several repositories (or retried checkout steps) carries one
/// record per checkout, in attachment order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckoutRecord {
    /// Remote URLs reported by this checkout, in order.
    #[serde(default)]
    pub remote_urls: Vec<String>,

    /// Last built revision, if the checkout completed.
    #[serde(default)]
    pub last_built_revision: Option<Revision>,

    /// Host-assigned name for the SCM of this checkout.
    #[serde(default)]
    pub scm_name: Option<String>,
}

impl CheckoutRecord {
    /// A checkout of `url` that built commit `sha1`.
    pub fn new(url: impl Into<String>, sha1: impl Into<String>) -> Self {
        Self {
            remote_urls: vec![url.into()],
            last_built_revision: Some(Revision::new(sha1)),
            scm_name: None,
        }
    }

    /// A checkout of `url` with no recorded revision.
    pub fn without_revision(url: impl Into<String>) -> Self {
        Self {
            remote_urls: vec![url.into()],
            last_built_revision: None,
            scm_name: None,
        }
    }

    /// The first reported remote URL; later ones are ignored.
    pub fn first_remote_url(&self) -> Option<&str> {
        self.remote_urls.first().map(String::as_str)
    }

    /// Hash of the last built revision, if one was resolved.
    pub fn last_built_hash(&self) -> Option<&str> {
        self.last_built_revision
            .as_ref()
            .and_then(|rev| rev.sha1.as_deref())
    }
}
