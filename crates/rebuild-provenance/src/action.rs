//! The build annotation a host attaches to a promoted rebuild.

use serde::{Deserialize, Serialize};

use crate::domain::{BuildHandle, ProvenanceRecord};
use crate::resolver::resolve;

/// Human-readable label for the annotation.
pub const DISPLAY_NAME: &str = "PromoteRebuildAction";

/// URL-safe identifier the host routes the annotation under.
pub const URL_NAME: &str = "promoteRebuildAction";

/// Provenance annotation for a promoted rebuild.
///
/// Resolution happens once, in [`PromoteRebuildAction::new`]; the record is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoteRebuildAction {
    promote_rebuild_cause: ProvenanceRecord,
}

impl PromoteRebuildAction {
    pub fn new<B>(build: &B) -> Self
    where
        B: BuildHandle + ?Sized,
    {
        Self {
            promote_rebuild_cause: resolve(build),
        }
    }

    pub fn promote_rebuild_cause(&self) -> &ProvenanceRecord {
        &self.promote_rebuild_cause
    }

    pub fn into_record(self) -> ProvenanceRecord {
        self.promote_rebuild_cause
    }

    pub fn display_name(&self) -> &'static str {
        DISPLAY_NAME
    }

    pub fn url_name(&self) -> &'static str {
        URL_NAME
    }

    /// The annotation has no sidebar icon.
    pub fn icon_file_name(&self) -> Option<&'static str> {
        None
    }
}
