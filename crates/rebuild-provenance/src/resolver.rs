//! Provenance record assembly.

use crate::domain::{BuildHandle, ProvenanceRecord};
use crate::locator::locate_base_repository;
use crate::matcher::match_commit;
use crate::obs::{
    emit_base_repository_unresolved, emit_commit_unmatched, emit_provenance_resolved, BuildSpan,
};

/// Resolve the provenance of `build`.
///
/// Upstream cause fields are copied verbatim. The base repository comes from
/// the job configuration, the commit hash from the checkout records. Either
/// may be absent; resolution itself never fails.
pub fn resolve<B>(build: &B) -> ProvenanceRecord
where
    B: BuildHandle + ?Sized,
{
    let cause = build.upstream_cause();
    let _span = BuildSpan::enter(&cause.upstream_project, cause.upstream_build);

    let job = build.job();
    let build_remote = locate_base_repository(job);
    let build_hash = match build_remote {
        Some(remote) => {
            let records = build.checkout_records();
            let hash = match_commit(records, Some(remote));
            if hash.is_none() {
                emit_commit_unmatched(remote, records.len());
            }
            hash
        }
        None => {
            emit_base_repository_unresolved(job.full_name(), job.shape());
            None
        }
    };

    let record = ProvenanceRecord::new(cause, build_remote.map(str::to_string), build_hash);
    emit_provenance_resolved(&record);
    record
}
