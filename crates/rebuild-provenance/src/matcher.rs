//! Commit matcher.
//!
//! Maps each checkout's first remote URL to the hash it last built, then
//! picks out the base repository. Records are visited in attachment order and
//! later records overwrite earlier ones for the same URL.

use std::collections::BTreeMap;

use crate::domain::CheckoutRecord;

/// Remote URL → last built commit hash over `records`.
///
/// Records without a remote, without a last built revision, or whose
/// revision has no hash contribute nothing. Only the first remote of each
/// record is used.
pub fn collect_commit_hashes<'a, I>(records: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a CheckoutRecord>,
{
    let mut hashes = BTreeMap::new();
    for record in records {
        let Some(remote) = record.first_remote_url() else {
            continue;
        };
        if let Some(hash) = record.last_built_hash() {
            hashes.insert(remote.to_string(), hash.to_string());
        }
    }
    hashes
}

/// Commit hash recorded for `base_repository`.
///
/// Returns `None` without consuming `records` when there is no base
/// repository.
pub fn match_commit<'a, I>(records: I, base_repository: Option<&str>) -> Option<String>
where
    I: IntoIterator<Item = &'a CheckoutRecord>,
{
    let base_repository = base_repository?;
    collect_commit_hashes(records).remove(base_repository)
}
