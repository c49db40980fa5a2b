//! End-to-end provenance resolution over host build snapshots.

use rebuild_provenance::{
    resolve, BranchJob, BuildSnapshot, CheckoutRecord, GitScm, JobConfiguration,
    PromoteRebuildAction, ScmDescriptor, UpstreamCause,
};

const REPO: &str = "https://x/repo.git";

fn cause() -> UpstreamCause {
    UpstreamCause::new(
        "build-123",
        42,
        Some("http://ci/job/build-123/42".to_string()),
    )
}

fn git(url: &str) -> ScmDescriptor {
    ScmDescriptor::Git(GitScm::with_remotes([url]))
}

fn no_scm_jobs() -> Vec<JobConfiguration> {
    vec![
        JobConfiguration::inline_pipeline("build-123", "node { sh 'make' }"),
        JobConfiguration::Other {
            full_name: "build-123".to_string(),
            kind: "freestyle".to_string(),
        },
        JobConfiguration::Branch(BranchJob {
            full_name: "app/main".to_string(),
            branch_property: None,
        }),
        JobConfiguration::branch(
            "app/trunk",
            "trunk",
            ScmDescriptor::Other {
                kind: "mercurial".to_string(),
            },
        ),
        JobConfiguration::scm_pipeline("build-123", ScmDescriptor::None),
    ]
}

#[test]
fn branch_of_multibranch_project_resolves_commit() {
    let build = BuildSnapshot::new(
        JobConfiguration::branch("app/main", "main", git(REPO)),
        vec![CheckoutRecord::new(REPO, "abc123")],
        cause(),
    );

    let record = resolve(&build);

    assert_eq!(record.build_remote(), Some(REPO));
    assert_eq!(record.build_hash(), Some("abc123"));
}

#[test]
fn embedded_script_pipeline_has_no_provenance_commit() {
    let build = BuildSnapshot::new(
        JobConfiguration::inline_pipeline("build-123", "node {}"),
        vec![CheckoutRecord::new(REPO, "abc123")],
        cause(),
    );

    let record = resolve(&build);

    assert!(record.build_remote().is_none());
    assert!(record.build_hash().is_none());
}

#[test]
fn checkout_of_other_repository_leaves_hash_absent() {
    let build = BuildSnapshot::new(
        JobConfiguration::scm_pipeline("build-123", git(REPO)),
        vec![CheckoutRecord::new("https://y/other.git", "abc123")],
        cause(),
    );

    let record = resolve(&build);

    assert_eq!(record.build_remote(), Some(REPO));
    assert!(record.build_hash().is_none());
}

#[test]
fn upstream_fields_copied_regardless_of_scm_outcome() {
    let mut jobs = no_scm_jobs();
    jobs.push(JobConfiguration::scm_pipeline("build-123", git(REPO)));
    jobs.push(JobConfiguration::branch("app/main", "main", git(REPO)));

    for job in jobs {
        let build = BuildSnapshot::new(job, vec![CheckoutRecord::new(REPO, "abc123")], cause());
        let record = resolve(&build);

        assert_eq!(record.reason(), "RELEASE");
        assert_eq!(record.upstream_project(), "build-123");
        assert_eq!(record.upstream_build(), 42);
        assert_eq!(record.upstream_url(), Some("http://ci/job/build-123/42"));
    }
}

#[test]
fn jobs_without_git_scm_never_resolve() {
    for job in no_scm_jobs() {
        let build = BuildSnapshot::new(
            job.clone(),
            vec![
                CheckoutRecord::new(REPO, "abc123"),
                CheckoutRecord::new("https://y/other.git", "def456"),
            ],
            cause(),
        );
        let record = resolve(&build);
        assert!(record.build_remote().is_none(), "job {:?}", job);
        assert!(record.build_hash().is_none(), "job {:?}", job);
    }
}

#[test]
fn multi_repository_pipeline_picks_base_repository() {
    let build = BuildSnapshot::new(
        JobConfiguration::scm_pipeline("build-123", git(REPO)),
        vec![
            CheckoutRecord::new("https://x/shared-library.git", "111111"),
            CheckoutRecord::new(REPO, "abc123"),
            CheckoutRecord::new("https://x/deploy-config.git", "222222"),
        ],
        cause(),
    );

    assert_eq!(resolve(&build).build_hash(), Some("abc123"));
}

#[test]
fn retried_checkout_reports_latest_hash() {
    let build = BuildSnapshot::new(
        JobConfiguration::branch("app/main", "main", git(REPO)),
        vec![
            CheckoutRecord::new(REPO, "abc123"),
            CheckoutRecord::new(REPO, "fed987"),
        ],
        cause(),
    );

    assert_eq!(resolve(&build).build_hash(), Some("fed987"));
}

#[test]
fn resolution_is_idempotent() {
    let build = BuildSnapshot::new(
        JobConfiguration::branch("app/main", "main", git(REPO)),
        vec![
            CheckoutRecord::new(REPO, "abc123"),
            CheckoutRecord::new("https://x/lib.git", "def456"),
        ],
        cause(),
    );

    let first = resolve(&build);
    let second = resolve(&build);

    assert_eq!(first, second);
    assert_eq!(first.digest(), second.digest());
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn action_caches_resolved_record() {
    let build = BuildSnapshot::new(
        JobConfiguration::scm_pipeline("build-123", git(REPO)),
        vec![CheckoutRecord::new(REPO, "abc123")],
        cause(),
    );

    let action = PromoteRebuildAction::new(&build);

    assert_eq!(action.promote_rebuild_cause(), &resolve(&build));
    assert_eq!(action.promote_rebuild_cause().build_hash(), Some("abc123"));
}

#[test]
fn record_without_upstream_url() {
    let build = BuildSnapshot::new(
        JobConfiguration::scm_pipeline("build-123", git(REPO)),
        Vec::new(),
        UpstreamCause::new("build-123", 1, None),
    );

    let record = resolve(&build);

    assert!(record.upstream_url().is_none());
    assert_eq!(record.build_remote(), Some(REPO));
    assert!(record.build_hash().is_none());
}
