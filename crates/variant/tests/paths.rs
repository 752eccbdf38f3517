use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use proptest::prelude::*;
use r_droid_variant::{
    compute_base_name, compute_full_name_with_splits, BuildDirectory, ComponentKind, Directory,
    DirectoryProvider, SigningReadiness, VariantError, VariantIdentity, VariantPathResolver,
};

const TIERS: &[&str] = &["free", "paid"];
const ENVS: &[&str] = &["demo", "full", "staging"];
const BUILD_TYPES: &[Option<&str>] = &[None, Some("debug"), Some("release"), Some("benchmark")];

fn components() -> Vec<ComponentKind> {
    vec![
        ComponentKind::Main,
        ComponentKind::UnitTest,
        ComponentKind::AndroidTest,
        ComponentKind::TestFixtures,
    ]
}

fn build_dir() -> Arc<dyn DirectoryProvider> {
    Arc::new(BuildDirectory::new("/work/app/build"))
}

/// Every identity of a project with optional `tier` and `env` dimensions
fn matrix() -> Vec<VariantIdentity> {
    let tier_choices: Vec<Option<&str>> =
        std::iter::once(None).chain(TIERS.iter().copied().map(Some)).collect();
    let env_choices: Vec<Option<&str>> =
        std::iter::once(None).chain(ENVS.iter().copied().map(Some)).collect();

    let mut identities = Vec::new();
    for tier in &tier_choices {
        for env in &env_choices {
            for build_type in BUILD_TYPES {
                for component in components() {
                    let mut identity = VariantIdentity::new().with_component(component);
                    if let Some(tier) = tier {
                        identity = identity.with_flavor("tier", tier);
                    }
                    if let Some(env) = env {
                        identity = identity.with_flavor("env", env);
                    }
                    if let Some(build_type) = build_type {
                        identity = identity.with_build_type(build_type);
                    }
                    identities.push(identity);
                }
            }
        }
    }
    identities
}

#[test]
fn whole_matrix_has_unique_dir_and_base_names() {
    let identities = matrix();
    let mut dir_names = HashSet::new();
    let mut base_names = HashSet::new();

    for identity in &identities {
        let resolver = VariantPathResolver::new(identity.clone(), build_dir());
        assert!(
            dir_names.insert(resolver.dir_name().to_string()),
            "dir name collision for {:?}",
            identity
        );
        assert!(base_names.insert(resolver.base_name().to_string()));
    }
    assert_eq!(identities.len(), 192);
}

#[test]
fn documented_names() {
    assert_eq!(compute_base_name(&VariantIdentity::new()), "main");

    let identity = VariantIdentity::new()
        .with_flavor("tier", "free")
        .with_flavor("env", "demo")
        .with_build_type("debug");
    assert_eq!(compute_base_name(&identity), "free-demo-debug");

    let identity = VariantIdentity::new()
        .with_flavor("tier", "free")
        .with_build_type("release");
    assert_eq!(compute_full_name_with_splits(&identity, "en"), "freeEnRelease");
    assert_eq!(compute_full_name_with_splits(&VariantIdentity::new(), "abi"), "abi");
}

#[test]
fn output_file_name_policies() {
    let identity = VariantIdentity::new().with_flavor("tier", "free").with_build_type("debug");

    let unsigned = VariantPathResolver::new(identity.clone(), build_dir());
    assert_eq!(
        unsigned.output_file_name("app", "free-debug"),
        "app-free-debug-unsigned.apk"
    );

    let base_unsigned = VariantPathResolver::new(identity, build_dir())
        .with_output_policy(Arc::new(SigningReadiness { signed: false, base_module: true }));
    assert_eq!(
        base_unsigned.output_file_name("app", "free-debug"),
        "app-free-debug-unsigned.apk"
    );
}

#[test]
fn shared_resolver_computes_once_across_threads() {
    let identity = VariantIdentity::new().with_flavor("tier", "paid").with_build_type("release");
    let resolver = Arc::new(VariantPathResolver::new(identity, build_dir()));

    let locations: Vec<(usize, usize)> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                scope.spawn(move || {
                    let dir = resolver.coverage_report_dir().unwrap() as *const Directory as usize;
                    let apk = resolver.apk_location().unwrap() as *const PathBuf as usize;
                    (dir, apk)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(locations.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(
        resolver.apk_location().unwrap(),
        &PathBuf::from("/work/app/build/outputs/apk/paid/release")
    );
}

#[test]
fn illegal_segment_fails_before_any_lookup() {
    let missing_root = std::env::temp_dir().join("r-droid-variant-missing-root");
    let resolver = VariantPathResolver::new(
        VariantIdentity::new().with_build_type("debug"),
        Arc::new(BuildDirectory::new(&missing_root)),
    );

    for result in [
        resolver.intermediates_dir(&["classes.jar"]),
        resolver.output_dir(&["apk", "debug", "app.apk"]),
        resolver.generated_dir(&["source.d"]),
        resolver.reports_dir(&["lint-results.html"]),
    ] {
        assert!(matches!(result, Err(VariantError::PathConfiguration { .. })));
    }
    assert!(!missing_root.exists());
}

proptest! {
    #[test]
    fn distinct_identities_never_share_a_dir_name(a in 0usize..192, b in 0usize..192) {
        let identities = matrix();
        prop_assume!(a != b);
        let first = VariantPathResolver::new(identities[a].clone(), build_dir());
        let second = VariantPathResolver::new(identities[b].clone(), build_dir());
        prop_assert_ne!(first.dir_name(), second.dir_name());
    }

    #[test]
    fn same_identity_gives_identical_paths(index in 0usize..192) {
        let identity = matrix()[index].clone();
        let first = VariantPathResolver::new(identity.clone(), build_dir());
        let second = VariantPathResolver::new(identity, build_dir());

        prop_assert_eq!(first.dir_name(), second.dir_name());
        prop_assert_eq!(first.base_name(), second.base_name());
        prop_assert_eq!(first.full_name(), second.full_name());
        prop_assert_eq!(first.apk_location().unwrap(), second.apk_location().unwrap());
    }
}
