use std::path::PathBuf;

use r_droid_core::{BuildSession, CoreError, ProjectConfig, CONFIG_FILE_NAME};
use r_droid_options::{IntegerOption, OptionDiagnostic, RawValue};

const PROJECT: &str = r#"
archives_base_name = "shop"

[options]
"android.r8.maxWorkers" = "3"
"android.threadPoolSize" = 8

[[variants]]
build_type = "debug"
flavors = [
    { dimension = "tier", name = "free" },
    { dimension = "env", name = "demo" },
]

[[variants]]
build_type = "release"
flavors = [
    { dimension = "tier", name = "paid" },
    { dimension = "env", name = "demo" },
]
split = "hdpi"

[[variants]]
build_type = "debug"
flavors = [
    { dimension = "tier", name = "free" },
    { dimension = "env", name = "demo" },
]
component = "android-test"
"#;

async fn write_project(contents: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(dir.path().join(CONFIG_FILE_NAME), contents)
        .await
        .unwrap();
    dir
}

#[tokio::test]
async fn loads_project_and_reports_variants() {
    let dir = write_project(PROJECT).await;
    let config = ProjectConfig::load_from_dir(dir.path()).await.unwrap();
    let build_root = dir.path().join("build");

    let session = BuildSession::new(
        config,
        vec![("android.r8.maxWorkers".to_string(), RawValue::Integer(5))],
    )
    .unwrap();

    // Command line wins over the project file.
    assert_eq!(session.options().get_int(IntegerOption::R8MaxWorkers), Some(5));
    // Removed options warn but do not fail by default.
    assert!(session.options().diagnostics().iter().any(|d| matches!(
        d,
        OptionDiagnostic::RemovedOptionUsed { property: "android.threadPoolSize", .. }
    )));

    let report = session.report().unwrap();
    assert_eq!(report.len(), 3);

    assert_eq!(report[0].full_name, "freeDemoDebug");
    assert_eq!(report[0].base_name, "free-demo-debug");
    assert_eq!(report[0].dir_name, "freeDemo/debug");
    assert_eq!(report[0].output_file_name, "shop-free-demo-debug-unsigned.apk");
    assert_eq!(report[0].apk_location, build_root.join("outputs/apk/freeDemo/debug"));

    assert_eq!(report[1].full_name, "paidDemoHdpiRelease");
    assert_eq!(report[1].base_name, "paid-demo-hdpi-release");

    assert_eq!(report[2].full_name, "freeDemoDebugAndroidTest");
    assert_eq!(
        report[2].manifest_output_directory,
        Some(build_root.join("intermediates/manifest/androidTest/freeDemo/debug"))
    );

    assert!(session.resolver("freeDemoDebug").is_some());
}

#[tokio::test]
async fn malformed_option_fails_the_session() {
    let dir = write_project(
        r#"
        [options]
        "android.dexingNumberOfBuckets" = "lots"
        "#,
    )
    .await;

    let config = ProjectConfig::load_from_dir(dir.path()).await.unwrap();
    let err = BuildSession::new(config, Vec::new()).unwrap_err();
    assert!(matches!(err, CoreError::Options(_)));
    assert!(err.user_message().contains("android.dexingNumberOfBuckets"));
}

#[tokio::test]
async fn missing_project_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ProjectConfig::load(&PathBuf::from(dir.path()).join("nope.toml"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Io(_)));
}

#[tokio::test]
async fn density_splits_of_one_variant_load_together() {
    let dir = write_project(
        r#"
        [[variants]]
        build_type = "release"
        flavors = [{ dimension = "tier", name = "free" }]
        split = "hdpi"

        [[variants]]
        build_type = "release"
        flavors = [{ dimension = "tier", name = "free" }]
        split = "xhdpi"
        "#,
    )
    .await;

    let config = ProjectConfig::load_from_dir(dir.path()).await.unwrap();
    let session = BuildSession::new(config, Vec::new()).unwrap();

    let names: Vec<String> = session
        .report()
        .unwrap()
        .into_iter()
        .map(|report| report.full_name)
        .collect();
    assert_eq!(names, ["freeHdpiRelease", "freeXhdpiRelease"]);
    assert_eq!(session.resolver("freeXhdpiRelease").unwrap().dir_name(), "free/release");
}
