//! End-to-end check runs against a mocked metadata repository

mod helper;

use std::sync::Arc;

use mockito::Server;

use helper::{RecordingSink, StaticProber, metadata_xml};
use package_availability::check::{CheckError, CheckOutcome, PackageCheck, build_report};
use package_availability::http::build_client;
use package_availability::metrics::MetricSample;
use package_availability::probe::ProbeOutcome;
use package_availability::version::{FetchError, MavenMetadataSource, ResolveError};

const METADATA_PATH: &str = "/releases/org/jenkins-ci/main/jenkins-war/maven-metadata.xml";

fn metadata_source(server: &Server) -> Arc<MavenMetadataSource> {
    let client = build_client(None).unwrap();
    Arc::new(MavenMetadataSource::new(
        client,
        &format!("{}{}", server.url(), METADATA_PATH),
    ))
}

#[tokio::test]
async fn reports_stable_package_from_published_metadata() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", METADATA_PATH)
        .with_status(200)
        .with_header("content-type", "text/xml")
        .with_body(metadata_xml("2.401", &["2.389.3", "2.390", "2.390.1", "2.401"]))
        .expect(1)
        .create_async()
        .await;

    let prober = Arc::new(StaticProber::new());
    let sink = Arc::new(RecordingSink::new());
    let check = PackageCheck::new(
        metadata_source(&server),
        prober.clone(),
        sink.clone(),
        "get.jenkins.io",
    );

    let outcome = check.run("redhat-stable").await.unwrap();

    mock.assert_async().await;
    assert!(matches!(outcome, CheckOutcome::Reported(_)));
    assert_eq!(
        prober.probed_urls(),
        vec!["https://get.jenkins.io/redhat-stable/jenkins-2.390.1-1.1.noarch.rpm".to_string()]
    );
    assert_eq!(
        sink.samples(),
        vec![MetricSample::gauge(
            "jenkins.package.available",
            1,
            &[("package", "redhat-stable")]
        )]
    );
}

#[tokio::test]
async fn reports_zero_when_weekly_package_is_missing() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", METADATA_PATH)
        .with_status(200)
        .with_body(metadata_xml("2.402", &["2.390.1", "2.401", "2.402"]))
        .create_async()
        .await;

    let prober = Arc::new(StaticProber::new().with_outcome("opensuse", ProbeOutcome::NotFound));
    let sink = Arc::new(RecordingSink::new());
    let check = PackageCheck::new(
        metadata_source(&server),
        prober.clone(),
        sink.clone(),
        "get.jenkins.io",
    );

    check.run("opensuse").await.unwrap();

    assert_eq!(
        prober.probed_urls(),
        vec!["https://get.jenkins.io/opensuse/jenkins-2.402-1.2.noarch.rpm".to_string()]
    );
    assert_eq!(
        sink.samples(),
        vec![MetricSample::gauge(
            "jenkins.package.available",
            0,
            &[("package", "opensuse")]
        )]
    );
}

#[tokio::test]
async fn unsupported_package_emits_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", METADATA_PATH)
        .with_status(200)
        .with_body(metadata_xml("2.401", &["2.390.1"]))
        .expect(0)
        .create_async()
        .await;

    let prober = Arc::new(StaticProber::new());
    let sink = Arc::new(RecordingSink::new());
    let check = PackageCheck::new(
        metadata_source(&server),
        prober.clone(),
        sink.clone(),
        "get.jenkins.io",
    );

    let outcome = check.run("solaris").await.unwrap();

    mock.assert_async().await;
    assert_eq!(outcome, CheckOutcome::Unsupported);
    assert!(prober.probed_urls().is_empty());
    assert!(sink.samples().is_empty());
}

#[tokio::test]
async fn metadata_error_aborts_run_without_metric() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", METADATA_PATH)
        .with_status(404)
        .create_async()
        .await;

    let prober = Arc::new(StaticProber::new());
    let sink = Arc::new(RecordingSink::new());
    let check = PackageCheck::new(
        metadata_source(&server),
        prober.clone(),
        sink.clone(),
        "get.jenkins.io",
    );

    let result = check.run("war").await;

    assert!(matches!(
        result,
        Err(CheckError::Resolve(ResolveError::Fetch(
            FetchError::UnexpectedStatus { status: 404, .. }
        )))
    ));
    assert!(prober.probed_urls().is_empty());
    assert!(sink.samples().is_empty());
}

#[tokio::test]
async fn metadata_without_stable_versions_aborts_run() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", METADATA_PATH)
        .with_status(200)
        .with_body(metadata_xml("2.401", &["2.400", "2.401"]))
        .create_async()
        .await;

    let sink = Arc::new(RecordingSink::new());
    let check = PackageCheck::new(
        metadata_source(&server),
        Arc::new(StaticProber::new()),
        sink.clone(),
        "get.jenkins.io",
    );

    let result = check.run("war").await;

    assert!(matches!(
        result,
        Err(CheckError::Resolve(ResolveError::EmptyVersionSet))
    ));
    assert!(sink.samples().is_empty());
}

#[tokio::test]
async fn report_covers_every_package_with_one_metadata_fetch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", METADATA_PATH)
        .with_status(200)
        .with_body(metadata_xml("2.401", &["2.401", "2.390.1", "2.390", "2.389.3"]))
        .expect(1)
        .create_async()
        .await;

    let source = metadata_source(&server);
    let prober = StaticProber::new().with_outcome(
        "windows-stable",
        ProbeOutcome::HttpError {
            status: 500,
            reason: "Internal Server Error".to_string(),
        },
    );

    let report = build_report(source.as_ref(), &prober, "get.jenkins.io")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(report.weekly_version, "2.401");
    assert_eq!(report.stable_version, "2.390.1");
    assert_eq!(prober.probed_urls().len(), 10);

    let windows_stable = report
        .packages
        .iter()
        .find(|p| p.package == "windows-stable")
        .unwrap();
    assert!(!windows_stable.available);
    assert!(windows_stable.diagnostic.as_ref().unwrap().contains("500"));
    assert_eq!(report.packages.iter().filter(|p| p.available).count(), 9);
}
