use crate::endpoint::{closed_address, Behavior, MockEndpoint};
use crate::logs::CapturedLogs;
use soap_injector::inject::{build_injector, HttpSender, Injector};
use soap_injector::placeholders::Substitutor;
use soap_injector::templates::{Template, TemplateSet};
use soap_injector::{InjectConfig, SelectionOrder};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use tracing::Level;

fn templates() -> TemplateSet {
    TemplateSet::from_templates(
        "mem",
        vec![
            Template::new("create.xml", "<Create><Id>{{UUID}}</Id><Ref>{{RANDOM_ID}}</Ref></Create>"),
            Template::new("query.xml", "<Query><At>{{TIMESTAMP}}</At><Who>{{CUSTOMER}}</Who></Query>"),
        ],
    )
    .unwrap()
}

fn injector(endpoint: reqwest::Url, timeout: Duration, order: SelectionOrder) -> Injector {
    let sender = HttpSender::new(endpoint, timeout, "").unwrap();
    Injector::new(templates(), Substitutor::with_seed(42), sender, order).with_selection_seed(1)
}

#[tokio::test]
async fn test_count_messages_all_succeed() {
    let endpoint = MockEndpoint::start(vec![Behavior::ok("<ok/>")]).await;
    let mut injector = injector(endpoint.url(), Duration::from_secs(5), SelectionOrder::Random);

    let stats = injector.run(5, Duration::ZERO).await;

    assert_eq!(stats.attempts, 5);
    assert_eq!(stats.successes, 5);
    assert_eq!(stats.failures, 0);
    assert!(stats.all_succeeded());
    assert_eq!(stats.bytes_received, 25);
    assert_eq!(endpoint.requests().len(), 5);
    assert!(stats.completed_at.is_some());
}

#[tokio::test]
async fn test_mixed_outcomes_are_counted_and_run_continues() {
    let endpoint = MockEndpoint::start(vec![
        Behavior::ok(""),
        Behavior::server_error(),
        Behavior::Hang,
        Behavior::ok(""),
    ])
    .await;
    let mut injector = injector(
        endpoint.url(),
        Duration::from_millis(300),
        SelectionOrder::Sequential,
    );

    let stats = injector.run(4, Duration::ZERO).await;

    assert_eq!(stats.attempts, 4);
    assert_eq!(stats.successes + stats.failures, 4);
    assert_eq!(stats.successes, 2);
    assert_eq!(stats.failure_breakdown.http_status, 1);
    assert_eq!(stats.failure_breakdown.timeout, 1);
    assert!(!stats.all_succeeded());
    // The send after the timeout still reached the endpoint
    assert_eq!(endpoint.requests().len(), 4);
}

#[tokio::test]
async fn test_one_result_line_per_send() {
    let (logs, _guard) = CapturedLogs::install(Level::INFO);
    let endpoint = MockEndpoint::start(vec![
        Behavior::ok(""),
        Behavior::server_error(),
        Behavior::Hang,
    ])
    .await;
    let mut injector = injector(
        endpoint.url(),
        Duration::from_millis(200),
        SelectionOrder::Sequential,
    );

    let stats = injector.run(3, Duration::ZERO).await;

    let results = logs.result_lines();
    assert_eq!(results.len(), 3, "{results:#?}");
    assert!(results[0].contains("Success [create.xml]"));
    assert!(results[1].contains("Failure [query.xml] - HTTP 500"));
    assert!(results[2].contains("Timeout [create.xml]"));
    assert_eq!(stats.successes + stats.failures, 3);
}

#[tokio::test]
async fn test_unreachable_endpoint_counts_connection_failures() {
    let addr = closed_address().await;
    let url = reqwest::Url::parse(&format!("http://{addr}/ws")).unwrap();
    let mut injector = injector(url, Duration::from_secs(2), SelectionOrder::Random);

    let stats = injector.run(3, Duration::ZERO).await;

    assert_eq!(stats.attempts, 3);
    assert_eq!(stats.failures, 3);
    assert_eq!(stats.failure_breakdown.connection, 3);
}

#[tokio::test]
async fn test_payloads_are_substituted() {
    let endpoint = MockEndpoint::start(vec![Behavior::ok("")]).await;
    let mut injector = injector(
        endpoint.url(),
        Duration::from_secs(5),
        SelectionOrder::Sequential,
    );

    injector.run(2, Duration::ZERO).await;

    let requests = endpoint.requests();
    let create = requests
        .iter()
        .find(|r| r.body.starts_with("<Create>"))
        .unwrap();
    let query = requests
        .iter()
        .find(|r| r.body.starts_with("<Query>"))
        .unwrap();

    assert!(!create.body.contains("{{"));
    let id = create
        .body
        .split("<Id>")
        .nth(1)
        .and_then(|s| s.split("</Id>").next())
        .unwrap();
    assert!(uuid_like(id), "not a uuid: {id}");

    assert!(!query.body.contains("{{TIMESTAMP}}"));
    assert!(query.body.contains("<Who>{{CUSTOMER}}</Who>"));
}

#[tokio::test]
async fn test_delay_applies_between_sends_only() {
    let endpoint = MockEndpoint::start(vec![Behavior::ok("")]).await;
    let mut injector = injector(endpoint.url(), Duration::from_secs(5), SelectionOrder::Random);

    let start = Instant::now();
    let stats = injector.run(3, Duration::from_millis(100)).await;
    let elapsed = start.elapsed();

    assert_eq!(stats.attempts, 3);
    // Two gaps for three sends
    assert!(elapsed >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_no_delay_after_last_send() {
    let endpoint = MockEndpoint::start(vec![Behavior::ok("")]).await;
    let mut injector = injector(endpoint.url(), Duration::from_secs(5), SelectionOrder::Random);

    let stats = tokio::time::timeout(
        Duration::from_secs(2),
        injector.run(1, Duration::from_secs(5)),
    )
    .await
    .expect("single send waited for the delay");

    assert_eq!(stats.attempts, 1);
    assert!(stats.all_succeeded());
}

#[tokio::test]
async fn test_build_injector_from_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("a.xml"), "<a>{{EPOCH}}</a>").unwrap();
    std::fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();
    let endpoint = MockEndpoint::start(vec![Behavior::ok("")]).await;

    let config = InjectConfig {
        endpoint: endpoint.url(),
        templates_dir: temp_dir.path().to_path_buf(),
        extension: "xml".to_string(),
        count: 2,
        delay: Duration::ZERO,
        timeout: Duration::from_secs(5),
        order: SelectionOrder::Random,
        seed: Some(42),
        soap_action: String::new(),
        dry_run: false,
        report_json: None,
    };

    let mut injector = build_injector(&config).await.unwrap();
    assert_eq!(injector.templates().names(), vec!["a.xml"]);

    let stats = injector.run(config.count, config.delay).await;
    assert_eq!(stats.successes, 2);
    for request in endpoint.requests() {
        let epoch: i64 = request
            .body
            .trim_start_matches("<a>")
            .trim_end_matches("</a>")
            .parse()
            .unwrap();
        assert!(epoch > 1_700_000_000);
    }
}

#[tokio::test]
async fn test_build_injector_rejects_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config = InjectConfig {
        endpoint: reqwest::Url::parse("http://127.0.0.1:9/").unwrap(),
        templates_dir: temp_dir.path().to_path_buf(),
        extension: "xml".to_string(),
        count: 1,
        delay: Duration::ZERO,
        timeout: Duration::from_secs(1),
        order: SelectionOrder::Random,
        seed: None,
        soap_action: String::new(),
        dry_run: false,
        report_json: None,
    };

    let err = build_injector(&config).await.err().unwrap();
    assert!(format!("{err:#}").contains("No .xml files found"));
}

fn uuid_like(s: &str) -> bool {
    let parts: Vec<_> = s.split('-').collect();
    parts.iter().map(|p| p.len()).collect::<Vec<_>>() == vec![8, 4, 4, 4, 12]
        && parts
            .iter()
            .all(|p| p.chars().all(|c| c.is_ascii_hexdigit()))
}
