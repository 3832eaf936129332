use std::time::Duration;

use kaburesearch_lib::{search, CachedClient, MemoryCache, SearchOutcome};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn quote_page(code: &str, name: &str) -> String {
    format!(
        r#"<html><body>
        <div class="company_block"><h3>{code} {name}</h3></div>
        <span class="kabuka">1,234</span>
        </body></html>"#
    )
}

async fn mount_quote(server: &MockServer, code: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path("/stock/"))
        .and(query_param("code", code))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

fn client(uri: &str) -> CachedClient {
    CachedClient::with_base_url(uri, MemoryCache::new(Duration::from_secs(3600)))
        .unwrap()
        .with_request_delay(Duration::ZERO)
}

#[tokio::test]
async fn two_codes_give_two_cards_in_order() {
    let mock_server = MockServer::start().await;
    mount_quote(&mock_server, "7203", 200, quote_page("7203", "トヨタ自動車")).await;
    mount_quote(&mock_server, "8591", 200, quote_page("8591", "オリックス")).await;

    let mut progress = Vec::new();
    let outcome = search(&client(&mock_server.uri()), "7203, 8591", |done, total| {
        progress.push((done, total))
    })
    .await;

    let SearchOutcome::Quotes(records) = outcome else {
        panic!("expected quotes, got {:?}", outcome);
    };
    let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["7203", "8591"]);
    assert_eq!(records[1].name, "オリックス");
    assert_eq!(progress, vec![(1, 2), (2, 2)]);
}

#[tokio::test]
async fn empty_input_makes_no_requests() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut calls = 0;
    let outcome = search(&client(&mock_server.uri()), "", |_, _| calls += 1).await;
    assert_eq!(outcome, SearchOutcome::EmptyInput);
    assert_eq!(calls, 0);

    let outcome = search(&client(&mock_server.uri()), " , ,", |_, _| {}).await;
    assert_eq!(outcome, SearchOutcome::EmptyInput);
}

#[tokio::test]
async fn not_found_code_gives_no_results() {
    let mock_server = MockServer::start().await;
    mount_quote(&mock_server, "9999", 404, "Not Found".to_string()).await;

    let mut progress = Vec::new();
    let outcome = search(&client(&mock_server.uri()), "9999", |done, total| {
        progress.push((done, total))
    })
    .await;
    assert_eq!(outcome, SearchOutcome::NoResults);
    assert_eq!(progress, vec![(1, 1)]);
}

#[tokio::test]
async fn failed_code_is_dropped_silently() {
    let mock_server = MockServer::start().await;
    mount_quote(&mock_server, "7203", 200, quote_page("7203", "トヨタ自動車")).await;
    mount_quote(&mock_server, "0000", 404, String::new()).await;
    mount_quote(&mock_server, "9432", 200, quote_page("9432", "日本電信電話")).await;

    let outcome = search(&client(&mock_server.uri()), "7203,0000,9432", |_, _| {}).await;
    let SearchOutcome::Quotes(records) = outcome else {
        panic!("expected quotes, got {:?}", outcome);
    };
    let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["7203", "9432"]);
}

#[tokio::test]
async fn duplicate_code_is_fetched_once_but_listed_twice() {
    let mock_server = MockServer::start().await;
    mount_quote(&mock_server, "7203", 200, quote_page("7203", "トヨタ自動車")).await;

    let outcome = search(&client(&mock_server.uri()), "7203, 7203", |_, _| {}).await;
    let SearchOutcome::Quotes(records) = outcome else {
        panic!("expected quotes, got {:?}", outcome);
    };
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], records[1]);
}
