mod common;

use common::{dead_server_url, keyword_of, StubServer};
use topic_explorer::{AppConfig, ExplorerError, SearchView, TrendsClient, TrendsSource};

fn client_for(base_url: &str) -> TrendsClient {
    let config = AppConfig::default().with_server_url(base_url).unwrap();
    TrendsClient::new(&config).unwrap()
}

fn search(server: &StubServer, keyword: &str) -> SearchView {
    let client = client_for(&server.base_url);
    let mut view = SearchView::new();
    view.set_keyword(keyword);
    view.run_search(&client);
    view
}

#[test]
fn one_request_per_search_with_encoded_keyword() {
    for keyword in ["javascript", "machine learning", "c++ & rust/ü?", ""] {
        let server = StubServer::start(200, r#"{"results":[]}"#);
        let view = search(&server, keyword);

        let requests = server.requests();
        assert_eq!(requests.len(), 1, "keyword {:?}", keyword);
        assert!(requests[0].starts_with("GET /trends?keyword="));
        assert_eq!(keyword_of(&requests[0]).as_deref(), Some(keyword));
        assert!(view.error().is_none());
    }
}

#[test]
fn server_error_status_becomes_message() {
    let server = StubServer::start(500, r#"{"error":"boom"}"#);
    let view = search(&server, "rust");

    assert_eq!(view.error(), Some("HTTP error! status: 500"));
    assert!(view.data().is_none());
}

#[test]
fn application_error_with_ok_status() {
    let server = StubServer::start(200, r#"{"error":"bad keyword"}"#);
    let view = search(&server, "rust");

    assert_eq!(view.error(), Some("bad keyword"));
    assert!(view.data().is_none());
}

#[test]
fn invalid_body_is_parse_failure() {
    let server = StubServer::start(200, "<html>not json</html>");
    let client = client_for(&server.base_url);

    let err = client.fetch("rust").unwrap_err();
    assert!(matches!(err, ExplorerError::Parse(_)));
    assert!(!err.to_string().is_empty());
}

#[test]
fn unreachable_server_is_transport_failure() {
    let client = client_for(&dead_server_url());

    let err = client.fetch("rust").unwrap_err();
    assert!(matches!(err, ExplorerError::Transport(_)));

    let mut view = SearchView::new();
    view.set_keyword("rust");
    view.run_search(&client);
    assert_eq!(view.error(), Some(err.to_string().as_str()));
    assert!(view.data().is_none());
}

#[test]
fn title_sentinel_row_is_hidden() {
    let server = StubServer::start(
        200,
        r#"{"results":[{"title":"N/A","date":"2024-01-01","author":"X","source":"Y","link":"http://a"}]}"#,
    );
    let view = search(&server, "rust");

    assert!(view.data().is_some());
    assert!(view.rows().is_empty());
}

#[test]
fn missing_date_and_author_render_as_dash() {
    let server = StubServer::start(
        200,
        r#"{"results":[{"title":"T","date":"N/A","author":"N/A","source":"S","link":"http://x"}]}"#,
    );
    let view = search(&server, "rust");
    let rows = view.rows();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "T");
    assert_eq!(rows[0].link, "http://x");
    assert_eq!(rows[0].date, "-");
    assert_eq!(rows[0].author, "-");
    assert_eq!(rows[0].source, "S");
}

#[test]
fn rows_without_usable_link_are_hidden() {
    let server = StubServer::start(
        200,
        r##"{"results":[
            {"title":"Hash link","date":"2024","author":"A","source":"S","link":"#"},
            {"title":"Empty link","date":"2024","author":"A","source":"S","link":""},
            {"title":"No link","date":"2024","author":"A","source":"S"},
            {"title":"Good","date":"2024","author":"A","source":"S","link":"https://dblp.org/x"}
        ]}"##,
    );
    let view = search(&server, "rust");
    let titles: Vec<String> = view.rows().into_iter().map(|r| r.title).collect();

    assert_eq!(titles, vec!["Good"]);
}

#[test]
fn outcomes_replace_each_other() {
    let ok = StubServer::start(200, r#"{"results":[{"title":"T","link":"http://x"}]}"#);
    let failing = StubServer::start(503, "");

    let mut view = SearchView::new();
    view.run_search(&client_for(&failing.base_url));
    assert_eq!(view.error(), Some("HTTP error! status: 503"));

    view.run_search(&client_for(&ok.base_url));
    assert_eq!(view.error(), None);
    assert_eq!(view.rows().len(), 1);

    view.run_search(&client_for(&failing.base_url));
    assert!(view.data().is_none());
    assert!(view.rows().is_empty());
}

#[test]
fn real_server_shape_is_understood() {
    let server = StubServer::start(
        200,
        r#"{"results":[
            {"title":"Attention Is All You Need","link":"https://arxiv.org/abs/1706.03762","date":"2017","author":"Vaswani et al.","source_link":"https://arxiv.org"}
        ],"terms":{"attention":1,"need":1,"all":1}}"#,
    );
    let view = search(&server, "transformers");
    let data = view.data().unwrap();

    assert_eq!(view.rows()[0].source, "https://arxiv.org");
    assert_eq!(data.terms.len(), 3);
    assert_eq!(data.terms[0].term, "all");
}

#[test]
fn null_fields_keep_the_rest_of_the_table() {
    let server = StubServer::start(
        200,
        r#"{"results":[
            {"title":null,"date":"2023","author":null,"source":"S","source_link":"L","link":"http://a"},
            {"title":"Kept","date":"2024","author":"B","source":"S","link":"http://b"}
        ]}"#,
    );
    let view = search(&server, "rust");
    let rows = view.rows();

    assert!(view.error().is_none());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "");
    assert_eq!(rows[0].source, "S");
    assert_eq!(rows[1].title, "Kept");
}
