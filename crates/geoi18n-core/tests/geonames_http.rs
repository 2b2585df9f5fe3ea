//! `GeonamesClient` against a local mock of the geonames web service.

mod common;

use common::Fixture;
use geoi18n_core::importer::import_continent_map;
use geoi18n_core::{
    ContinentMapOutcome, CountryInfo, CountryInfoFetch, CountryInfoSource, GeoI18nError,
    GeonamesClient, Store,
};
use tokio::runtime::Runtime;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Starts a mock server answering `GET /countryInfoJSON?username=demo`.
///
/// The blocking client must not run inside the runtime, so the runtime is
/// only used to start and configure the server.
fn mock_geonames(rt: &Runtime, response: ResponseTemplate) -> MockServer {
    rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/countryInfoJSON"))
            .and(query_param("username", "demo"))
            .respond_with(response)
            .mount(&server)
            .await;
        server
    })
}

fn client_for(server: &MockServer) -> GeonamesClient {
    GeonamesClient::new(format!("{}/countryInfoJSON", server.uri()), "demo")
}

#[test]
fn ok_response_is_parsed() {
    let rt = Runtime::new().unwrap();
    let server = mock_geonames(
        &rt,
        ResponseTemplate::new(200).set_body_string(
            r#"{"geonames":[{"countryCode":"DE","continent":"EU","countryName":"Germany"}]}"#,
        ),
    );

    let fetched = client_for(&server).fetch().unwrap();
    assert_eq!(
        fetched,
        CountryInfoFetch::Records(vec![CountryInfo::new("DE", "EU")])
    );
}

#[test]
fn sequence_payload_yields_one_row() {
    let rt = Runtime::new().unwrap();
    let server = mock_geonames(
        &rt,
        ResponseTemplate::new(200)
            .set_body_string(r#"[{"geonames":[{"countryCode":"DE","continent":"EU"}]}]"#),
    );

    let fx = Fixture::new();
    let (mut store, _) = Store::bootstrap(&fx.db_path()).unwrap();
    let outcome = import_continent_map(&mut store, &client_for(&server)).unwrap();

    assert_eq!(outcome, ContinentMapOutcome::Imported(1));
    assert_eq!(store.continents_of("DE").unwrap(), ["EU"]);
}

#[test]
fn server_error_is_skipped_not_fatal() {
    let rt = Runtime::new().unwrap();
    let server = mock_geonames(&rt, ResponseTemplate::new(500));

    let fx = Fixture::new();
    let (mut store, _) = Store::bootstrap(&fx.db_path()).unwrap();
    let outcome = import_continent_map(&mut store, &client_for(&server)).unwrap();

    match outcome {
        ContinentMapOutcome::Skipped(reason) => assert!(reason.contains("500"), "{reason}"),
        other => panic!("expected Skipped, got {other:?}"),
    }
    assert_eq!(store.stats().unwrap().country_continents, 0);
}

#[test]
fn wrong_username_is_not_matched() {
    let rt = Runtime::new().unwrap();
    let server = mock_geonames(&rt, ResponseTemplate::new(200).set_body_string("{}"));

    let client = GeonamesClient::new(format!("{}/countryInfoJSON", server.uri()), "other");
    // wiremock answers unmatched requests with 404
    assert!(matches!(
        client.fetch().unwrap(),
        CountryInfoFetch::Unavailable(reason) if reason.contains("404")
    ));
}

#[test]
fn malformed_body_is_fatal() {
    let rt = Runtime::new().unwrap();
    let server = mock_geonames(
        &rt,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    );

    let err = client_for(&server).fetch().unwrap_err();
    assert!(matches!(err, GeoI18nError::Json(_)));
}

#[test]
fn unreachable_host_is_skipped() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = GeonamesClient::new(format!("http://127.0.0.1:{port}/countryInfoJSON"), "demo");
    assert!(matches!(
        client.fetch().unwrap(),
        CountryInfoFetch::Unavailable(reason) if reason.starts_with("request failed")
    ));
}
