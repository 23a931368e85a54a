// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use holocron::browser::{run_effect, BrowserEvent, CategoryBrowser};
use holocron::client::{ClientConfig, FetchError, HttpClient, ResourceSource};
use holocron::model::{Category, CategoryLabel, EntityRef};
use holocron::resolve::resolve_related;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(&ClientConfig { base_url: format!("{}/api/", server.uri()), timeout: None })
        .expect("client")
}

fn reference(server: &MockServer, category: &str, id: u32) -> EntityRef {
    EntityRef::new(format!("{}/api/{category}/{id}/", server.uri())).expect("ref")
}

async fn mount_record(server: &MockServer, category: &str, id: u32, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{category}/{id}/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_page_requests_category_path_with_page_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/people/"))
        .and(query_param("page", "2"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 82,
            "next": format!("{}/api/people/?page=3", server.uri()),
            "previous": format!("{}/api/people/?page=1", server.uri()),
            "results": [
                { "name": "Person 11", "height": "180", "url": format!("{}/api/people/11/", server.uri()) },
                { "name": "Person 12", "height": 95, "url": format!("{}/api/people/12/", server.uri()) }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let page = client.fetch_page(Category::Character, 2).await.expect("page");

    assert_eq!(page.count, 82);
    assert!(page.next.is_some());
    assert!(page.previous.is_some());
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].display_name(), "Person 11");
    assert_eq!(page.results[1].text("height").as_deref(), Some("95"));
}

#[tokio::test]
async fn non_success_status_carries_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/planets/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.fetch_page(Category::Planet, 99).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(matches!(err, FetchError::Status { .. }));
    assert!(err.to_string().ends_with(": Not Found"), "{err}");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/films/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.fetch_page(Category::Film, 1).await.unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }), "{err}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn fetch_record_uses_the_reference_verbatim() {
    let server = MockServer::start().await;
    mount_record(
        &server,
        "films",
        1,
        json!({ "title": "A New Hope", "episode_id": 4, "url": format!("{}/api/films/1/", server.uri()) }),
    )
    .await;

    let client = client_for(&server).await;
    let film = reference(&server, "films", 1);
    let record = client.fetch_record(&film).await.expect("record");

    assert_eq!(record.display_name(), "A New Hope");
    assert!(record.is(&film));
}

#[tokio::test]
async fn timeout_surfaces_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vehicles/4/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "name": "Sand Crawler" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&ClientConfig {
        base_url: format!("{}/api", server.uri()),
        timeout: Some(Duration::from_millis(100)),
    })
    .expect("client");
    let err = client.fetch_record(&reference(&server, "vehicles", 4)).await.unwrap_err();

    assert!(matches!(err, FetchError::Http { .. }), "{err}");
}

#[tokio::test]
async fn related_resolution_over_http_drops_missing_references() {
    let server = MockServer::start().await;
    mount_record(&server, "people", 1, json!({ "name": "Luke Skywalker" })).await;
    mount_record(&server, "films", 2, json!({ "title": "The Empire Strikes Back", "name": "ignored" }))
        .await;
    Mock::given(method("GET"))
        .and(path("/api/people/404/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let refs = vec![
        reference(&server, "people", 1),
        reference(&server, "people", 404),
        reference(&server, "films", 2),
    ];
    let items = resolve_related(&client, Some(&refs[..])).await;

    let names = items.iter().map(|item| item.display_name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, ["Luke Skywalker", "The Empire Strikes Back"]);
    assert_eq!(items[0].category, CategoryLabel::Known(Category::Character));
    assert_eq!(items[1].category, CategoryLabel::Known(Category::Film));
}

#[tokio::test]
async fn browser_mount_round_trips_through_the_http_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/starships/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 36,
            "next": null,
            "results": [{ "name": "Death Star", "url": format!("{}/api/starships/9/", server.uri()) }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut browser = CategoryBrowser::new(Category::Starship);
    let event = run_effect(&client, browser.mount()).await;
    assert!(matches!(&event, BrowserEvent::PageLoaded { result: Ok(_), .. }));
    browser.apply(event);

    assert_eq!(browser.total_pages(), 4);
    assert!(browser.shows_pagination());
    assert_eq!(browser.records()[0].display_name(), "Death Star");
}
