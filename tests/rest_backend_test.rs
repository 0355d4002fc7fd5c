//! Integration tests for the Supabase REST backend against a mock server

mod common;

use common::validated;
use halal_ingest::adapters::rest::{RestClient, RestStore};
use halal_ingest::adapters::store::{PlaceStore, Rollback};
use halal_ingest::config::{secret_string, RestSettings};
use halal_ingest::core::analyze::analyze;
use halal_ingest::core::apply::{place_update, ApplyEngine, ApplyOptions};
use halal_ingest::domain::{IngestError, StoreError, TargetTable};
use mockito::Matcher;

fn settings(base_url: &str) -> RestSettings {
    RestSettings {
        base_url: base_url.to_string(),
        api_key: secret_string("service-role-key".to_string()),
        timeout_seconds: 5,
    }
}

fn store(base_url: &str) -> RestStore {
    RestStore::new(RestClient::new(settings(base_url)).unwrap())
}

fn probe_query() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("select".into(), "id".into()),
        Matcher::UrlEncoded("limit".into(), "1".into()),
    ])
}

fn patch_query(id: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("id".into(), format!("eq.{id}")),
        Matcher::UrlEncoded("select".into(), "name,halal_status".into()),
    ])
}

#[tokio::test]
async fn test_probe_falls_back_to_places() {
    let mut server = mockito::Server::new_async().await;
    let place = server
        .mock("GET", "/rest/v1/place")
        .match_query(probe_query())
        .with_status(404)
        .with_body(r#"{"message":"relation \"public.place\" does not exist"}"#)
        .create_async()
        .await;
    let places = server
        .mock("GET", "/rest/v1/places")
        .match_query(probe_query())
        .match_header("apikey", "service-role-key")
        .match_header("authorization", "Bearer service-role-key")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let mut store = store(&server.url());
    let table = store.resolve_target_table().await.unwrap();

    assert_eq!(table, TargetTable::Places);
    place.assert_async().await;
    places.assert_async().await;
}

#[tokio::test]
async fn test_probe_unauthorized_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/v1/place")
        .match_query(probe_query())
        .with_status(401)
        .with_body(r#"{"message":"Invalid API key"}"#)
        .create_async()
        .await;

    let mut store = store(&server.url());
    let err = store.resolve_target_table().await.unwrap_err();

    assert!(matches!(err, IngestError::Store(StoreError::Unauthorized(_))));
}

#[tokio::test]
async fn test_no_table_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(r"^/rest/v1/places?$".to_string()))
        .match_query(probe_query())
        .with_status(404)
        .expect(2)
        .create_async()
        .await;

    let mut store = store(&server.url());
    let err = store.resolve_target_table().await.unwrap_err();

    assert!(matches!(err, IngestError::Store(StoreError::TargetNotFound(_))));
}

#[tokio::test]
async fn test_patch_returns_prior_state() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/v1/place")
        .match_query(probe_query())
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", "/rest/v1/place")
        .match_query(patch_query("42"))
        .match_header("prefer", "return=representation")
        .match_body(Matcher::PartialJsonString(
            r#"{"cc_halal_status":"only","cc_halal_confidence":90,"cc_certifier_org":"IFANCA"}"#
                .to_string(),
        ))
        .with_status(200)
        .with_body(r#"[{"name":"Al Baraka Grill","halal_status":"yes"}]"#)
        .create_async()
        .await;

    let mut engine = ApplyEngine::new(Box::new(store(&server.url())), ApplyOptions::default());
    let summary = engine
        .apply(&[validated(2, "42", 90, "Certified by IFANCA.")])
        .await
        .unwrap();

    patch.assert_async().await;
    assert_eq!(summary.updated_rows, 1);
    let outcome = summary.applied().next().unwrap();
    assert_eq!(outcome.prior_name.as_deref(), Some("Al Baraka Grill"));
    assert_eq!(outcome.prior_status.as_deref(), Some("yes"));
    assert!(outcome.differs());
}

#[tokio::test]
async fn test_empty_representation_means_missing() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/v1/place")
        .match_query(probe_query())
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("PATCH", "/rest/v1/place")
        .match_query(patch_query("7"))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("PATCH", "/rest/v1/place")
        .match_query(patch_query("404"))
        .with_status(204)
        .create_async()
        .await;

    let mut engine = ApplyEngine::new(Box::new(store(&server.url())), ApplyOptions::default());
    let summary = engine
        .apply(&[validated(2, "7", 80, "Menu."), validated(3, "404", 80, "Menu.")])
        .await
        .unwrap();

    assert_eq!(summary.applied_count(), 0);
    assert_eq!(summary.missing_count(), 2);
}

#[tokio::test]
async fn test_missing_with_fail_on_missing_cannot_roll_back() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/v1/place")
        .match_query(probe_query())
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("PATCH", "/rest/v1/place")
        .match_query(patch_query("1"))
        .with_status(200)
        .with_body(r#"[{"name":"Noor Cafe","halal_status":null}]"#)
        .create_async()
        .await;
    server
        .mock("PATCH", "/rest/v1/place")
        .match_query(patch_query("404"))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let mut engine = ApplyEngine::new(
        Box::new(store(&server.url())),
        ApplyOptions {
            fail_on_missing: true,
        },
    );
    let err = engine
        .apply(&[validated(2, "1", 80, "Menu."), validated(3, "404", 80, "Menu.")])
        .await
        .unwrap_err();

    match err {
        IngestError::CountMismatch {
            unconfirmed_ids,
            rolled_back,
            ..
        } => {
            assert_eq!(unconfirmed_ids, vec!["404".to_string()]);
            assert!(!rolled_back);
        }
        other => panic!("expected count mismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_fails_request() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PATCH", "/rest/v1/place")
        .match_query(patch_query("1"))
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let mut store = store(&server.url());
    let mut session = store.begin(TargetTable::Place).await.unwrap();
    let row = validated(2, "1", 80, "Menu.");
    let update = place_update(&row, &analyze(&row));
    let err = session.update_by_id("1", &update).await.unwrap_err();

    match err {
        IngestError::Store(StoreError::RequestFailed { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected request failure, got {other:?}"),
    }
    assert_eq!(session.rollback().await.unwrap(), Rollback::Unsupported);
}
