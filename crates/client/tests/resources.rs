//! Caching-layer tests: key dedup, the null-key guard, and mutate-driven
//! revalidation, all counted against a mock backend.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use craftica_core::StoreId;
use craftica_client::models::StoreFilter;
use craftica_client::{
    ClientConfig, CrafticaClient, MarketResources, ResourceKey, ResourceState, Session,
};

fn resources_for(server: &MockServer) -> MarketResources {
    let config = ClientConfig::for_base_url(&server.uri()).expect("valid base url");
    let session = Session::anonymous().expect("session");
    let client = CrafticaClient::new(&config, session).expect("client");
    MarketResources::new(client)
}

fn store_json(id: &str, name: &str) -> serde_json::Value {
    json!({"_id": id, "nombre": name})
}

#[tokio::test]
async fn test_same_key_fetches_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(store_json("7", "Cerámica Sur")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resources = resources_for(&server);
    let first = resources.store(Some("7")).await.expect("first read");
    let second = resources.store(Some("7")).await.expect("second read");

    assert_eq!(first, second);
    assert_eq!(first.expect("present").name, "Cerámica Sur");
}

#[tokio::test]
async fn test_concurrent_same_key_reads_share_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([store_json("1", "Uno")])))
        .expect(1)
        .mount(&server)
        .await;

    let resources = resources_for(&server);
    let filter = StoreFilter {
        page: Some(1),
        ..Default::default()
    };
    let (a, b) = tokio::join!(resources.stores(&filter), resources.stores(&filter));

    assert_eq!(a.expect("first").total, 1);
    assert_eq!(b.expect("second").total, 1);
}

#[tokio::test]
async fn test_distinct_filters_fetch_separately() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let resources = resources_for(&server);
    let first = StoreFilter {
        city: Some("Madrid".to_string()),
        ..Default::default()
    };
    let second = StoreFilter {
        city: Some("Lima".to_string()),
        ..Default::default()
    };
    resources.stores(&first).await.expect("first filter");
    resources.stores(&second).await.expect("second filter");
}

// ============================================================================
// Null-key guard
// ============================================================================

#[tokio::test]
async fn test_null_keys_issue_no_request() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and fail the reads below.

    let resources = resources_for(&server);
    assert!(resources.store(None).await.expect("absent id").is_none());
    assert!(resources.store(Some("")).await.expect("empty id").is_none());
    assert!(
        resources
            .store(Some("undefined"))
            .await
            .expect("routing placeholder")
            .is_none()
    );
    assert!(
        resources
            .comments(Some("undefined"))
            .await
            .expect("comments placeholder")
            .is_none()
    );

    assert!(server.received_requests().await.expect("requests").is_empty());
}

#[tokio::test]
async fn test_null_key_renders_as_loading_state() {
    let server = MockServer::start().await;

    let resources = resources_for(&server);
    let state = ResourceState::from_guarded(resources.store(Some("undefined")).await);

    // A page waiting on a route parameter keeps showing its spinner.
    assert!(state.is_loading());
    assert!(state.value().is_none());
    assert!(state.error().is_none());
}

#[tokio::test]
async fn test_resolved_fetch_renders_as_ready_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(store_json("7", "Lista")))
        .mount(&server)
        .await;

    let resources = resources_for(&server);
    let state = ResourceState::from_guarded(resources.store(Some("7")).await);

    assert!(!state.is_loading());
    assert_eq!(state.value().expect("ready").name, "Lista");
}

// ============================================================================
// Mutate and invalidation
// ============================================================================

#[tokio::test]
async fn test_mutate_refetches_the_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(store_json("7", "Antes")),
        )
        .expect(2)
        .mount(&server)
        .await;

    let resources = resources_for(&server);
    resources.store(Some("7")).await.expect("prime the cache");
    resources.mutate(&ResourceKey::Store(StoreId::new("7"))).await;
}

#[tokio::test]
async fn test_mutate_serves_fresh_data_afterwards() {
    let server = MockServer::start().await;
    let stale = Mock::given(method("GET"))
        .and(path("/tiendas/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(store_json("7", "Antes")))
        .expect(1)
        .mount_as_scoped(&server)
        .await;

    let resources = resources_for(&server);
    let before = resources.store(Some("7")).await.expect("first read");
    assert_eq!(before.expect("present").name, "Antes");
    drop(stale);

    Mock::given(method("GET"))
        .and(path("/tiendas/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(store_json("7", "Después")))
        .mount(&server)
        .await;

    resources.mutate(&ResourceKey::Store(StoreId::new("7"))).await;
    let after = resources.store(Some("7")).await.expect("read after mutate");
    assert_eq!(after.expect("present").name, "Después");
}

#[tokio::test]
async fn test_invalidate_all_drops_every_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(store_json("7", "Tienda")))
        .expect(2)
        .mount(&server)
        .await;

    let resources = resources_for(&server);
    resources.store(Some("7")).await.expect("prime");
    resources.invalidate_all();
    resources.store(Some("7")).await.expect("refetched");
}

// ============================================================================
// Error handling
// ============================================================================

#[tokio::test]
async fn test_errors_are_shared_but_not_cached() {
    let server = MockServer::start().await;
    let failing = Mock::given(method("GET"))
        .and(path("/tiendas/7"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount_as_scoped(&server)
        .await;

    let resources = resources_for(&server);
    let err = resources
        .store(Some("7"))
        .await
        .expect_err("backend failure");
    assert_eq!(err.to_string(), "HTTP error! status: 500");
    drop(failing);

    Mock::given(method("GET"))
        .and(path("/tiendas/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(store_json("7", "Recuperada")))
        .mount(&server)
        .await;

    // The failure was not cached; the next read goes back to the network.
    let store = resources.store(Some("7")).await.expect("retry succeeds");
    assert_eq!(store.expect("present").name, "Recuperada");
}
