//! Wire-level tests against a mock backend: request shape, response
//! normalization, and the status-phrase write contracts.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use craftica_core::{PostId, StoreId};
use craftica_client::models::{NewStore, StoreFilter, StoreUpdate};
use craftica_client::{ClientConfig, CrafticaClient, Session};

fn client_for(server: &MockServer) -> CrafticaClient {
    let config = ClientConfig::for_base_url(&server.uri()).expect("valid base url");
    let session = Session::anonymous().expect("session");
    CrafticaClient::new(&config, session).expect("client")
}

fn store_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "nombre": name,
        "calificacion": 4.5,
        "localidad": {
            "direccion": "Calle Mayor 1",
            "ciudad": "Madrid",
            "pais": "España"
        }
    })
}

// ============================================================================
// Query string shape
// ============================================================================

#[tokio::test]
async fn test_list_sends_only_set_params_with_spanish_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "12"))
        .and(query_param("ciudad", "Madrid"))
        .and(query_param_is_missing("pais"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = StoreFilter {
        page: Some(1),
        limit: Some(12),
        city: Some("Madrid".to_string()),
        country: None,
    };
    let page = client.get_stores(&filter).await.expect("list stores");
    assert!(page.is_empty());
}

// ============================================================================
// List normalization
// ============================================================================

#[tokio::test]
async fn test_bare_array_becomes_page_with_computed_totals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            store_json("1", "Alfarería Rosa"),
            store_json("2", "Telares Luna"),
            store_json("3", "Cuero y Sal"),
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = StoreFilter {
        limit: Some(2),
        ..Default::default()
    };
    let page = client.get_stores(&filter).await.expect("list stores");

    assert_eq!(page.data.len(), 3);
    assert_eq!(page.total, 3);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 2);
    assert_eq!(page.total_pages, 2);
}

#[tokio::test]
async fn test_error_flagged_list_degrades_to_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"error": "No se encontraron tiendas"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = StoreFilter {
        page: Some(3),
        limit: Some(5),
        ..Default::default()
    };
    let page = client.get_stores(&filter).await.expect("list stores");

    assert!(page.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.page, 3);
    assert_eq!(page.limit, 5);
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_ready_made_envelope_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [store_json("9", "Vidrio Norte")],
            "total": 41,
            "page": 2,
            "limit": 10,
            "totalPages": 5
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .get_stores(&StoreFilter::default())
        .await
        .expect("list stores");

    assert_eq!(page.total, 41);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.data[0].name, "Vidrio Norte");
}

// ============================================================================
// Detail normalization
// ============================================================================

#[tokio::test]
async fn test_detail_without_identity_field_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas/404"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_store(&StoreId::new("404"))
        .await
        .expect_err("should be not found");

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "store not found");
}

#[tokio::test]
async fn test_detail_parses_iso_timestamps() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "7",
            "nombre": "Cesta Viva",
            "createdAt": "2024-05-01T12:30:00.000Z",
            "updatedAt": "2024-05-02T08:00:00.000Z"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = client.get_store(&StoreId::new("7")).await.expect("store");
    let created = store.created_at.expect("createdAt present");
    assert_eq!(created.to_rfc3339(), "2024-05-01T12:30:00+00:00");
}

#[tokio::test]
async fn test_detail_preserves_numeric_and_string_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"_id": 7, "nombre": "Cesta Viva"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = client.get_store(&StoreId::new(7)).await.expect("store");
    assert_eq!(store.id.as_str(), "7");
    assert_eq!(store.name, "Cesta Viva");
}

// ============================================================================
// Status-phrase write contracts
// ============================================================================

#[tokio::test]
async fn test_create_with_matching_phrase_returns_nested_entity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tiendas"))
        .and(body_json(json!({"nombre": "Barro y Fuego"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Tienda agregada",
            "store": store_json("55", "Barro y Fuego")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = NewStore {
        name: "Barro y Fuego".to_string(),
        rating: None,
        image: None,
        location: None,
        owner_id: None,
    };
    let store = client.create_store(&payload).await.expect("create store");

    assert_eq!(store.id.as_str(), "55");
    assert_eq!(store.name, "Barro y Fuego");
}

#[tokio::test]
async fn test_create_with_other_phrase_raises_it() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tiendas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Error"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = NewStore {
        name: "Barro y Fuego".to_string(),
        rating: None,
        image: None,
        location: None,
        owner_id: None,
    };
    let err = client
        .create_store(&payload)
        .await
        .expect_err("phrase mismatch");
    assert_eq!(err.to_string(), "Error");
}

#[tokio::test]
async fn test_comments_use_the_per_post_path_and_unwrap_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comentarios/publicacion/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "_id": "c1",
                "comentario": "Precioso trabajo",
                "fecha": "2024-05-01",
                "usuario_id": "u1",
                "publicacion_id": 9,
                "megusta": 3
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let comments = client
        .get_comments_for_post(&PostId::new(9))
        .await
        .expect("comments");

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].body, "Precioso trabajo");
    assert_eq!(comments[0].likes, 3);
}

#[tokio::test]
async fn test_update_accepts_exact_phrase_only() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/tiendas/7"))
        .and(body_json(json!({"nombre": "Nuevo Nombre"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "Tienda Actualizada"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let update = StoreUpdate {
        name: Some("Nuevo Nombre".to_string()),
        ..Default::default()
    };
    client
        .update_store(&StoreId::new(7), &update)
        .await
        .expect("update store");
}

#[tokio::test]
async fn test_delete_raises_unexpected_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/tiendas/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "No se pudo eliminar"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .delete_store(&StoreId::new(7))
        .await
        .expect_err("phrase mismatch");
    assert_eq!(err.to_string(), "No se pudo eliminar");
}

// ============================================================================
// HTTP failures
// ============================================================================

#[tokio::test]
async fn test_non_success_status_surfaces_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas/1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "se rompió"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_store(&StoreId::new(1))
        .await
        .expect_err("server error");
    assert_eq!(err.to_string(), "se rompió");
}

#[tokio::test]
async fn test_non_success_status_without_message_formats_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tiendas/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_store(&StoreId::new(1))
        .await
        .expect_err("not found status");
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}
