use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};

use blog_api::{AppState, configure_app};
use blog_infra::InMemoryPostStore;

fn seeded_state() -> (AppState, Arc<InMemoryPostStore>) {
    let store = Arc::new(InMemoryPostStore::seeded());
    (AppState::with_store(store.clone()), store)
}

#[actix_web::test]
async fn test_list_returns_newest_seed_first() {
    let (state, _) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"][0]["id"], "2");
    assert_eq!(body["data"][0]["createdAt"], "2024-01-02T00:00:00.000Z");
    assert_eq!(body["data"][1]["id"], "1");
    assert!(body.get("message").is_none());
}

#[actix_web::test]
async fn test_create_defaults_author() {
    let (state, store) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "A", "content": "B" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["author"], "Anonymous");
    assert_eq!(body["data"]["createdAt"], body["data"]["updatedAt"]);
    assert_eq!(store.len().await, 3);

    let id = body["data"]["id"].as_str().unwrap();
    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", id))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["data"]["title"], "A");
    assert_eq!(fetched["data"]["content"], "B");
}

#[actix_web::test]
async fn test_create_with_author() {
    let (state, _) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "A", "content": "B", "author": "Ada" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["author"], "Ada");
}

#[actix_web::test]
async fn test_create_missing_fields_is_rejected() {
    let (state, store) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    for payload in [
        json!({ "title": "", "content": "B" }),
        json!({ "title": "A", "content": "" }),
        json!({ "title": "A" }),
        json!({}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "success": false, "message": "Title and content are required" })
        );
    }

    assert_eq!(store.len().await, 2);
}

#[actix_web::test]
async fn test_get_missing_post() {
    let (state, _) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::get().uri("/api/posts/zzz").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "message": "Post not found" }));
}

#[actix_web::test]
async fn test_update_missing_post_is_not_found() {
    let (state, _) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::put()
        .uri("/api/posts/zzz")
        .set_json(json!({ "title": "", "content": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_update_missing_post_with_unreadable_body_is_not_found() {
    let (state, _) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let requests = [
        test::TestRequest::put().uri("/api/posts/zzz").to_request(),
        test::TestRequest::put()
            .uri("/api/posts/zzz")
            .insert_header(("content-type", "text/plain"))
            .set_payload("title=A")
            .to_request(),
        test::TestRequest::put()
            .uri("/api/posts/zzz")
            .set_json(json!({ "title": 1, "content": "x" }))
            .to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": false, "message": "Post not found" }));
    }
}

#[actix_web::test]
async fn test_update_existing_post_without_body_is_bad_request() {
    let (state, _) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::get().uri("/api/posts/1").to_request();
    let before: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put().uri("/api/posts/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);

    let req = test::TestRequest::get().uri("/api/posts/1").to_request();
    let after: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(before, after);
}

#[actix_web::test]
async fn test_update_empty_title_leaves_post_unchanged() {
    let (state, _) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::get().uri("/api/posts/1").to_request();
    let before: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/api/posts/1")
        .set_json(json!({ "title": "", "content": "changed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/posts/1").to_request();
    let after: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(before, after);
}

#[actix_web::test]
async fn test_update_replaces_fields_and_keeps_identity() {
    let (state, _) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::put()
        .uri("/api/posts/2")
        .set_json(json!({ "title": "Renamed", "content": "Rewritten" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let post = &body["data"];
    assert_eq!(post["id"], "2");
    assert_eq!(post["title"], "Renamed");
    assert_eq!(post["content"], "Rewritten");
    assert_eq!(post["author"], "Developer");
    assert_eq!(post["createdAt"], "2024-01-02T00:00:00.000Z");
    assert_ne!(post["updatedAt"], post["createdAt"]);
}

#[actix_web::test]
async fn test_delete_twice() {
    let (state, store) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::delete().uri("/api/posts/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], "1");
    assert_eq!(body["data"]["title"], "Welcome to Neo-Brutal Blog");

    let req = test::TestRequest::delete().uri("/api/posts/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/posts/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert_eq!(store.len().await, 1);
}

#[actix_web::test]
async fn test_health() {
    let (state, _) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Blog API v1.0 is running");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[actix_web::test]
async fn test_malformed_body_gets_envelope() {
    let (state, store) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
    assert_eq!(store.len().await, 2);
}

#[actix_web::test]
async fn test_unknown_api_route() {
    let (state, _) = seeded_state();
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::get().uri("/api/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "message": "Route not found" }));
}
