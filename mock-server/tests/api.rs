use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Item};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_items_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/items/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<Item> = body_json(resp).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn list_requires_trailing_slash() {
    // The client always addresses the collection as `/items/`; the bare
    // path is not part of the contract.
    let app = app();
    let resp = app.oneshot(get_request("/items")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- create ---

#[tokio::test]
async fn create_item_returns_201_and_assigns_id() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/items/",
            r#"{"name":"Widget","description":"A widget","price":9.99}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let item: Item = body_json(resp).await;
    assert_eq!(item.id, 1);
    assert_eq!(item.name, "Widget");
    assert_eq!(item.description, "A widget");
    assert_eq!(item.price, 9.99);
}

#[tokio::test]
async fn create_item_missing_field_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/items/",
            r#"{"name":"Widget","description":"A widget"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_item_skips_ui_validation() {
    // Blank name and non-positive price are blocked client-side only; the
    // backend contract leaves them unspecified and this server accepts them.
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/items/",
            r#"{"name":"","description":"","price":-3.0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let item: Item = body_json(resp).await;
    assert_eq!(item.price, -3.0);
}

// --- get ---

#[tokio::test]
async fn get_item_not_found() {
    let app = app();
    let resp = app.oneshot(get_request("/items/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_item_bad_id_returns_400() {
    let app = app();
    let resp = app.oneshot(get_request("/items/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_item_not_found() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/items/99",
            r#"{"name":"Nope","description":"missing","price":1.0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_item_rejects_partial_body() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/items/",
            r#"{"name":"Widget","description":"A widget","price":9.99}"#,
        ))
        .await
        .unwrap();
    let created: Item = body_json(resp).await;

    // PUT carries the full draft or nothing; a lone field is rejected.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/items/{}", created.id),
            r#"{"name":"Renamed"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- delete ---

#[tokio::test]
async fn delete_item_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/items/99")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two items — ids are sequential from 1
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/items/",
            r#"{"name":"Widget","description":"A widget","price":9.99}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: Item = body_json(resp).await;
    assert_eq!(first.id, 1);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/items/",
            r#"{"name":"Gadget","description":"A gadget","price":24.5}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let second: Item = body_json(resp).await;
    assert_eq!(second.id, 2);

    // list — ascending id order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/items/"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<Item> = body_json(resp).await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[1].id, 2);

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/items/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Item = body_json(resp).await;
    assert_eq!(fetched.name, "Widget");

    // update — replaces every writable field
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            "/items/1",
            r#"{"name":"Widget v2","description":"Refreshed","price":12.0}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Item = body_json(resp).await;
    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "Widget v2");
    assert_eq!(updated.description, "Refreshed");
    assert_eq!(updated.price, 12.0);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri("/items/1")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/items/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete — only the second item remains
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/items/"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<Item> = body_json(resp).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 2);

    // ids are never reused after a delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/items/",
            r#"{"name":"Sprocket","description":"A sprocket","price":3.25}"#,
        ))
        .await
        .unwrap();
    let third: Item = body_json(resp).await;
    assert_eq!(third.id, 3);
}
