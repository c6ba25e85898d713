use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Task};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn seed() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            user_id: "1".to_string(),
            title: "delectus aut autem".to_string(),
            completed: false,
        },
        Task {
            id: "2".to_string(),
            user_id: "1".to_string(),
            title: "quis ut nam facilis et officia qui".to_string(),
            completed: true,
        },
    ]
}

// --- list ---

#[tokio::test]
async fn list_tasks_empty() {
    let resp = app().oneshot(empty_request("GET", "/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let tasks: Vec<Task> = body_json(resp).await;
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn list_tasks_keeps_seed_order() {
    let resp = app_with(seed())
        .oneshot(empty_request("GET", "/todos"))
        .await
        .unwrap();

    let tasks: Vec<Task> = body_json(resp).await;
    assert_eq!(tasks, seed());
}

// --- create ---

#[tokio::test]
async fn create_task_returns_201_with_next_id() {
    let resp = app_with(seed())
        .oneshot(json_request(
            "POST",
            "/todos",
            r#"{"id":"77","userId":"2","title":"Finish this kata","completed":false}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let task: Task = body_json(resp).await;
    assert_eq!(task.id, "3");
    assert_eq!(task.user_id, "2");
    assert_eq!(task.title, "Finish this kata");
}

#[tokio::test]
async fn create_task_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_task_found() {
    let resp = app_with(seed())
        .oneshot(empty_request("GET", "/todos/2"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let task: Task = body_json(resp).await;
    assert!(task.completed);
}

#[tokio::test]
async fn get_task_not_found() {
    let resp = app().oneshot(empty_request("GET", "/todos/1000")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- update ---

#[tokio::test]
async fn update_task_replaces_fields() {
    let resp = app_with(seed())
        .oneshot(json_request(
            "PUT",
            "/todos/1",
            r#"{"id":"1","userId":"5","title":"Renamed","completed":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let task: Task = body_json(resp).await;
    assert_eq!(task.id, "1");
    assert_eq!(task.user_id, "5");
    assert_eq!(task.title, "Renamed");
    assert!(task.completed);
}

#[tokio::test]
async fn update_task_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/todos/1000", r#"{"title":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_task_returns_empty_object() {
    let resp = app_with(seed())
        .oneshot(empty_request("DELETE", "/todos/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"{}");
}

#[tokio::test]
async fn delete_task_not_found() {
    let resp = app().oneshot(empty_request("DELETE", "/todos/1000")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/todos", r#"{"userId":"1","title":"Walk dog"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Task = body_json(resp).await;
    assert_eq!(created.id, "1");
    assert!(!created.completed);
    let id = created.id;

    // update
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/todos/{id}"),
            r#"{"userId":"1","title":"Walk dog","completed":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Task = body_json(resp).await;
    assert!(updated.completed);

    // list
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/todos"))
        .await
        .unwrap();
    let tasks: Vec<Task> = body_json(resp).await;
    assert_eq!(tasks, vec![updated]);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // get after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
