//! Stateful in-memory stand-in for the upstream `/todos` API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

use crate::server::{self, RunningServer};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub completed: bool,
}

/// Body accepted by create and update. Any `id` in it is ignored: the path
/// names the task on update and the server assigns one on create.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    #[serde(default)]
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

struct Store {
    tasks: Vec<Task>,
    next_id: u64,
}

type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router preloaded with `seed`, served in the given order.
pub fn app_with(seed: Vec<Task>) -> Router {
    let next_id = seed
        .iter()
        .filter_map(|t| t.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        + 1;
    let db: Db = Arc::new(RwLock::new(Store {
        tasks: seed,
        next_id,
    }));
    Router::new()
        .route("/todos", get(list_tasks).post(create_task))
        .route("/todos/{id}", get(get_task).put(update_task).delete(delete_task))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve a fake API preloaded with `seed` on a random local port.
pub fn start_fake(seed: Vec<Task>) -> std::io::Result<RunningServer> {
    server::spawn(app_with(seed))
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    Json(db.read().await.tasks.clone())
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<TaskInput>,
) -> (StatusCode, Json<Task>) {
    let mut store = db.write().await;
    let task = Task {
        id: store.next_id.to_string(),
        user_id: input.user_id,
        title: input.title,
        completed: input.completed,
    };
    store.next_id += 1;
    store.tasks.push(task.clone());
    (StatusCode::CREATED, Json(task))
}

async fn get_task(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Task>, StatusCode> {
    let store = db.read().await;
    store
        .tasks
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<TaskInput>,
) -> Result<Json<Task>, StatusCode> {
    let mut store = db.write().await;
    let task = store
        .tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    task.user_id = input.user_id;
    task.title = input.title;
    task.completed = input.completed;
    Ok(Json(task.clone()))
}

async fn delete_task(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut store = db.write().await;
    let index = store
        .tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    store.tasks.remove(index);
    Ok(Json(serde_json::json!({})))
}
