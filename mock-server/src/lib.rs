//! In-memory stand-in for the item-catalog backend.
//!
//! Serves the conventional REST resource the client expects at `/items/`:
//! sequential integer ids, full-body PUT replacement, and no field
//! validation beyond what deserialization requires. The real backend's
//! validation rules are unspecified, so this one accepts values the UI
//! would have blocked (blank names, non-positive prices).

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Body accepted by create and update. All fields required; there is no
/// partial-update form of this resource.
#[derive(Debug, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Item table plus the id sequence the backend owns. Keyed by id in a
/// `BTreeMap` so list responses come back in ascending-id order.
#[derive(Debug, Default)]
pub struct Store {
    items: BTreeMap<i64, Item>,
    last_id: i64,
}

impl Store {
    fn insert(&mut self, draft: ItemDraft) -> Item {
        self.last_id += 1;
        let item = Item {
            id: self.last_id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
        };
        self.items.insert(item.id, item.clone());
        item
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db = Db::default();
    Router::new()
        .route("/items/", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let store = db.read().await;
    Json(store.items.values().cloned().collect())
}

async fn create_item(
    State(db): State<Db>,
    Json(draft): Json<ItemDraft>,
) -> (StatusCode, Json<Item>) {
    let item = db.write().await.insert(draft);
    (StatusCode::CREATED, Json(item))
}

async fn get_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, StatusCode> {
    let store = db.read().await;
    store.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(draft): Json<ItemDraft>,
) -> Result<Json<Item>, StatusCode> {
    let mut store = db.write().await;
    let item = store.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    item.name = draft.name;
    item.description = draft.description;
    item.price = draft.price;
    Ok(Json(item.clone()))
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .items
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
