// Fake products API served on an ephemeral port for integration tests.
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use products_client::domain::{Product, ProductDraft, ProductUpdate};
use serde_json::json;
use std::sync::{Arc, Mutex};

// Behavior switches and observed requests of the fake backend.
pub struct FakeApi {
    pub products: Vec<Product>,
    // Status answered to a successful PUT; the real API answers 204.
    pub update_status: StatusCode,
    // Answer 200 with a body that is not JSON on list requests.
    pub malformed_list: bool,
    // "METHOD /path" for every request, in arrival order.
    pub requests: Vec<String>,
}

pub type SharedApi = Arc<Mutex<FakeApi>>;

impl FakeApi {
    pub fn with_products(products: Vec<Product>) -> SharedApi {
        Arc::new(Mutex::new(FakeApi {
            products,
            update_status: StatusCode::NO_CONTENT,
            malformed_list: false,
            requests: Vec::new(),
        }))
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Dune".to_string(),
            price: 12.5,
            description: "Desert planet".to_string(),
        },
        Product {
            id: 2,
            name: "Emma".to_string(),
            price: 8.0,
            description: "Matchmaking".to_string(),
        },
    ]
}

pub fn requests(api: &SharedApi) -> Vec<String> {
    api.lock().expect("fake api mutex poisoned").requests.clone()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "product not found" })),
    )
        .into_response()
}

async fn list(State(api): State<SharedApi>) -> Response {
    let mut api = api.lock().expect("fake api mutex poisoned");
    api.requests.push("GET /api/products".to_string());
    if api.malformed_list {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }
    Json(api.products.clone()).into_response()
}

async fn fetch(State(api): State<SharedApi>, Path(id): Path<i64>) -> Response {
    let mut api = api.lock().expect("fake api mutex poisoned");
    api.requests.push(format!("GET /api/products/{id}"));
    match api.products.iter().find(|product| product.id == id) {
        Some(product) => Json(product.clone()).into_response(),
        None => not_found(),
    }
}

async fn create(State(api): State<SharedApi>, Json(draft): Json<ProductDraft>) -> Response {
    let mut api = api.lock().expect("fake api mutex poisoned");
    api.requests.push("POST /api/products".to_string());
    let Some(price) = draft.price else {
        // Shaped like ASP.NET problem details.
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "title": "The price field is required.", "status": 400 })),
        )
            .into_response();
    };

    let id = api.products.iter().map(|product| product.id).max().unwrap_or(0) + 1;
    let product = Product {
        id,
        name: draft.name,
        price,
        description: draft.description,
    };
    api.products.push(product.clone());
    (StatusCode::CREATED, Json(product)).into_response()
}

async fn update(
    State(api): State<SharedApi>,
    Path(id): Path<i64>,
    Json(update): Json<ProductUpdate>,
) -> Response {
    let mut api = api.lock().expect("fake api mutex poisoned");
    api.requests.push(format!("PUT /api/products/{id}"));
    if update.id != id {
        return StatusCode::BAD_REQUEST.into_response();
    }
    let status = api.update_status;
    let Some(product) = api.products.iter_mut().find(|product| product.id == id) else {
        return not_found();
    };
    product.name = update.name;
    product.price = update.price.unwrap_or_default();
    product.description = update.description;
    if status == StatusCode::NO_CONTENT {
        return status.into_response();
    }
    (status, Json(product.clone())).into_response()
}

async fn remove(State(api): State<SharedApi>, Path(id): Path<i64>) -> Response {
    let mut api = api.lock().expect("fake api mutex poisoned");
    api.requests.push(format!("DELETE /api/products/{id}"));
    let before = api.products.len();
    api.products.retain(|product| product.id != id);
    if api.products.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}

// Serve the fake API in the current runtime and return its base URL.
pub async fn spawn_fake_api(api: SharedApi) -> String {
    let app = Router::new()
        .route("/api/products", get(list).post(create))
        .route(
            "/api/products/{id}",
            get(fetch).put(update).delete(remove),
        )
        .with_state(api);

    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake api failed");
    });

    format!("http://{addr}")
}
