use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::store::PriceItem;

use super::routes::SharedStore;

/// Response shape of `GET /prices`: the whole board under its "food" key.
#[derive(Debug, Serialize)]
pub struct PriceBoard {
    pub food: Vec<PriceItem>,
}

/// A request payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPrice {
    pub name: String,
    pub price: f64,
}

/// Check a raw JSON body for a non-empty string `name` and a numeric
/// `price`. Numeric strings, booleans and null are all rejected. The
/// store is never touched on failure.
///
/// Bodies are taken as raw `serde_json::Value` rather than a typed
/// extractor so that a type mismatch still produces the contract's
/// 400 `Invalid request body` instead of a framework status code.
pub fn validate_price_body(body: &Value) -> Result<ValidatedPrice, ApiError> {
    let name = body
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(ApiError::InvalidBody)?;

    let price = body
        .get("price")
        .and_then(Value::as_f64)
        .ok_or(ApiError::InvalidBody)?;

    Ok(ValidatedPrice {
        name: name.to_string(),
        price,
    })
}

pub async fn list_prices(State(store): State<SharedStore>) -> Json<PriceBoard> {
    let store = store.lock().await;
    Json(PriceBoard {
        food: store.list().to_vec(),
    })
}

pub async fn create_price(
    State(store): State<SharedStore>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<PriceItem>), ApiError> {
    let valid = validate_price_body(&body)?;

    let mut store = store.lock().await;
    let item = store.append(valid.name, valid.price);

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_price(
    State(store): State<SharedStore>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<PriceItem>, ApiError> {
    // Only the price from the body is applied; the body's name is still
    // required by validation.
    let valid = validate_price_body(&body)?;

    let mut store = store.lock().await;
    let item = store
        .update_price(&name, valid.price)
        .ok_or(ApiError::NotFound)?;

    Ok(Json(item))
}

pub async fn replace_price(
    State(store): State<SharedStore>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<PriceItem>, ApiError> {
    let valid = validate_price_body(&body)?;

    let mut store = store.lock().await;
    let item = store
        .replace(&name, valid.name, valid.price)
        .ok_or(ApiError::NotFound)?;

    Ok(Json(item))
}

pub async fn delete_price(
    State(store): State<SharedStore>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = store.lock().await;
    store.remove(&name).ok_or(ApiError::NotFound)?;

    Ok(StatusCode::NO_CONTENT)
}
