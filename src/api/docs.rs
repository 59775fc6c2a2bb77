use axum::response::Json;
use serde_json::{json, Value};

/// `GET /docs` - machine-readable description of the route table
/// (OpenAPI 3.0).
pub async fn api_docs() -> Json<Value> {
    let price_schema = json!({
        "type": "object",
        "required": ["name", "price"],
        "properties": {
            "name": { "type": "string" },
            "price": { "type": "number" }
        }
    });

    let name_param = json!({
        "name": "name",
        "in": "path",
        "required": true,
        "schema": { "type": "string" }
    });

    Json(json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Personal Budget API",
            "version": "2.0.0",
            "description": "CRUD over the in-memory food price board"
        },
        "paths": {
            "/prices": {
                "get": {
                    "summary": "Return all prices",
                    "responses": {
                        "200": { "description": "The food price board" }
                    }
                },
                "post": {
                    "summary": "Add a new price",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": price_schema.clone() } }
                    },
                    "responses": {
                        "201": { "description": "Successfully added the price" },
                        "400": { "description": "Invalid request body" }
                    }
                }
            },
            "/prices/{name}": {
                "patch": {
                    "summary": "Update the price of a specific item",
                    "parameters": [name_param.clone()],
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": price_schema.clone() } }
                    },
                    "responses": {
                        "200": { "description": "Successfully updated the price" },
                        "400": { "description": "Invalid request body" },
                        "404": { "description": "Item not found" }
                    }
                },
                "put": {
                    "summary": "Replace a specific item",
                    "parameters": [name_param.clone()],
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": price_schema.clone() } }
                    },
                    "responses": {
                        "200": { "description": "Successfully replaced the item" },
                        "400": { "description": "Invalid request body" },
                        "404": { "description": "Item not found" }
                    }
                },
                "delete": {
                    "summary": "Delete a specific item",
                    "parameters": [name_param.clone()],
                    "responses": {
                        "204": { "description": "Successfully deleted the item" },
                        "404": { "description": "Item not found" }
                    }
                }
            }
        }
    }))
}
