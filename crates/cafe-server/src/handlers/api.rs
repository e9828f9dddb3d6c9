//! JSON listing

use crate::error::ApiError;
use crate::AppState;
use axum::{extract::State, Json};
use cafe_core::Cafe;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Cafe>>, ApiError> {
    Ok(Json(state.store.list_all().await?))
}

#[cfg(test)]
mod tests {
    use crate::handlers::testing::{get, post_form, router, valid_fields, UnavailableStore};
    use crate::storage::MemoryStore;
    use axum::http::StatusCode;
    use serde_json::Value;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_empty_list() {
        let app = router(Arc::new(MemoryStore::new()));
        let response = get(&app, "/api/cafes").await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "[]");
    }

    #[tokio::test]
    async fn test_booleans_round_trip_as_booleans() {
        let app = router(Arc::new(MemoryStore::new()));
        post_form(&app, "/add", &valid_fields("Notes")).await;

        let response = get(&app, "/api/cafes").await;
        let cafes: Value = serde_json::from_str(&response.body).unwrap();
        let cafe = &cafes[0];
        assert_eq!(cafe["name"], "Notes");
        assert_eq!(cafe["seats"], "5 to 10");
        assert_eq!(cafe["has_toilet"], Value::Bool(true));
        assert_eq!(cafe["has_sockets"], Value::Bool(false));
        assert_eq!(cafe["coffee_price"], "£2.75");
        assert!(cafe["id"].is_i64());

        // Keys keep declaration order
        let id = response.body.find("\"id\"").unwrap();
        let name = response.body.find("\"name\"").unwrap();
        let price = response.body.find("\"coffee_price\"").unwrap();
        assert!(id < name && name < price);
    }

    #[tokio::test]
    async fn test_unavailable_store() {
        let app = router(Arc::new(UnavailableStore));
        let response = get(&app, "/api/cafes").await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["code"], "store_unavailable");
    }
}
