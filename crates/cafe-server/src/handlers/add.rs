//! New-cafe form and submission

use crate::error::PageError;
use crate::views;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use cafe_core::{CafeError, CafeForm, FieldErrors};
use tracing::{info, warn};

pub const DUPLICATE_NAME: &str = "A cafe with this name already exists.";

pub async fn form() -> Html<String> {
    Html(views::form::add_page(&CafeForm::default(), &FieldErrors::new()))
}

pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<CafeForm>,
) -> Result<Response, PageError> {
    let new_cafe = match form.validate() {
        Ok(cafe) => cafe,
        Err(CafeError::Validation(errors)) => {
            info!("Rejected cafe submission: {}", errors);
            return Ok(rerender(StatusCode::UNPROCESSABLE_ENTITY, &form, &errors));
        }
        Err(e) => return Err(e.into()),
    };

    match state.store.insert(&new_cafe).await {
        Ok(cafe) => {
            info!("Added cafe {} ({})", cafe.id, cafe.name);
            // 303 so the browser follows with a GET
            Ok(Redirect::to("/cafes").into_response())
        }
        Err(CafeError::ConstraintViolation { field, message }) => {
            warn!("Insert refused: {}", message);
            let mut errors = FieldErrors::new();
            errors.add(field, DUPLICATE_NAME);
            Ok(rerender(StatusCode::CONFLICT, &form, &errors))
        }
        Err(e) => Err(e.into()),
    }
}

fn rerender(status: StatusCode, form: &CafeForm, errors: &FieldErrors) -> Response {
    (status, Html(views::form::add_page(form, errors))).into_response()
}

#[cfg(test)]
mod tests {
    use super::DUPLICATE_NAME;
    use crate::handlers::testing::{get, post_form, router, valid_fields, UnavailableStore};
    use crate::storage::{Database, MemoryStore};
    use axum::http::{header, StatusCode};
    use cafe_core::{CafeStore, Seating};
    use std::sync::Arc;

    fn with(fields: Vec<(&'static str, &'static str)>, key: &str, value: &'static str) -> Vec<(&'static str, &'static str)> {
        fields
            .into_iter()
            .map(|(k, v)| if k == key { (k, value) } else { (k, v) })
            .collect()
    }

    #[tokio::test]
    async fn test_get_add_renders_empty_form() {
        let app = router(Arc::new(MemoryStore::new()));
        let response = get(&app, "/add").await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains(r#"<form method="post" action="/add""#));
        assert!(!response.body.contains("invalid-feedback"));
    }

    #[tokio::test]
    async fn test_valid_submission_redirects_and_stores() {
        let store = Arc::new(Database::in_memory().await.unwrap());
        let app = router(store.clone());
        let before = store.list_all().await.unwrap().len();

        let response = post_form(&app, "/add", &valid_fields("Prufrock")).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers.get(header::LOCATION).unwrap(),
            "/cafes"
        );

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), before + 1);
        let cafe = &all[0];
        assert_eq!(cafe.name, "Prufrock");
        assert_eq!(cafe.map_url, "https://goo.gl/maps/Xyz123");
        assert_eq!(cafe.img_url, "https://images.example.com/cafe.jpg");
        assert_eq!(cafe.location, "Bermondsey");
        assert_eq!(cafe.seats, Seating::FiveToTen);
        assert!(cafe.has_toilet);
        assert!(cafe.has_wifi);
        assert!(!cafe.has_sockets);
        assert!(!cafe.can_take_calls);
        assert_eq!(cafe.coffee_price.as_deref(), Some("£2.75"));

        let listing = get(&app, "/cafes").await;
        assert!(listing.body.contains("<td>Prufrock</td>"));
    }

    #[tokio::test]
    async fn test_duplicate_name_is_form_error() {
        let store = Arc::new(Database::in_memory().await.unwrap());
        let app = router(store.clone());

        let first = post_form(&app, "/add", &valid_fields("Ozone")).await;
        assert_eq!(first.status, StatusCode::SEE_OTHER);

        let second = post_form(&app, "/add", &valid_fields("Ozone")).await;
        assert_eq!(second.status, StatusCode::CONFLICT);
        assert!(second.body.contains(DUPLICATE_NAME));
        assert!(second.body.contains(r#"value="Ozone""#));
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_urls_rejected() {
        let store = Arc::new(MemoryStore::new());
        let app = router(store.clone());

        for field in ["map_url", "img_url"] {
            let fields = with(valid_fields("Urlless"), field, "not-a-url");
            let response = post_form(&app, "/add", &fields).await;
            assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "{}", field);
            assert!(response.body.contains("Invalid URL."));
            assert!(response
                .body
                .contains(&format!(r#"is-invalid" id="{}""#, field)));
        }
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_seating_rejected() {
        let store = Arc::new(MemoryStore::new());
        let app = router(store.clone());

        let fields = with(valid_fields("Packed"), "seats", "Hundreds");
        let response = post_form(&app, "/add", &fields).await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.body.contains("Not a valid choice."));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_fields_rejected() {
        let store = Arc::new(MemoryStore::new());
        let app = router(store.clone());

        let response = post_form(&app, "/add", &[("name", "Only a name")]).await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.body.matches("This field is required.").count(), 4);
        assert!(response.body.contains(r#"value="Only a name""#));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_optional_price_may_be_blank() {
        let store = Arc::new(MemoryStore::new());
        let app = router(store.clone());

        let fields = with(valid_fields("No Price"), "coffee_price", "");
        let response = post_form(&app, "/add", &fields).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(store.list_all().await.unwrap()[0].coffee_price, None);
    }

    #[tokio::test]
    async fn test_unavailable_store_is_server_error() {
        let app = router(Arc::new(UnavailableStore));
        let response = post_form(&app, "/add", &valid_fields("Doomed")).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.body.contains("Something went wrong"));
    }
}
