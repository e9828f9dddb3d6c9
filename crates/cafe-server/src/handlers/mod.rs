//! HTTP handlers

pub mod add;
pub mod api;
pub mod cafes;
pub mod health;
pub mod home;

pub use health::health;

use crate::views;
use axum::{http::StatusCode, response::Html};

pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(views::not_found_page()))
}
