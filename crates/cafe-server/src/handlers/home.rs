//! Landing page

use crate::views;
use axum::response::Html;

pub async fn index() -> Html<String> {
    Html(views::home_page())
}
