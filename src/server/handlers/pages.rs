use axum::response::Html;

use crate::templates;

pub async fn index() -> Html<String> {
    Html(templates::render_index())
}
