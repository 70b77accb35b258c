use crate::views::{render_page, FormValues};
use axum::response::Html;

/// The handler for the root (`/`) endpoint: an empty form with default options.
pub async fn index() -> Html<String> {
    Html(render_page(&FormValues::default(), &[], None))
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
