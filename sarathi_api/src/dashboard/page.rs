use axum::response::Html;

pub async fn page_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
