use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::AppState;

pub mod auth;
pub mod method;
pub mod pages;

/// The full route table. Unmatched paths fall through to the 404 handler;
/// `/static` serves the bundled assets referenced by the templates.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::handler::root))
        .route("/image", get(pages::handler::image))
        .route("/jinja2", get(pages::handler::jinja2))
        .route("/form", get(pages::handler::form))
        .route(
            "/method",
            get(method::handler::submit_get).post(method::handler::submit_post),
        )
        .route("/hello/{name}", get(pages::handler::hello))
        .route("/input/{num}", get(pages::handler::input))
        .route("/mypage", get(auth::handler::mypage))
        .route(
            "/login",
            get(auth::handler::login_page).post(auth::handler::login_submit),
        )
        .route("/logout", get(auth::handler::logout))
        .route("/daum", get(pages::handler::daum))
        .route("/naver", get(pages::handler::naver))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(pages::handler::not_found)
        .with_state(state)
}
