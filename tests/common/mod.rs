#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, header, response::Parts},
};
use tower::ServiceExt;
use webapp_basics::{AppState, config::Config, routes};

pub fn app() -> Router {
    let state = AppState::new(Config::default()).expect("application state");
    routes::create_router(state)
}

pub async fn send(app: &Router, req: Request<Body>) -> (Parts, String) {
    let response = app.clone().oneshot(req).await.expect("request");
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.expect("body");
    (parts, String::from_utf8_lossy(&bytes).into_owned())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}
