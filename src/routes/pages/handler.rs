use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use minijinja::context;

use crate::{AppState, error::AppError, templates};

pub const NOT_FOUND_MESSAGE: &str = "페이지가 없습니다. URL을 확인하세요";

pub async fn root() -> &'static str {
    "Hello Web Apps"
}

/// Template referencing a bundled static asset.
#[axum::debug_handler]
pub async fn image(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    templates::render(&state.templates, "static.html", context! {})
}

/// Template-engine demonstration: a title, a string and a list flow from the
/// handler into the page.
#[axum::debug_handler]
pub async fn jinja2(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    templates::render(
        &state.templates,
        "jinja2.html",
        context! {
            title => "Jinja2",
            home_str => "Jinja2를 알아봅시다",
            home_list => vec![1, 2, 3, 4, 5],
        },
    )
}

#[axum::debug_handler]
pub async fn form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    templates::render(&state.templates, "form.html", context! {})
}

pub async fn hello(Path(name): Path<String>) -> String {
    format!("내 이름은 {name}")
}

/// Integer path variable selecting one of three fixed names; anything
/// outside 1..=3 selects nothing. A non-integer segment is no route at all.
pub async fn input(Path(raw): Path<String>) -> Response {
    let Ok(num) = raw.parse::<i32>() else {
        return not_found_response();
    };

    let name = match num {
        1 => "홍길동",
        2 => "전우치",
        3 => "손오공",
        _ => "",
    };
    format!("내 선택은 {name}").into_response()
}

pub async fn daum() -> Redirect {
    Redirect::to("https://daum.net/")
}

pub async fn naver() -> Redirect {
    Redirect::to("https://naver.com/")
}

/// Fallback for every unmatched path. Logged so a misrouted client shows up
/// in the server console.
pub async fn not_found(uri: Uri) -> Response {
    tracing::warn!(%uri, "no route matched");
    not_found_response()
}

fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()
}
