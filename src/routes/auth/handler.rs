use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use minijinja::context;

use crate::{AppState, error::AppError, session::SESSION_COOKIE, templates};

use super::model::LoginForm;

const LOGIN_ERROR: &str = "아이디 또는 비밀번호가 틀렸습니다.";

#[axum::debug_handler]
pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    templates::render(&state.templates, "login.html", context! {})
}

/// Verifies the submitted pair against the user repository. Success mints a
/// session token and sends the client to the protected page; failure
/// re-renders the form with an error and leaves the session store untouched.
#[axum::debug_handler]
pub async fn login_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if state.users.verify(&form.username, &form.password)? {
        let token = state.sessions.insert(&form.username).await;
        let cookie = Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .build();

        tracing::info!(username = %form.username, "login succeeded");
        return Ok((jar.add(cookie), Redirect::to("/mypage")).into_response());
    }

    tracing::info!(username = %form.username, "login rejected");
    let page = templates::render(
        &state.templates,
        "login.html",
        context! { error => LOGIN_ERROR },
    )?;
    Ok(page.into_response())
}

/// Protected view: renders the welcome page for an authenticated session,
/// otherwise sends the client to the login form. The username passes through
/// the auto-escaping template before display.
#[axum::debug_handler]
pub async fn mypage(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    let username = match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.sessions.username(cookie.value()).await,
        None => None,
    };

    match username {
        Some(username) => {
            let page = templates::render(&state.templates, "welcome.html", context! { username })?;
            Ok(page.into_response())
        }
        None => Ok(Redirect::to("/login").into_response()),
    }
}

/// Drops the username from the caller's session and returns to the index.
/// Safe to call any number of times, with or without a session.
#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Redirect {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.clear_username(cookie.value()).await;
    }
    Redirect::to("/")
}
