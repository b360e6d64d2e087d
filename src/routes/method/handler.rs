use axum::{
    extract::{Form, Query, State},
    response::Html,
};
use minijinja::context;

use crate::{AppState, error::AppError, templates};

use super::model::{CrossSourceLookup, MethodParams};

/// GET submission: fields arrive in the query string.
#[axum::debug_handler]
pub async fn submit_get(
    State(state): State<AppState>,
    Query(params): Query<MethodParams>,
) -> Result<Html<String>, AppError> {
    tracing::debug!(userid = %params.userid, "form values received via GET");

    // A GET carries no form body, so the form-sourced lookup is always empty.
    templates::render(
        &state.templates,
        "get.html",
        context! {
            userid => params.userid,
            name => params.name.unwrap_or_default(),
            email => params.email.unwrap_or_default(),
            fail => "",
        },
    )
}

/// POST submission: fields arrive form-encoded in the body, while the
/// cross-source lookup reads the (normally empty) query string.
#[axum::debug_handler]
pub async fn submit_post(
    State(state): State<AppState>,
    Query(cross): Query<CrossSourceLookup>,
    Form(params): Form<MethodParams>,
) -> Result<Html<String>, AppError> {
    tracing::debug!(userid = %params.userid, "form values received via POST");

    templates::render(
        &state.templates,
        "post.html",
        context! {
            userid => params.userid,
            name => params.name.unwrap_or_default(),
            email => params.email.unwrap_or_default(),
            fail => cross.name.unwrap_or_default(),
        },
    )
}
