use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum AppError {
    /// A template failed to render.
    Template(minijinja::Error),
    /// Credential verification could not be performed.
    Credential(bcrypt::BcryptError),
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Template(err)
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::Credential(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = match self {
            AppError::Template(err) => format!("template render failed: {err}"),
            AppError::Credential(err) => format!("credential verification failed: {err}"),
        };
        tracing::error!("{detail}");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "서버 내부 오류가 발생했습니다",
        )
            .into_response()
    }
}
