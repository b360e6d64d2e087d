use axum::{
    body::{Body, to_bytes},
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::error;

/// Logs the status and body of any server-error response before passing it
/// on. No designed code path produces a 5xx, so every hit here is a defect
/// worth a log line.
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;

    if response.status().is_server_error() {
        let (mut parts, body) = response.into_parts();
        let bytes = match to_bytes(body, 1024).await {
            Ok(b) => b,
            Err(e) => {
                error!("failed to read error response body: {e}");
                return Response::from_parts(parts, Body::empty());
            }
        };

        error!(
            %method,
            %uri,
            status = %parts.status,
            body = %String::from_utf8_lossy(&bytes),
            "server error"
        );

        // Body was consumed above, rebuild the response around the bytes.
        parts.headers.remove(axum::http::header::CONTENT_LENGTH);
        Response::from_parts(parts, Body::from(bytes))
    } else {
        response
    }
}
