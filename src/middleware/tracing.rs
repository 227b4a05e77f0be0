use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

const SERVER_FN_PREFIX: &str = "/api/";

/// Server function targeted by a request path, e.g. `get_story` for
/// `/api/get_story12345`. Page and asset requests have none.
pub fn server_fn_name(path: &str) -> Option<&str> {
    path.strip_prefix(SERVER_FN_PREFIX)
        .map(|name| name.trim_end_matches(|c: char| c.is_ascii_digit()))
        .filter(|name| !name.is_empty())
}

/// Wraps every request in a span tagged with a fresh request id and, for story
/// API calls, the server function being invoked.
pub async fn trace_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let server_fn = server_fn_name(request.uri().path())
        .unwrap_or("-")
        .to_string();

    let span = tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        server_fn = %server_fn,
        request_id = %request_id,
    );

    async move {
        let response = next.run(request).await;
        let status = response.status();
        if status.is_server_error() {
            tracing::error!(status = %status, "request failed");
        } else {
            tracing::info!(status = %status, "request completed");
        }
        response
    }
    .instrument(span)
    .await
}
