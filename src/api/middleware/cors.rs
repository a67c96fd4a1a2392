//! Permissive CORS headers for the link endpoints.

use axum::http::{HeaderValue, header};
use axum::response::Response;

/// Headers attached to every response from the link endpoints.
///
/// The browser front-end is served from a different origin than the API and
/// reads error bodies, so failures carry them too.
pub const CORS_HEADERS: [(header::HeaderName, &str); 4] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "Content-Type,Authorization",
    ),
    (
        header::ACCESS_CONTROL_ALLOW_METHODS,
        "OPTIONS,POST,GET,PUT,DELETE",
    ),
    (header::ACCESS_CONTROL_EXPOSE_HEADERS, "Content-Length"),
];

/// Response mapper adding [`CORS_HEADERS`], used with
/// [`axum::middleware::map_response`].
///
/// # Integration
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/links", post(create_link_handler))
///     .route_layer(middleware::map_response(cors::layer));
/// ```
pub async fn layer(mut response: Response) -> Response {
    let headers = response.headers_mut();
    for (name, value) in CORS_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    response
}
