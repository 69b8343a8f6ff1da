//! Forwarding requests of the client to the catalog backend
//!
//! The client only talks to this server. Everything below [`API_BASE_URL`] and
//! [`MEDIA_BASE_URL`] is forwarded to the backend as it is; the auth forms below
//! [`AUTH_BASE_URL`] are forwarded to the page urls of the backend which handle them.
//!
//! Only the headers the backend needs (session cookie, csrf token, content type) are passed on,
//! and only content type and cookies are passed back.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::OriginalUri,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Extension,
};
use shelfmark_shared::urls::{API_BASE_URL, AUTH_BASE_URL, MEDIA_BASE_URL};
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Request headers passed on to the backend
const FORWARDED_REQUEST_HEADERS: &[&str] = &[
    "cookie",
    "content-type",
    "x-csrftoken",
    "x-requested-with",
    "referer",
];

/// Response headers passed back to the client
const FORWARDED_RESPONSE_HEADERS: &[&str] = &["content-type", "set-cookie", "location"];

#[derive(Debug)]
pub enum ForwardError {
    /// This path is not forwarded
    NotForwarded(String),
    /// The backend url and the path do not form a url
    Join(String),
    /// The backend could not be reached
    Request(reqwest::Error),
    /// The backend answered, but the body could not be read
    Body(reqwest::Error),
}
impl core::fmt::Display for ForwardError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::NotForwarded(path) => {
                write!(f, "This path is not forwarded to the backend: {path}")
            }
            Self::Join(path) => {
                write!(f, "Unable to build backend url for path: {path}")
            }
            Self::Request(e) => {
                write!(f, "Unable to reach the backend: {e}")
            }
            Self::Body(e) => {
                write!(f, "Unable to read the answer of the backend: {e}")
            }
        }
    }
}
impl core::error::Error for ForwardError {}
impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        match self {
            Self::NotForwarded(_) => StatusCode::NOT_FOUND.into_response(),
            Self::Join(_) => StatusCode::BAD_REQUEST.into_response(),
            Self::Request(_) | Self::Body(_) => StatusCode::BAD_GATEWAY.into_response(),
        }
    }
}

/// The path on the backend (relative to its base url) a client path is forwarded to
pub fn backend_path(path: &str) -> Option<String> {
    if let Some(rest) = path.strip_prefix(AUTH_BASE_URL) {
        return match rest {
            "/login/" | "/login" => Some("login/".to_string()),
            "/register/" | "/register" => Some("register/".to_string()),
            _ => None,
        };
    }
    [API_BASE_URL, MEDIA_BASE_URL]
        .iter()
        .find(|base| {
            path.strip_prefix(*base)
                .is_some_and(|rest| rest.starts_with('/'))
        })
        .map(|_| path.trim_start_matches('/').to_string())
}

/// The router forwarding all api, media and auth requests
pub fn forward_router() -> axum::Router {
    axum::Router::new()
        .route(&format!("{API_BASE_URL}/{{*rest}}"), any(forward))
        .route(&format!("{MEDIA_BASE_URL}/{{*rest}}"), any(forward))
        .route(&format!("{AUTH_BASE_URL}/{{*rest}}"), any(forward))
        .layer(TraceLayer::new_for_http())
}

async fn forward(
    Extension(config): Extension<Arc<Config>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ForwardError> {
    let path = uri.path();
    let relative = backend_path(path).ok_or_else(|| ForwardError::NotForwarded(path.to_string()))?;
    let mut target = config
        .backend_addr
        .join(&relative)
        .map_err(|_| ForwardError::Join(path.to_string()))?;
    target.set_query(uri.query());

    let mut request = config.http_client.request(method.clone(), target.clone());
    for name in FORWARDED_REQUEST_HEADERS {
        for value in headers.get_all(*name) {
            request = request.header(*name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let reply = match request.send().await {
        Ok(x) => x,
        Err(e) => {
            tracing::warn!("Failed to forward {method} {path} to {target}: {e}");
            return Err(ForwardError::Request(e));
        }
    };
    let status = reply.status();
    let mut reply_headers = HeaderMap::new();
    for name in FORWARDED_RESPONSE_HEADERS {
        for value in reply.headers().get_all(*name) {
            if let Ok(v) = HeaderValue::from_bytes(value.as_bytes()) {
                reply_headers.append(*name, v);
            }
        }
    }
    if status.is_server_error() {
        tracing::warn!("Backend answered {method} {path} with {status}");
    } else {
        tracing::debug!("Backend answered {method} {path} with {status}");
    }
    let bytes = reply.bytes().await.map_err(|e| {
        tracing::warn!("Failed to read backend answer for {path}: {e}");
        ForwardError::Body(e)
    })?;

    let mut response = (status, bytes).into_response();
    // the body is replaced, so its default content type must not stick
    response.headers_mut().remove(header::CONTENT_TYPE);
    response.headers_mut().extend(reply_headers);
    Ok(response)
}

#[cfg(test)]
mod test {
    use super::backend_path;

    #[test]
    fn api_and_media_keep_their_path() {
        assert_eq!(
            backend_path("/api/search-books/").as_deref(),
            Some("api/search-books/")
        );
        assert_eq!(
            backend_path("/api/admin/delete-book/").as_deref(),
            Some("api/admin/delete-book/")
        );
        assert_eq!(
            backend_path("/media/book_covers/dune.png").as_deref(),
            Some("media/book_covers/dune.png")
        );
    }

    #[test]
    fn auth_goes_to_the_backend_pages() {
        assert_eq!(backend_path("/auth/login/").as_deref(), Some("login/"));
        assert_eq!(backend_path("/auth/register").as_deref(), Some("register/"));
        assert_eq!(backend_path("/auth/admin/"), None);
    }

    #[test]
    fn everything_else_stays_here() {
        assert_eq!(backend_path("/library"), None);
        assert_eq!(backend_path("/apiary/x"), None);
        assert_eq!(backend_path("/api"), None);
    }
}
