//! Secure transport enforcement.
//!
//! When `FORCE_HTTPS` is on, every request whose effective scheme is not
//! `https` is answered with a redirect to the same host and path over HTTPS.
//! Behind a TLS-terminating proxy the scheme is taken from `X-Forwarded-Proto`.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Header set by reverse proxies to carry the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Whether the redirect is active. Injected via `from_fn_with_state`.
#[derive(Debug, Clone, Copy)]
pub struct ForceHttps(pub bool);

/// Redirect middleware function.
///
/// # Flow
///
/// 1. If enforcement is off, or the request already arrived over HTTPS, call the next handler
/// 2. Otherwise build `https://<host><path-and-query>` and return `302 Found` with it as `Location`
///
/// A request without a usable `Host` header cannot be redirected and is passed through.
pub async fn force_https(
    State(ForceHttps(enabled)): State<ForceHttps>,
    request: Request,
    next: Next,
) -> Response {
    if !enabled || is_secure(request.uri(), request.headers()) {
        return next.run(request).await;
    }

    match https_location(request.uri(), request.headers()) {
        Some(location) => {
            tracing::debug!("Redirecting insecure request to {}", location);
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        None => next.run(request).await,
    }
}

fn is_secure(uri: &Uri, headers: &HeaderMap) -> bool {
    if uri.scheme_str() == Some("https") {
        return true;
    }

    headers
        .get(FORWARDED_PROTO)
        .and_then(|h| h.to_str().ok())
        .map(|proto| proto.trim().eq_ignore_ascii_case("https"))
        .unwrap_or(false)
}

fn https_location(uri: &Uri, headers: &HeaderMap) -> Option<String> {
    let host = uri
        .authority()
        .map(|a| a.as_str().to_string())
        .or_else(|| {
            headers
                .get(header::HOST)
                .and_then(|h| h.to_str().ok())
                .map(str::to_string)
        })?;

    let path = uri.path_and_query().map(|p| p.as_str()).unwrap_or("/");
    Some(format!("https://{host}{path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn forwarded_proto_marks_request_secure() {
        let uri: Uri = "/accounts".parse().unwrap();
        let mut headers = HeaderMap::new();
        assert!(!is_secure(&uri, &headers));

        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https"));
        assert!(is_secure(&uri, &headers));

        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("http"));
        assert!(!is_secure(&uri, &headers));
    }

    #[test]
    fn location_keeps_host_path_and_query() {
        let uri: Uri = "/accounts?x=1".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com:8080"));

        assert_eq!(
            https_location(&uri, &headers).as_deref(),
            Some("https://example.com:8080/accounts?x=1")
        );
    }

    #[test]
    fn location_needs_a_host() {
        let uri: Uri = "/".parse().unwrap();
        assert_eq!(https_location(&uri, &HeaderMap::new()), None);
    }
}
