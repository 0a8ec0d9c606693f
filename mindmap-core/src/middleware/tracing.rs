use axum::http::HeaderValue;
use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id carried by the request, minted when the caller sent none.
fn request_id_from(req: &Request) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Ensure every request carries an `x-request-id` and echo it back on the
/// response, so browser callers and log lines can be matched up.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = request_id_from(&req);

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        req.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    let mut response = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, header_value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn keeps_caller_supplied_id() {
        let req = axum::http::Request::builder()
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_id_from(&req), "abc-123");
    }

    #[test]
    fn mints_uuid_when_absent() {
        let req = axum::http::Request::builder().body(Body::empty()).unwrap();
        let id = request_id_from(&req);
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
