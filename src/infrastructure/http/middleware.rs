//! HTTP Middleware
//!
//! 桥接请求日志：记录耗时，4xx / 5xx 单独告警

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 桥接请求日志中间件
///
/// 业务错误（errno != 0）在 ApiError::into_response() 中记录，这里只看 HTTP 状态码
pub async fn bridge_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(method = %method, path = %path, status = status.as_u16(), elapsed_ms, "Bridge call failed");
    } else if status.is_client_error() {
        tracing::warn!(method = %method, path = %path, status = status.as_u16(), elapsed_ms, "Bridge call rejected");
    } else {
        tracing::debug!(method = %method, path = %path, status = status.as_u16(), elapsed_ms, "Bridge call");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::post,
        Router,
    };
    use tower::util::ServiceExt;

    fn create_test_router() -> Router {
        Router::new()
            .route("/live/end", post(|| async { "OK" }))
            .route("/live/broken", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .layer(axum::middleware::from_fn(bridge_logging_middleware))
    }

    async fn call(uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_test_router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_passes_responses_through() {
        assert_eq!(call("/live/end").await, StatusCode::OK);
        assert_eq!(call("/live/broken").await, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(call("/live/missing").await, StatusCode::NOT_FOUND);
    }
}
