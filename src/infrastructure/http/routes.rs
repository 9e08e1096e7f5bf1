//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping              GET   健康检查
//! - /api/live/start        POST  开始直播会话（身份与快照字段同一对象）
//! - /api/live/update       POST  更新播放快照
//! - /api/live/end          POST  结束直播会话
//! - /api/live/status       GET   当前会话状态
//! - /api/live/intent       POST  转发用户意图
//! - /api/capability        GET   查询能力开关
//! - /api/capability        POST  设置能力开关
//! - /ws/surface            WS    渲染端事件流

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .route("/ws/surface", get(handlers::surface_websocket_handler))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/live", live_routes())
        .route(
            "/capability",
            get(handlers::get_capability).post(handlers::set_capability),
        )
}

/// Live 路由
fn live_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/start", post(handlers::start_live))
        .route("/update", post(handlers::update_live))
        .route("/end", post(handlers::end_live))
        .route("/status", get(handlers::live_status))
        .route("/intent", post(handlers::send_intent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{BroadcastSurface, SwitchCapabilityGate};
    use crate::infrastructure::events::{EventPublisher, SurfaceEvent};
    use crate::infrastructure::memory::InMemoryLiveSessionManager;
    use crate::infrastructure::worker::SurfaceWorker;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tokio::sync::mpsc;
    use tower::util::ServiceExt;

    struct TestApp {
        router: Router,
        state: Arc<AppState>,
    }

    fn test_app(capability: bool) -> TestApp {
        let publisher = EventPublisher::new().arc();
        let surface = BroadcastSurface::new(publisher.clone()).arc();
        let gate = Arc::new(SwitchCapabilityGate::new(capability));
        let (tx, rx) = mpsc::unbounded_channel();
        let manager = Arc::new(InMemoryLiveSessionManager::new(gate.clone(), tx));
        tokio::spawn(SurfaceWorker::new(rx, surface.clone()).run());

        let state = Arc::new(AppState::new(manager, gate, surface, publisher));
        TestApp {
            router: create_routes().with_state(state.clone()),
            state,
        }
    }

    async fn call(app: &TestApp, method: &str, uri: &str, body: &str) -> Value {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bridge_lifecycle() {
        let app = test_app(true);
        let mut events = app.state.event_publisher.subscribe();

        let body = json!({
            "taskTitle": "Laundry",
            "albumName": "Sunday",
            "currentTime": "00:00",
            "totalTime": "30:00",
            "progress": 0.0,
            "isPlaying": true,
            "isAutoPlay": false,
        });
        let res = call(&app, "POST", "/api/live/start", &body.to_string()).await;
        assert_eq!(res["errno"], 0);
        assert_eq!(res["data"]["started"], true);
        assert_eq!(res["data"]["status"]["state"], "active");
        assert_eq!(res["data"]["status"]["session"]["identity"]["taskTitle"], "Laundry");

        let res = call(&app, "POST", "/api/live/update", r#"{"currentTime":"15:00","progress":0.5}"#).await;
        assert_eq!(res["data"]["status"]["session"]["snapshot"]["progress"], 0.5);

        let res = call(&app, "POST", "/api/live/end", "").await;
        assert_eq!(res["data"]["status"]["state"], "none");
        assert!(res["data"]["status"]["session"].is_null());

        assert!(matches!(events.recv().await.unwrap(), SurfaceEvent::SurfaceCreated { .. }));
        assert!(matches!(events.recv().await.unwrap(), SurfaceEvent::SurfaceRefreshed { .. }));
        assert!(matches!(events.recv().await.unwrap(), SurfaceEvent::SurfaceTornDown { .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_uses_defaults() {
        let app = test_app(true);

        let res = call(&app, "POST", "/api/live/start", "not json at all").await;
        assert_eq!(res["data"]["started"], true);
        let snapshot = &res["data"]["status"]["session"]["snapshot"];
        assert_eq!(snapshot["currentTime"], "00:00");
        assert_eq!(snapshot["totalTime"], "00:00");
        assert_eq!(snapshot["progress"], 0.0);
        assert_eq!(snapshot["isPlaying"], false);
    }

    #[tokio::test]
    async fn test_capability_denied_over_bridge() {
        let app = test_app(false);

        let res = call(&app, "POST", "/api/live/start", "{}").await;
        assert_eq!(res["errno"], 0);
        assert_eq!(res["data"]["started"], false);
        assert_eq!(res["data"]["status"]["state"], "none");

        let res = call(&app, "POST", "/api/capability", r#"{"enabled":true}"#).await;
        assert_eq!(res["data"]["enabled"], true);

        let res = call(&app, "POST", "/api/live/start", "{}").await;
        assert_eq!(res["data"]["started"], true);
    }

    #[tokio::test]
    async fn test_intent_endpoint() {
        let app = test_app(true);

        let res = call(&app, "POST", "/api/live/intent", r#"{"intent":"toggle_play_pause"}"#).await;
        assert_eq!(res["data"]["applied"], false);

        call(&app, "POST", "/api/live/start", r#"{"isPlaying":true}"#).await;
        let res = call(&app, "POST", "/api/live/intent", r#"{"intent":"toggle_play_pause"}"#).await;
        assert_eq!(res["data"]["applied"], true);
        assert_eq!(res["data"]["status"]["session"]["snapshot"]["isPlaying"], false);

        let res = call(&app, "POST", "/api/live/intent", r#"{"intent":"skip"}"#).await;
        assert_eq!(res["errno"], 400);
    }

    #[tokio::test]
    async fn test_malformed_intent_and_capability_bodies_use_envelope() {
        let app = test_app(true);

        let res = call(&app, "POST", "/api/live/intent", "{not json").await;
        assert_eq!(res["errno"], 400);
        assert!(res["data"].is_null());

        let res = call(&app, "POST", "/api/capability", r#"{"enabled":"yes"}"#).await;
        assert_eq!(res["errno"], 400);

        let res = call(&app, "POST", "/api/capability", "").await;
        assert_eq!(res["errno"], 400);

        let res = call(&app, "GET", "/api/capability", "").await;
        assert_eq!(res["data"]["enabled"], true);
    }

    #[tokio::test]
    async fn test_ping_reports_live_state() {
        let app = test_app(true);

        let res = call(&app, "GET", "/api/ping", "").await;
        assert_eq!(res["status"], "ok");
        assert_eq!(res["live"], "none");

        call(&app, "POST", "/api/live/start", "{}").await;
        let res = call(&app, "GET", "/api/live/status", "").await;
        assert_eq!(res["data"]["status"]["state"], "active");
    }
}
