//! WebSocket Handler - 渲染端连接
//!
//! 下行：当前帧 + 渲染事件流
//! 上行：用户意图（如播放/暂停按钮），作为新的 update 转发

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use crate::application::PlaybackIntentCommand;
use crate::domain::live_activity::LiveSessionId;
use crate::infrastructure::adapters::BroadcastSurface;
use crate::infrastructure::events::{EventPublisher, SurfaceEvent};
use crate::infrastructure::http::dto::IntentRequest;
use crate::infrastructure::http::state::AppState;

/// 渲染端 WebSocket 连接处理
pub async fn surface_websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_surface_socket(socket, state))
}

async fn handle_surface_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    let mut feed = RendererFeed::subscribe(&state.event_publisher, state.surface.clone());
    let initial_event = feed.initial_event();

    tracing::info!(has_frame = initial_event.is_some(), "Surface renderer connected");

    // 事件转发任务
    let forward_task = tokio::spawn(async move {
        if let Some(event) = initial_event {
            if let Err(e) = send_event(&mut sender, &event).await {
                tracing::debug!(error = %e, "Failed to send initial frame");
                return;
            }
        }

        while let Some(event) = feed.next_event().await {
            if let Err(e) = send_event(&mut sender, &event).await {
                tracing::debug!(error = %e, "Failed to send surface event");
                break;
            }
        }
    });

    // 接收渲染端的用户意图
    let intent_state = state.clone();
    let receive_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(text)) => forward_intent(&intent_state, &text).await,
                Ok(Message::Close(_)) => {
                    tracing::info!("Surface renderer closed connection");
                    break;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Surface WebSocket error");
                    break;
                }
                _ => {}
            }
        }
    });

    join_first(forward_task, receive_task).await;

    tracing::info!("Surface renderer disconnected");
}

/// 等待任一任务结束，中止另一个并等它释放持有的状态
async fn join_first(mut first: JoinHandle<()>, mut second: JoinHandle<()>) {
    tokio::select! {
        _ = &mut first => {
            second.abort();
            let _ = second.await;
        }
        _ = &mut second => {
            first.abort();
            let _ = first.await;
        }
    }
}

async fn send_event(
    sender: &mut SplitSink<WebSocket, Message>,
    event: &SurfaceEvent,
) -> Result<(), axum::Error> {
    let json = match serde_json::to_string(event) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize surface event");
            return Ok(());
        }
    };
    sender.send(Message::Text(json)).await
}

/// 单个渲染端的事件源
///
/// 落后于广播时丢弃积压，改发当前帧重新同步；
/// 此时已无渲染面则拆除渲染端正在展示的会话
struct RendererFeed {
    events: broadcast::Receiver<SurfaceEvent>,
    surface: Arc<BroadcastSurface>,
    shown: Option<LiveSessionId>,
}

impl RendererFeed {
    /// 先订阅再取当前帧，避免两者之间的事件丢失
    fn subscribe(publisher: &EventPublisher, surface: Arc<BroadcastSurface>) -> Self {
        Self {
            events: publisher.subscribe(),
            surface,
            shown: None,
        }
    }

    /// 连接后的首帧
    fn initial_event(&mut self) -> Option<SurfaceEvent> {
        let event = self.surface.current_frame().map(|frame| frame.to_event());
        self.track(event)
    }

    /// 下一条发给渲染端的事件，广播关闭时返回 None
    async fn next_event(&mut self) -> Option<SurfaceEvent> {
        loop {
            match self.events.recv().await {
                Ok(event) => return self.track(Some(event)),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        skipped = skipped,
                        "Surface renderer lagging, resyncing from current frame"
                    );
                    if let Some(event) = self.resync() {
                        return Some(event);
                    }
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    fn resync(&mut self) -> Option<SurfaceEvent> {
        self.events = self.events.resubscribe();
        let event = match self.surface.current_frame() {
            Some(frame) => Some(frame.to_event()),
            None => self
                .shown
                .map(|session_id| SurfaceEvent::SurfaceTornDown { session_id }),
        };
        self.track(event)
    }

    fn track(&mut self, event: Option<SurfaceEvent>) -> Option<SurfaceEvent> {
        if let Some(event) = &event {
            self.shown = match event {
                SurfaceEvent::SurfaceTornDown { .. } => None,
                other => Some(other.session_id()),
            };
        }
        event
    }
}

async fn forward_intent(state: &AppState, text: &str) {
    let request: IntentRequest = match serde_json::from_str(text) {
        Ok(req) => req,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring malformed renderer message");
            return;
        }
    };

    match state
        .intent_handler
        .handle(PlaybackIntentCommand {
            intent: request.intent,
        })
        .await
    {
        Ok(result) => tracing::debug!(
            intent = result.intent.as_str(),
            applied = result.applied,
            "Renderer intent forwarded"
        ),
        Err(e) => tracing::warn!(error = %e, "Renderer intent rejected"),
    }
}
