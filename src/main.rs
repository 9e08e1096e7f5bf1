//! Tasklive - 任务播放实时活动服务
//!
//! 启动顺序：配置 → 日志 → 渲染端 / 能力开关 → SurfaceWorker → 会话管理器 → 桥接服务器

use std::sync::Arc;
use std::time::Duration;

use tasklive::application::LiveSessionManagerPort;
use tasklive::config::{load_config, print_config, LogConfig};
use tasklive::infrastructure::adapters::{BroadcastSurface, SwitchCapabilityGate};
use tasklive::infrastructure::events::EventPublisher;
use tasklive::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tasklive::infrastructure::memory::InMemoryLiveSessionManager;
use tasklive::infrastructure::worker::SurfaceWorker;
use tokio::sync::mpsc;

const SHUTDOWN_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},tasklive={},tower_http=debug", log.level, log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Tasklive - live activity service");
    print_config(&config);

    // 渲染端与能力开关
    let event_publisher = Arc::new(EventPublisher::with_capacity(config.live.event_buffer));
    let surface = Arc::new(BroadcastSurface::new(event_publisher.clone()));
    let capability_gate = Arc::new(SwitchCapabilityGate::new(config.live.capability_enabled));

    // 渲染请求队列
    let (surface_tx, surface_rx) = mpsc::unbounded_channel();

    // 启动 SurfaceWorker
    let worker = SurfaceWorker::new(surface_rx, surface.clone());
    let worker_handle = tokio::spawn(worker.run());

    // 会话管理器（唯一会话槽位的持有者）
    let session_manager = Arc::new(InMemoryLiveSessionManager::new(
        capability_gate.clone(),
        surface_tx,
    ));

    let state = Arc::new(AppState::new(
        session_manager.clone(),
        capability_gate,
        surface,
        event_publisher,
    ));

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state.clone());

    server
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    // 结束仍在进行的会话，关闭队列后等待 Worker 排空
    // 仍连接的渲染端会持有状态引用，因此排空有超时
    session_manager.end();
    drop(state);
    drop(session_manager);
    match tokio::time::timeout(SHUTDOWN_DRAIN_TIMEOUT, worker_handle).await {
        Ok(Ok(stats)) => tracing::info!(
            delivered = stats.delivered,
            stale = stats.stale,
            failed = stats.failed,
            "Surface queue drained"
        ),
        Ok(Err(e)) => tracing::warn!(error = %e, "SurfaceWorker task aborted"),
        Err(_) => tracing::warn!("Surface queue not drained before shutdown timeout"),
    }

    tracing::info!("Server shutdown complete");

    Ok(())
}
