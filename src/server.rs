//! HTTP 服务 - 单一路由，请求到通知的同步调用链

use crate::config::Config;
use crate::intent::{interpret, RawParams};
use crate::toast::ToastDispatcher;
use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// 共享应用状态 - 启动后只读，无需加锁
pub struct AppState {
    /// 进程级配置快照
    pub config: Config,
    /// 可执行文件所在目录（图标路径的根）
    pub base_dir: PathBuf,
    /// 通知分发器
    pub dispatcher: ToastDispatcher,
}

/// 构建路由
pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(handle_notify)).with_state(state)
}

/// 处理一次通知请求：解析 → 分发 → 应答
///
/// 整个处理过程在当前任务内同步完成，请求之间互不影响。
async fn handle_notify(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RawParams>,
) -> (StatusCode, String) {
    // msg 缺失：确认收到但不做任何事
    let Some(intent) = interpret(&params, &state.config, &state.base_dir) else {
        return (StatusCode::OK, "OK (no msg)\n".to_string());
    };

    info!(msg = %intent.message, "Received");

    match state.dispatcher.dispatch(&intent, &state.config) {
        Ok(()) => (StatusCode::OK, format!("OK: {}\n", intent.message)),
        Err(e) => {
            error!(error = %e, "dispatch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}\n"))
        }
    }
}

/// 绑定端口并开始服务，直到进程退出
pub async fn serve(state: Arc<AppState>, port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Listening on {addr}");
    info!("Try: http://localhost:{port}/?msg=hello");

    axum::serve(listener, router(state))
        .await
        .context("server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{ToastDescriptor, ToastSubmitter};
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    struct CountingSubmitter {
        count: AtomicUsize,
    }

    impl ToastSubmitter for CountingSubmitter {
        fn name(&self) -> &str {
            "counting"
        }

        fn submit(&self, _descriptor: &ToastDescriptor) -> anyhow::Result<()> {
            self.count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn test_state(submitter: Arc<dyn ToastSubmitter>) -> Arc<AppState> {
        Arc::new(AppState {
            config: Config::default(),
            base_dir: PathBuf::from("/opt/wt"),
            dispatcher: ToastDispatcher::new(submitter),
        })
    }

    #[tokio::test]
    async fn test_no_msg_responds_ok_without_submit() {
        let submitter = Arc::new(CountingSubmitter {
            count: AtomicUsize::new(0),
        });
        let state = test_state(submitter.clone());

        let response = router(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"OK (no msg)\n");
        assert_eq!(submitter.count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_msg_dispatches_and_echoes() {
        let submitter = Arc::new(CountingSubmitter {
            count: AtomicUsize::new(0),
        });
        let state = test_state(submitter.clone());

        let response = router(state)
            .oneshot(
                Request::builder()
                    .uri("/?msg=hello")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"OK: hello\n");
        assert_eq!(submitter.count.load(Ordering::SeqCst), 1);
    }
}
