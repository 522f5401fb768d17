//! Web Toast CLI
//!
//! 本地 HTTP 端点，收到 ?msg=... 请求后弹出桌面通知

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use web_toast::{base_dir, AppState, Config, SystemToaster, ToastDispatcher};

#[derive(Parser)]
#[command(name = "web-toast")]
#[command(about = "Local HTTP bridge that turns web requests into desktop toast notifications")]
#[command(version)]
struct Cli {
    /// 覆盖配置文件中的监听端口
    #[arg(long)]
    port: Option<u16>,

    /// 只记录通知内容，不实际提交
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // 定位不到可执行文件目录就无法找到配置和图标，直接退出
    let base_dir = base_dir()?;
    let config = Config::load_or_init(&base_dir);

    let port = match cli.port {
        Some(p) => p,
        None => config
            .port
            .parse()
            .with_context(|| format!("invalid port in config: {:?}", config.port))?,
    };

    let dispatcher =
        ToastDispatcher::new(Arc::new(SystemToaster::new())).with_dry_run(cli.dry_run);

    let state = Arc::new(AppState {
        config,
        base_dir,
        dispatcher,
    });

    web_toast::serve(state, port).await
}
