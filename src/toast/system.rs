//! 系统通知实现 - 通过 notify-rust 提交桌面通知

use super::descriptor::ToastDescriptor;
use super::submitter::ToastSubmitter;
use anyhow::{anyhow, Result};
use notify_rust::Notification;

/// 点击动作的标识符
const ACTION_OPEN: &str = "default";

/// 真实的系统通知提交器
pub struct SystemToaster;

impl SystemToaster {
    pub fn new() -> Self {
        Self
    }

    /// XDG 平台：提交后在后台线程等待动作触发，
    /// 点击按钮时打开配置的 URL
    #[cfg(all(unix, not(target_os = "macos")))]
    fn show(&self, notification: Notification, descriptor: &ToastDescriptor) -> Result<()> {
        let handle = notification.show().map_err(|e| anyhow!("{e}"))?;
        let url = descriptor.action.url.clone();
        std::thread::spawn(move || {
            handle.wait_for_action(|action| {
                if action == ACTION_OPEN {
                    open_url(&url);
                }
            });
        });
        Ok(())
    }

    /// 其他平台：只提交，动作激活由系统处理
    #[cfg(not(all(unix, not(target_os = "macos"))))]
    fn show(&self, notification: Notification, _descriptor: &ToastDescriptor) -> Result<()> {
        notification.show().map(drop).map_err(|e| anyhow!("{e}"))
    }
}

impl Default for SystemToaster {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastSubmitter for SystemToaster {
    fn name(&self) -> &str {
        "system"
    }

    fn submit(&self, descriptor: &ToastDescriptor) -> Result<()> {
        let mut notification = Notification::new();
        notification
            .appname(&descriptor.app_id)
            .summary(&descriptor.title)
            .body(&descriptor.body)
            .icon(&descriptor.icon.to_string_lossy())
            .action(ACTION_OPEN, &descriptor.action.label);
        self.show(notification, descriptor)
    }
}

/// 用系统默认方式打开 URL
#[cfg(all(unix, not(target_os = "macos")))]
fn open_url(url: &str) {
    if let Err(e) = std::process::Command::new("xdg-open").arg(url).spawn() {
        tracing::warn!(url = %url, error = %e, "failed to open action URL");
    }
}
