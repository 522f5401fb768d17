//! 通知分发器 - 把意图变成描述符并提交

use super::descriptor::ToastDescriptor;
use super::submitter::ToastSubmitter;
use crate::config::Config;
use crate::intent::NotificationIntent;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// 分发失败
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    /// 通知子系统提交失败，携带底层错误信息
    #[error("toast error: {0}")]
    Submit(String),
}

/// 通知分发器
pub struct ToastDispatcher {
    /// 通知子系统边界
    submitter: Arc<dyn ToastSubmitter>,
    /// dry-run 模式：只记录描述符，不实际提交
    dry_run: bool,
}

impl ToastDispatcher {
    /// 创建分发器
    pub fn new(submitter: Arc<dyn ToastSubmitter>) -> Self {
        Self {
            submitter,
            dry_run: false,
        }
    }

    /// 设置 dry-run 模式
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 分发一条通知：组装描述符，提交一次，不重试
    pub fn dispatch(&self, intent: &NotificationIntent, config: &Config) -> Result<(), DispatchError> {
        let descriptor = ToastDescriptor::from_parts(intent, config);

        if self.dry_run {
            info!(
                app_id = %descriptor.app_id,
                title = %descriptor.title,
                icon = %descriptor.icon.display(),
                "[DRY-RUN] Would submit toast"
            );
            return Ok(());
        }

        match self.submitter.submit(&descriptor) {
            Ok(()) => {
                debug!(submitter = self.submitter.name(), title = %descriptor.title, "Toast submitted");
                Ok(())
            }
            Err(e) => {
                warn!(submitter = self.submitter.name(), error = %e, "Toast submit failed");
                Err(DispatchError::Submit(e.to_string()))
            }
        }
    }
}
