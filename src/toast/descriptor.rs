//! 通知描述符 - 提交给通知子系统的结构化载荷

use crate::config::Config;
use crate::intent::NotificationIntent;
use std::path::PathBuf;

/// 协议型动作：激活时由系统打开参数 URL
pub const ACTION_TYPE_PROTOCOL: &str = "protocol";

/// 通知上唯一的可点击动作
#[derive(Debug, Clone, PartialEq)]
pub struct ToastAction {
    /// 动作类型（目前只有 protocol）
    pub action_type: &'static str,
    /// 按钮文字
    pub label: String,
    /// 激活时打开的 URL
    pub url: String,
}

/// 通知描述符
#[derive(Debug, Clone, PartialEq)]
pub struct ToastDescriptor {
    /// 发送者标识
    pub app_id: String,
    /// 标题
    pub title: String,
    /// 正文
    pub body: String,
    /// 图标绝对路径
    pub icon: PathBuf,
    /// 可点击动作
    pub action: ToastAction,
}

impl ToastDescriptor {
    /// 由通知意图和配置组装描述符
    pub fn from_parts(intent: &NotificationIntent, config: &Config) -> Self {
        Self {
            app_id: config.app_id.clone(),
            title: intent.title.clone(),
            body: intent.subtitle.clone(),
            icon: intent.icon_path.clone(),
            action: ToastAction {
                action_type: ACTION_TYPE_PROTOCOL,
                label: config.button_label.clone(),
                url: config.url.clone(),
            },
        }
    }
}
