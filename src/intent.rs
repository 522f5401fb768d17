//! 请求解析模块 - 把查询参数和配置合并为通知意图

use crate::config::{Config, IMG_DIR};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 请求携带的原始查询参数
///
/// 缺失和空字符串视为同一种情况：未提供。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawParams {
    /// 通知消息（必填，缺失则本次请求为无操作）
    pub msg: Option<String>,
    /// 副标题覆盖
    pub sub: Option<String>,
    /// 图标文件名覆盖
    pub icon: Option<String>,
}

/// 通知意图 - 每个请求独立构造，用完即弃
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationIntent {
    /// 原始消息文本
    pub message: String,
    /// 标题（模板占位符已替换）
    pub title: String,
    /// 副标题
    pub subtitle: String,
    /// 图标绝对路径（此处不检查文件是否存在）
    pub icon_path: PathBuf,
}

/// 标题模板中的占位符
const TITLE_PLACEHOLDER: &str = "{msg}";

/// 把空字符串归一化为"未提供"
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// 参数合并：请求值优先，否则用配置默认值
pub fn merge_param(request: Option<&str>, default: &str) -> String {
    non_empty(request).unwrap_or(default).to_string()
}

/// 解析请求参数，生成通知意图
///
/// 返回 `None` 表示缺少 `msg`：按契约这不是错误，
/// 调用方应答复成功但不发送任何通知。
pub fn interpret(params: &RawParams, config: &Config, base_dir: &Path) -> Option<NotificationIntent> {
    let message = non_empty(params.msg.as_deref())?.to_string();

    let icon_name = merge_param(params.icon.as_deref(), &config.default_icon);
    let icon_path = base_dir.join(IMG_DIR).join(&icon_name);
    if non_empty(params.icon.as_deref()).is_some() {
        debug!(path = %icon_path.display(), "Using custom icon");
    } else {
        debug!(path = %icon_path.display(), "Using default icon");
    }

    let subtitle = merge_param(params.sub.as_deref(), &config.default_subtitle);
    let title = config.title_template.replace(TITLE_PLACEHOLDER, &message);

    Some(NotificationIntent {
        message,
        title,
        subtitle,
        icon_path,
    })
}
