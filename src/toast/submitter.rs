//! 通知提交 trait - 操作系统通知子系统的边界

use super::descriptor::ToastDescriptor;
use anyhow::Result;

/// 通知提交接口
///
/// 渲染、点击处理都归操作系统管；这里只负责一次性提交。
/// 测试中可以用 mock 实现替换真实的系统调用。
pub trait ToastSubmitter: Send + Sync {
    /// 实现名称（用于日志）
    fn name(&self) -> &str;

    /// 同步提交一条通知，失败不重试
    fn submit(&self, descriptor: &ToastDescriptor) -> Result<()>;
}
