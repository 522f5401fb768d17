//! 通知模块 - 构造描述符并提交给操作系统通知子系统

pub mod descriptor;
pub mod dispatcher;
pub mod submitter;
pub mod system;

pub use descriptor::{ToastAction, ToastDescriptor};
pub use dispatcher::{DispatchError, ToastDispatcher};
pub use submitter::ToastSubmitter;
pub use system::SystemToaster;
