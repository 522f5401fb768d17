//! Web Toast - 把 HTTP 请求转成桌面通知的本地桥接服务

pub mod config;
pub mod intent;
pub mod server;
pub mod toast;

pub use config::{base_dir, Config};
pub use intent::{interpret, merge_param, NotificationIntent, RawParams};
pub use server::{router, serve, AppState};
pub use toast::{DispatchError, SystemToaster, ToastDescriptor, ToastDispatcher, ToastSubmitter};
