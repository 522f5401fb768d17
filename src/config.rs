//! 配置模块 - 读取可执行文件旁的 config.json

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// 配置文件名（位于可执行文件所在目录）
pub const CONFIG_FILE: &str = "config.json";

/// 图标目录名（位于可执行文件所在目录）
pub const IMG_DIR: &str = "img";

/// 进程级配置 - 启动时加载一次，之后只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 监听端口（字符串形式，与配置文件保持一致）
    pub port: String,
    /// 通知发送者标识
    #[serde(rename = "appid")]
    pub app_id: String,
    /// 标题模板，`{msg}` 会被替换为消息内容
    #[serde(rename = "title")]
    pub title_template: String,
    /// 默认副标题（请求未提供 sub 时使用）
    #[serde(rename = "sub")]
    pub default_subtitle: String,
    /// 通知按钮文字
    #[serde(rename = "btn")]
    pub button_label: String,
    /// 点击按钮时打开的 URL
    pub url: String,
    /// 默认图标文件名（相对 img 目录）
    #[serde(rename = "icon")]
    pub default_icon: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: "8080".to_string(),
            app_id: "WebToast".to_string(),
            title_template: "{msg}".to_string(),
            default_subtitle: String::new(),
            button_label: String::new(),
            url: "https://orthexgroup.com/404".to_string(),
            default_icon: String::new(),
        }
    }
}

impl Config {
    /// 从指定目录加载配置
    ///
    /// - 文件不存在：使用默认值并写回磁盘（写失败仅记录日志）
    /// - 文件损坏：记录解析错误，能解码的字段覆盖默认值，其余保持默认
    pub fn load_or_init(dir: &Path) -> Config {
        let path = dir.join(CONFIG_FILE);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(_) => {
                warn!(path = %path.display(), "config.json missing, using defaults");
                let cfg = Config::default();
                cfg.write_to(&path);
                return cfg;
            }
        };

        let mut cfg = Config::default();
        match serde_json::from_str::<Value>(&data) {
            Ok(value) => cfg.merge_value(&value),
            Err(e) => error!(error = %e, "config parse error"),
        }
        cfg
    }

    /// 将文件中成功解码的字符串字段合并到当前配置
    ///
    /// 缺失或类型不符的字段保持默认值，与 Go json.Unmarshal
    /// 填充预置结构体的行为一致。
    fn merge_value(&mut self, value: &Value) {
        let fields: [(&str, &mut String); 7] = [
            ("port", &mut self.port),
            ("appid", &mut self.app_id),
            ("title", &mut self.title_template),
            ("sub", &mut self.default_subtitle),
            ("btn", &mut self.button_label),
            ("url", &mut self.url),
            ("icon", &mut self.default_icon),
        ];
        for (key, slot) in fields {
            if let Some(s) = value.get(key).and_then(Value::as_str) {
                *slot = s.to_string();
            }
        }
    }

    /// 将配置写入磁盘（带缩进格式），失败只记录日志
    fn write_to(&self, path: &Path) {
        let payload = match serde_json::to_string_pretty(self) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "failed to serialize default config");
                return;
            }
        };
        match fs::write(path, payload) {
            Ok(()) => info!(path = %path.display(), "created default config.json"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to write default config"),
        }
    }
}

/// 获取可执行文件所在目录
///
/// 失败是致命错误：无法定位配置文件和图标资源。
pub fn base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("unable to get exe path")?;
    let dir = exe
        .parent()
        .context("exe path has no parent directory")?;
    Ok(dir.to_path_buf())
}
