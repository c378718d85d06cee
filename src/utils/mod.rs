//! # 常用接口模块
//!
//! 本模块提供各可执行文件共用的初始化操作

use tracing_subscriber::EnvFilter;

/// 未设置 `RUST_LOG` 时使用的日志过滤规则
pub const DEFAULT_LOG_FILTER: &str = "evalnet=info";

/// 安装 fmt 日志订阅器，过滤规则优先取自 `RUST_LOG`。重复调用无副作用
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
