//! 日志初始化：tracing 输出到 stderr。
//!
//! `RUST_LOG` 优先；未设置时默认 `warn`，设置 `WORK_TIMER_DEBUG=1` 时本 crate 输出 debug。

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVE: &str = "warn";
const DEBUG_DIRECTIVE: &str = "warn,work_timer=debug";

/// 按环境变量得出过滤规则
fn filter_from_env() -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let debug_logging = std::env::var_os("WORK_TIMER_DEBUG").is_some();
    EnvFilter::new(if debug_logging {
        DEBUG_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    })
}

/// 安装全局 subscriber；重复调用无副作用
pub fn init() {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let _ = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter_from_env())
        .try_init();
}
