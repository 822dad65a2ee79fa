// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志格式环境变量，值为 `json` 时输出JSON日志
pub const LOG_FORMAT_ENV: &str = "TASKSCRAPE_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info,taskscrape=debug";

/// 初始化全局日志订阅器
///
/// 过滤规则取自 `RUST_LOG`，未设置时使用 `info,taskscrape=debug`。
/// 重复初始化返回错误而不是panic。
pub fn init_telemetry() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    if json_requested() {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    }
}

fn json_requested() -> bool {
    std::env::var(LOG_FORMAT_ENV).is_ok_and(|value| value.eq_ignore_ascii_case("json"))
}
