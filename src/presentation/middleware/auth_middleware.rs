// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::presentation::errors::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// API密钥请求头
pub const API_KEY_HEADER: &str = "x-api-key";

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// 配置中的API密钥
    api_key: Arc<str>,
}

impl AuthState {
    pub fn new(api_key: impl Into<Arc<str>>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

/// 认证中间件
///
/// 验证请求头 `X-API-Key` 与配置的密钥一致，不一致时在处理器运行前返回401
///
/// # 参数
///
/// * `state` - 认证状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 认证成功后下游的响应
/// * `Err(AppError)` - 缺少或错误的API密钥
pub async fn auth_middleware(
    State(state): State<AuthState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path().to_owned();
    debug!("AuthMiddleware processing path: {}", path);

    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(key) if key == &*state.api_key => Ok(next.run(req).await),
        Some(_) => {
            warn!("Rejected request to {} with invalid API key", path);
            Err(AppError::Unauthorized("Invalid API key".to_string()))
        }
        None => {
            warn!("Rejected request to {} without API key", path);
            Err(AppError::Unauthorized("Missing X-API-Key header".to_string()))
        }
    }
}
