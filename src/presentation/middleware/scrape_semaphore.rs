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

use std::sync::Arc;
use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};

/// 抓取任务并发信号量
///
/// 限制同时运行的抓取任务数，超出时请求排队等待许可
#[derive(Clone, Debug)]
pub struct ScrapeSemaphore {
    semaphore: Arc<Semaphore>,
}

impl ScrapeSemaphore {
    /// 创建一个新的ScrapeSemaphore实例
    ///
    /// # 参数
    ///
    /// * `permits` - 允许同时运行的抓取任务数
    pub fn new(permits: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(permits)),
        }
    }

    /// 等待并获取一个许可，许可在丢弃时归还
    pub async fn acquire(&self) -> Result<OwnedSemaphorePermit, AcquireError> {
        self.semaphore.clone().acquire_owned().await
    }

    /// 当前可用的许可数
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}
