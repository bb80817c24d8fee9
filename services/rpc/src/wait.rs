// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use alicloud_core::{Context, Error, Result};
use log::Level;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Waiter polls a resource until it reaches the wanted state.
///
/// Each round sleeps for `interval` first and then checks. A check that
/// lands exactly on `timeout` still counts. Once more than `timeout` has
/// elapsed without success the wait fails with
/// [`ErrorKind::Timeout`](alicloud_core::ErrorKind::Timeout). The timeout is
/// only checked between rounds, a slow check is never interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waiter {
    interval: Duration,
    timeout: Duration,
}

impl Default for Waiter {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
            timeout: Duration::from_secs(600),
        }
    }
}

impl Waiter {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Call `check` once per interval until it returns `true`.
    ///
    /// Errors returned by `check` abort the wait immediately.
    pub async fn wait_until<F, Fut>(
        &self,
        ctx: &Context,
        resource_id: &str,
        mut check: F,
    ) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<bool>>,
    {
        let start = Instant::now();
        loop {
            ctx.log(
                Level::Debug,
                format_args!("waiting {:?} for {resource_id}", self.interval),
            );
            tokio::time::sleep(self.interval).await;

            if check().await? {
                return Ok(());
            }

            let elapsed = start.elapsed();
            if elapsed > self.timeout {
                return Err(Error::timeout(resource_id, elapsed));
            }
        }
    }
}
