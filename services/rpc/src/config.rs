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

use crate::constants::*;
use alicloud_core::Context;

/// Config carries the credential configuration for a connection.
#[derive(Clone, Debug)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ALI_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ALI_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// Per-user credential file, `~/.aliyun.cfg` by default.
    pub user_config_file: String,
    /// System-wide credential file, only read when the per-user file is
    /// absent. `/etc/aliyun.cfg` by default.
    pub system_config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key_id: None,
            secret_access_key: None,
            user_config_file: USER_CONFIG_FILE.to_string(),
            system_config_file: SYSTEM_CONFIG_FILE.to_string(),
        }
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(ALI_ACCESS_KEY_ID).filter(|v| !v.is_empty()) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx
            .env_var(ALI_SECRET_ACCESS_KEY)
            .filter(|v| !v.is_empty())
        {
            self.secret_access_key.get_or_insert(v);
        }

        self
    }
}
