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

use crate::{constants::*, Config, Credential};
use alicloud_core::{Context, Error, ProvideCredential, Result};
use async_trait::async_trait;
use log::Level;

/// ConfigFileCredentialProvider loads credentials from an INI credential file.
///
/// The per-user file (`~/.aliyun.cfg`) is read first. Only when it does
/// not exist does the provider fall back to the system-wide file
/// (`/etc/aliyun.cfg`). A per-user file that exists but cannot be read
/// yields no credential. The file must look like:
///
/// ```ini
/// [default]
/// access_key_id=ACCESS_KEY
/// secret_access_key=SECRET_KEY
/// ```
#[derive(Debug, Clone)]
pub struct ConfigFileCredentialProvider {
    user_config_file: String,
    system_config_file: String,
}

impl Default for ConfigFileCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigFileCredentialProvider {
    /// Create a provider reading the default credential files.
    pub fn new() -> Self {
        Self {
            user_config_file: USER_CONFIG_FILE.to_string(),
            system_config_file: SYSTEM_CONFIG_FILE.to_string(),
        }
    }

    /// Create a provider reading the credential files named in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            user_config_file: config.user_config_file.clone(),
            system_config_file: config.system_config_file.clone(),
        }
    }

    /// Override the per-user credential file. A leading `~` is expanded.
    pub fn with_user_config_file(mut self, path: impl Into<String>) -> Self {
        self.user_config_file = path.into();
        self
    }

    /// Override the system-wide credential file.
    pub fn with_system_config_file(mut self, path: impl Into<String>) -> Self {
        self.system_config_file = path.into();
        self
    }

    async fn read_config_file(&self, ctx: &Context) -> Option<String> {
        match ctx.expand_home_dir(&self.user_config_file) {
            Some(path) => match ctx.file_read_as_string(&path).await {
                Ok(content) => return Some(content),
                Err(err) if err.is_not_found() => ctx.log(
                    Level::Debug,
                    format_args!("credential file not found at {path}"),
                ),
                Err(err) => {
                    ctx.log(
                        Level::Debug,
                        format_args!("failed to read credential file {path}: {err}"),
                    );
                    return None;
                }
            },
            None => ctx.log(
                Level::Debug,
                format_args!("home dir unknown, skip {}", self.user_config_file),
            ),
        }

        match ctx.file_read_as_string(&self.system_config_file).await {
            Ok(content) => Some(content),
            Err(err) => {
                ctx.log(
                    Level::Debug,
                    format_args!(
                        "failed to read credential file {}: {err}",
                        self.system_config_file
                    ),
                );
                None
            }
        }
    }
}

#[async_trait]
impl ProvideCredential for ConfigFileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let Some(content) = self.read_config_file(ctx).await else {
            return Ok(None);
        };

        let ini = ini::Ini::load_from_str(&content).map_err(|e| {
            Error::config_invalid(format!("failed to parse credential file: {e}"))
        })?;
        let Some(section) = ini.section(Some(CONFIG_SECTION)) else {
            ctx.log(
                Level::Debug,
                format_args!("section [{CONFIG_SECTION}] not found in credential file"),
            );
            return Ok(None);
        };

        match (
            section.get(CONFIG_ACCESS_KEY_ID).filter(|v| !v.is_empty()),
            section
                .get(CONFIG_SECRET_ACCESS_KEY)
                .filter(|v| !v.is_empty()),
        ) {
            (Some(ak), Some(sk)) => {
                ctx.log(Level::Debug, format_args!("loading credential from file"));
                Ok(Some(Credential::new(ak, sk)))
            }
            _ => {
                ctx.log(
                    Level::Debug,
                    format_args!("incomplete credential file, skipping"),
                );
                Ok(None)
            }
        }
    }
}
