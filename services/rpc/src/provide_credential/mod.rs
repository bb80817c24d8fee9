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

mod config;
pub use config::ConfigCredentialProvider;

mod config_file;
pub use config_file::ConfigFileCredentialProvider;

mod default;
pub use default::DefaultCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

mod r#static;
pub use r#static::StaticCredentialProvider;

use crate::Credential;
use alicloud_core::{Context, Error, ProvideCredential, Result, SigningCredential};

/// Resolve a usable credential from `provider`.
///
/// Fails with [`ErrorKind::CredentialNotFound`](alicloud_core::ErrorKind::CredentialNotFound)
/// when the provider has nothing to offer.
pub async fn resolve_credential<P>(ctx: &Context, provider: &P) -> Result<Credential>
where
    P: ProvideCredential<Credential = Credential> + ?Sized,
{
    match provider.provide_credential(ctx).await? {
        Some(cred) if cred.is_valid() => Ok(cred),
        _ => Err(Error::credential_not_found("Could not find credentials")),
    }
}
