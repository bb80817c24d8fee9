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

use crate::constants::{DEFAULT_PAGE_SIZE, PAGE_NUMBER, PAGE_SIZE};
use crate::paginate::{remaining_pages, total_count};
use crate::provide_credential::resolve_credential;
use crate::{
    transport, Credential, DefaultCredentialProvider, Parameters, RequestBuilder, Service,
    SignedRequest,
};
use alicloud_core::{Context, Error, ProvideCredential, Result};
use log::Level;
use serde_json::Value;

/// Connection to one service in one region.
///
/// A connection holds its credential, region and service for its whole
/// lifetime and has no mutable state, so it can be cloned and shared
/// freely. Every call awaits its round trips in order before returning.
#[derive(Debug, Clone)]
pub struct Connection {
    ctx: Context,
    region_id: String,
    service: Service,
    credential: Credential,
    builder: RequestBuilder,
}

impl Connection {
    /// Connect with credentials found by [`DefaultCredentialProvider`].
    ///
    /// The environment is tried first, then the credential files.
    pub async fn new(ctx: Context, region_id: &str, service: &str) -> Result<Self> {
        Self::with_provider(ctx, region_id, service, &DefaultCredentialProvider::new()).await
    }

    /// Connect with credentials resolved from `provider`.
    pub async fn with_provider<P>(
        ctx: Context,
        region_id: &str,
        service: &str,
        provider: &P,
    ) -> Result<Self>
    where
        P: ProvideCredential<Credential = Credential> + ?Sized,
    {
        let (region_id, service) = check_target(region_id, service)?;
        let credential = resolve_credential(&ctx, provider).await?;
        Ok(Self::build(ctx, region_id, service, credential))
    }

    /// Connect with explicit keys.
    pub fn with_credential(
        ctx: Context,
        region_id: &str,
        service: &str,
        access_key_id: &str,
        secret_access_key: &str,
    ) -> Result<Self> {
        let (region_id, service) = check_target(region_id, service)?;
        let credential = Credential::new(access_key_id, secret_access_key);
        Ok(Self::build(ctx, region_id, service, credential))
    }

    fn build(ctx: Context, region_id: String, service: Service, credential: Credential) -> Self {
        ctx.log(
            Level::Debug,
            format_args!("{service} connection to {region_id} created"),
        );

        Self {
            builder: RequestBuilder::new(service, region_id.clone()),
            ctx,
            region_id,
            service,
            credential,
        }
    }

    /// Fail unless this connection targets `service`.
    pub(crate) fn expect_service(self, service: Service) -> Result<Self> {
        if self.service != service {
            return Err(Error::config_invalid(format!(
                "expected a {service} connection, got {}",
                self.service
            )));
        }
        Ok(self)
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    pub fn service(&self) -> Service {
        self.service
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Build the signed request `get` would send for `params`.
    pub fn build_request(&self, params: Parameters) -> SignedRequest {
        self.builder.build(&self.credential, params)
    }

    /// Send one request and return the parsed JSON response.
    pub async fn get(&self, params: Parameters) -> Result<Value> {
        let req = self.build_request(params);
        transport::execute(&self.ctx, &req).await
    }

    /// Fetch every page of a paginated call, in page order.
    ///
    /// `PageSize` is fixed to 50. The first response must carry
    /// `TotalCount`; a total of zero returns that single response.
    pub async fn get_all_pages(&self, mut params: Parameters) -> Result<Vec<Value>> {
        params.insert(PAGE_SIZE, DEFAULT_PAGE_SIZE);
        params.remove(PAGE_NUMBER);

        let first = self.get(params.clone()).await?;
        let total = total_count(&first)?;
        let mut pages = vec![first];
        if total == 0 {
            return Ok(pages);
        }

        let remaining = remaining_pages(total, DEFAULT_PAGE_SIZE);
        for page in 2..=remaining + 1 {
            params.insert(PAGE_NUMBER, page);
            pages.push(self.get(params.clone()).await?);
        }

        Ok(pages)
    }
}

fn check_target(region_id: &str, service: &str) -> Result<(String, Service)> {
    if region_id.is_empty() {
        return Err(Error::config_invalid("region_id is required"));
    }
    Ok((region_id.to_string(), service.parse()?))
}
