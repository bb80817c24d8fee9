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
use crate::sign::{canonicalized_query_string, sign};
use crate::{Credential, Parameters, Service};
use alicloud_core::time::{format_iso8601, now, DateTime};
use alicloud_core::Result;
use bytes::Bytes;
use http::Method;

/// A signed request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: Method,
    pub url: String,
    pub query_string: String,
}

impl SignedRequest {
    /// Convert into an [`http::Request`] with an empty body.
    pub fn to_http(&self) -> Result<http::Request<Bytes>> {
        Ok(http::Request::builder()
            .method(self.method.clone())
            .uri(&self.url)
            .body(Bytes::new())?)
    }
}

/// RequestBuilder merges caller parameters with the protocol defaults and signs them.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    service: Service,
    region_id: String,
    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestBuilder {
    pub fn new(service: Service, region_id: impl Into<String>) -> Self {
        Self {
            service,
            region_id: region_id.into(),
            time: None,
            nonce: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce. Only use this function for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: &str) -> Self {
        self.nonce = Some(nonce.to_string());
        self
    }

    /// Parameters sent with every request before caller overrides.
    fn default_parameters(&self, cred: &Credential) -> Parameters {
        let descriptor = self.service.descriptor();
        let nonce = self
            .nonce
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Parameters::new()
            .with(FORMAT, FORMAT_JSON)
            .with(VERSION, descriptor.api_version)
            .with(ACCESS_KEY_ID, &cred.access_key_id)
            .with(SIGNATURE_VERSION, SIGNATURE_VERSION_1_0)
            .with(SIGNATURE_METHOD, SIGNATURE_METHOD_HMAC_SHA1)
            .with(SIGNATURE_NONCE, nonce)
            .with(TIMESTAMP, format_iso8601(self.time.unwrap_or_else(now)))
            .with(REGION_ID, &self.region_id)
    }

    /// Build the final parameter set, including the signature.
    pub fn build_parameters(&self, cred: &Credential, params: Parameters) -> Parameters {
        let mut merged = self.default_parameters(cred);
        merged.extend(params);
        self.service.finalize_parameters(&mut merged);

        let signature = sign(&cred.secret_access_key, &merged);
        merged.insert(SIGNATURE, signature);
        merged
    }

    /// Build a signed GET request for `params`.
    pub fn build(&self, cred: &Credential, params: Parameters) -> SignedRequest {
        let query_string = canonicalized_query_string(&self.build_parameters(cred, params));
        let url = format!("{}/?{}", self.service.descriptor().base_url, query_string);

        SignedRequest {
            method: Method::GET,
            url,
            query_string,
        }
    }
}
